use lexilire_core::{extract_phonemes, segment_phonemes, segment_word, PhonemeId};
use proptest::prelude::*;

fn french_word() -> impl Strategy<Value = String> {
    "[a-zàâäéèêëîïôöùûüçœ]{1,12}"
}

proptest! {
    #[test]
    fn spans_reassemble_any_input(s in ".{0,24}") {
        let joined: String = extract_phonemes(&s)
            .iter()
            .map(|p| p.letters.as_str())
            .collect();
        prop_assert_eq!(joined, s);
    }

    #[test]
    fn syllables_reassemble_any_input(s in ".{0,24}") {
        let joined: String = segment_word(&s)
            .iter()
            .map(|syl| syl.letters())
            .collect();
        prop_assert_eq!(joined, s);
    }

    #[test]
    fn every_span_consumes_letters(w in french_word()) {
        for p in extract_phonemes(&w) {
            prop_assert!(!p.letters.is_empty());
        }
    }

    #[test]
    fn span_count_bounded_by_char_count(w in french_word()) {
        let chars = w.chars().count();
        let spans = extract_phonemes(&w).len();
        prop_assert!(spans >= 1 && spans <= chars);
    }

    #[test]
    fn nonempty_word_has_at_least_one_syllable(w in french_word()) {
        prop_assert!(!segment_word(&w).is_empty());
    }

    #[test]
    fn every_syllable_covers_letters(w in french_word()) {
        for syl in segment_word(&w) {
            prop_assert!(!syl.letters().is_empty());
        }
    }

    #[test]
    fn at_most_one_nucleus_per_syllable_tail(w in french_word()) {
        // a syllable never contains two vowel phonemes separated by a
        // consonant, that is what would force a boundary
        for syl in segment_word(&w) {
            let classes: Vec<_> = syl
                .phonemes
                .iter()
                .filter(|p| p.phoneme.map_or(false, |id| id != PhonemeId::Muet))
                .map(|p| p.is_vowel())
                .collect();
            let mut seen_vowel = false;
            let mut consonant_after_vowel = false;
            for is_vowel in classes {
                if is_vowel {
                    prop_assert!(!(seen_vowel && consonant_after_vowel));
                    seen_vowel = true;
                } else if seen_vowel {
                    consonant_after_vowel = true;
                }
            }
        }
    }

    #[test]
    fn extraction_is_deterministic(w in french_word()) {
        prop_assert_eq!(extract_phonemes(&w), extract_phonemes(&w));
    }

    #[test]
    fn segmentation_matches_direct_extraction(w in french_word()) {
        let direct = segment_word(&w);
        let via_phonemes = segment_phonemes(extract_phonemes(&w));
        prop_assert_eq!(direct, via_phonemes);
    }
}
