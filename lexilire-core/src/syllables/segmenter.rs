//! Syllable segmentation - Written-syllable boundaries from phoneme spans
//!
//! Works on the extractor's output, never on raw letters. Phoneme spans are
//! grouped into pronunciation units (silent and passthrough spans ride along
//! with a neighbouring sounded unit), then syllable boundaries fall out of a
//! single nucleus scan: each vowel unit closes a syllable, grabbing one coda
//! consonant when two consonant units follow.

use smallvec::SmallVec;

use crate::phonemes::{extract_phonemes, Phoneme, PhonemeClass, PhonemeId};

use super::types::Syllable;

/// Transcribe and segment one word.
pub fn segment_word(word: &str) -> Vec<Syllable> {
    segment_phonemes(extract_phonemes(word))
}

/// Segment an already extracted phoneme sequence.
///
/// Words with fewer than two sounded phonemes are a single syllable.
pub fn segment_phonemes(phonemes: Vec<Phoneme>) -> Vec<Syllable> {
    if phonemes.is_empty() {
        return Vec::new();
    }

    let phonemes = split_doubled(phonemes);

    let sounded = phonemes
        .iter()
        .filter(|p| p.phoneme.map_or(false, |id| id != PhonemeId::Muet))
        .count();
    if sounded < 2 {
        return vec![Syllable::new(phonemes)];
    }

    let units = fuse_glides(merge_onset_clusters(build_units(phonemes)));
    nucleus_scan(units)
}

/// Doubled consonant letters split so the two copies can land in different
/// syllables ("belle" gives bel + le). Digraph phonemes with distinct
/// letters ("ch", "ph") and the yod reading of "ll" are left intact.
fn split_doubled(phonemes: Vec<Phoneme>) -> Vec<Phoneme> {
    let mut out = Vec::with_capacity(phonemes.len());
    for p in phonemes {
        let doubled = p.is_consonant() && {
            let mut it = p.letters.chars();
            match (it.next(), it.next(), it.next()) {
                (Some(a), Some(b), None) => a.eq_ignore_ascii_case(&b),
                _ => false,
            }
        };
        if doubled {
            let mut it = p.letters.chars();
            let a = it.next().unwrap();
            let b = it.next().unwrap();
            out.push(Phoneme::new(p.phoneme, a.to_string()));
            out.push(Phoneme::new(p.phoneme, b.to_string()));
        } else {
            out.push(p);
        }
    }
    out
}

/// A pronunciation unit: one sounded phoneme plus any silent or passthrough
/// spans attached to it.
struct Unit {
    phonemes: SmallVec<[Phoneme; 4]>,
    class: PhonemeClass,
    head: PhonemeId,
}

fn build_units(phonemes: Vec<Phoneme>) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    // silent spans before the first sounded phoneme attach forward
    let mut lead: SmallVec<[Phoneme; 4]> = SmallVec::new();

    for p in phonemes {
        match (p.phoneme, p.class()) {
            (Some(head), Some(class)) if class != PhonemeClass::Silent => {
                let mut group = std::mem::take(&mut lead);
                group.push(p);
                units.push(Unit {
                    phonemes: group,
                    class,
                    head,
                });
            }
            _ => match units.last_mut() {
                Some(u) => u.phonemes.push(p),
                None => lead.push(p),
            },
        }
    }

    if !lead.is_empty() {
        match units.last_mut() {
            Some(u) => u.phonemes.extend(lead),
            // fully silent word, caller turns it into one syllable
            None => units.push(Unit {
                phonemes: lead,
                class: PhonemeClass::Silent,
                head: PhonemeId::Muet,
            }),
        }
    }

    units
}

/// Obstruent + liquid onsets are inseparable ("tableau" gives ta + bleau).
fn merge_onset_clusters(units: Vec<Unit>) -> Vec<Unit> {
    use PhonemeId::*;
    const OBSTRUENTS: [PhonemeId; 8] = [B, K, D, F, G, P, T, V];

    let mut out: Vec<Unit> = Vec::new();
    for u in units {
        let merge = matches!(u.head, L | R)
            && u.class == PhonemeClass::Consonant
            && out.last().map_or(false, |prev| {
                prev.class == PhonemeClass::Consonant && OBSTRUENTS.contains(&prev.head)
            });
        if merge {
            let prev = out.last_mut().unwrap();
            prev.phonemes.extend(u.phonemes);
        } else {
            out.push(u);
        }
    }
    out
}

/// A semi-vowel directly before a vowel joins its nucleus ("papier" gives
/// pa + pier, not pa + pi + er).
fn fuse_glides(units: Vec<Unit>) -> Vec<Unit> {
    let mut out: Vec<Unit> = Vec::new();
    for u in units {
        let fuse = u.class == PhonemeClass::Vowel
            && out
                .last()
                .map_or(false, |prev| prev.class == PhonemeClass::SemiVowel);
        if fuse {
            let prev = out.last_mut().unwrap();
            prev.phonemes.extend(u.phonemes);
            prev.class = PhonemeClass::Vowel;
        } else {
            out.push(u);
        }
    }
    out
}

fn nucleus_scan(units: Vec<Unit>) -> Vec<Syllable> {
    let n = units.len();
    let mut syllables: Vec<Syllable> = Vec::new();
    let mut current: Vec<Phoneme> = Vec::new();

    let mut i = 0;
    while i < n {
        let is_vowel = units[i].class == PhonemeClass::Vowel;
        current.extend(units[i].phonemes.iter().cloned());
        if is_vowel {
            // closed syllable keeps the first of two following consonants
            if i + 2 < n
                && units[i + 1].class != PhonemeClass::Vowel
                && units[i + 2].class != PhonemeClass::Vowel
            {
                current.extend(units[i + 1].phonemes.iter().cloned());
                i += 1;
            }
            syllables.push(Syllable::new(std::mem::take(&mut current)));
        }
        i += 1;
    }

    // trailing consonants close the last syllable
    if !current.is_empty() {
        match syllables.last_mut() {
            Some(last) => last.phonemes.extend(current),
            None => syllables.push(Syllable::new(current)),
        }
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(word: &str) -> Vec<String> {
        segment_word(word).iter().map(|s| s.letters()).collect()
    }

    #[test]
    fn test_letters_reassemble_word() {
        for w in ["attraper", "belle", "aujourd'hui", "écureuil", "18h30"] {
            assert_eq!(parts(w).concat(), w);
        }
    }

    #[test]
    fn test_open_syllables() {
        assert_eq!(parts("chocolat"), vec!["cho", "co", "lat"]);
        assert_eq!(parts("ami"), vec!["a", "mi"]);
        assert_eq!(parts("maison"), vec!["mai", "son"]);
    }

    #[test]
    fn test_closed_syllables() {
        assert_eq!(parts("porte"), vec!["por", "te"]);
        assert_eq!(parts("parler"), vec!["par", "ler"]);
    }

    #[test]
    fn test_doubled_consonants_split() {
        assert_eq!(parts("belle"), vec!["bel", "le"]);
        assert_eq!(parts("attraper"), vec!["at", "tra", "per"]);
        assert_eq!(parts("pomme"), vec!["pom", "me"]);
    }

    #[test]
    fn test_yod_ll_not_split() {
        assert_eq!(parts("fille"), vec!["fi", "lle"]);
    }

    #[test]
    fn test_onset_clusters_stay_together() {
        assert_eq!(parts("tableau"), vec!["ta", "bleau"]);
        assert_eq!(parts("secret"), vec!["se", "cret"]);
    }

    #[test]
    fn test_glide_joins_nucleus() {
        assert_eq!(parts("papier"), vec!["pa", "pier"]);
        assert_eq!(parts("oiseau"), vec!["oi", "seau"]);
    }

    #[test]
    fn test_trailing_silents_attach() {
        assert_eq!(parts("travail"), vec!["tra", "vail"]);
        assert_eq!(parts("petit"), vec!["pe", "tit"]);
    }

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(parts("chat"), vec!["chat"]);
        assert_eq!(parts("eau"), vec!["eau"]);
        assert_eq!(parts("à"), vec!["à"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment_word("").is_empty());
        assert!(segment_phonemes(Vec::new()).is_empty());
    }
}
