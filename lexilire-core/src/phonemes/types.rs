//! Phoneme types - Core data structures for grapheme-to-phoneme transcription

use serde::{Deserialize, Serialize};

/// Identity of a French phoneme emitted by the extractor.
///
/// The set is closed: every rule in the transcription tables maps a grapheme
/// span to one of these (or to `Muet` for silent spans). Unrecognized input
/// characters are represented by `Phoneme { phoneme: None, .. }` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonemeId {
    // Oral vowels
    A,
    EAigu,
    EOuvert,
    ECaduc,
    I,
    OOuvert,
    OFerme,
    U,
    Ou,
    EuOuvert,
    EuFerme,
    // Vocalic digraph nuclei
    Wa,
    Win,
    // Nasal vowels
    An,
    On,
    In,
    Un,
    // Semi-vowels
    Yod,
    W,
    Ue,
    // Consonants
    B,
    K,
    Ch,
    D,
    F,
    G,
    Gn,
    Ng,
    Je,
    L,
    M,
    N,
    P,
    R,
    S,
    T,
    V,
    Z,
    Ks,
    Gz,
    // Silent span
    Muet,
}

/// Derived class of a phoneme. Never stored; computed from fixed membership
/// sets over `PhonemeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeClass {
    Vowel,
    Consonant,
    SemiVowel,
    Silent,
}

impl PhonemeId {
    /// Stable string code, used as the key space for phoneme-targeted
    /// adaptation styles.
    pub fn code(self) -> &'static str {
        match self {
            PhonemeId::A => "a",
            PhonemeId::EAigu => "e_aigu",
            PhonemeId::EOuvert => "e_ouvert",
            PhonemeId::ECaduc => "e_caduc",
            PhonemeId::I => "i",
            PhonemeId::OOuvert => "o_ouvert",
            PhonemeId::OFerme => "o_ferme",
            PhonemeId::U => "u",
            PhonemeId::Ou => "ou",
            PhonemeId::EuOuvert => "eu_ouvert",
            PhonemeId::EuFerme => "eu_ferme",
            PhonemeId::Wa => "wa",
            PhonemeId::Win => "win",
            PhonemeId::An => "an",
            PhonemeId::On => "on",
            PhonemeId::In => "in",
            PhonemeId::Un => "un",
            PhonemeId::Yod => "yod",
            PhonemeId::W => "w",
            PhonemeId::Ue => "ue",
            PhonemeId::B => "b",
            PhonemeId::K => "k",
            PhonemeId::Ch => "ch",
            PhonemeId::D => "d",
            PhonemeId::F => "f",
            PhonemeId::G => "g",
            PhonemeId::Gn => "gn",
            PhonemeId::Ng => "ng",
            PhonemeId::Je => "je",
            PhonemeId::L => "l",
            PhonemeId::M => "m",
            PhonemeId::N => "n",
            PhonemeId::P => "p",
            PhonemeId::R => "r",
            PhonemeId::S => "s",
            PhonemeId::T => "t",
            PhonemeId::V => "v",
            PhonemeId::Z => "z",
            PhonemeId::Ks => "ks",
            PhonemeId::Gz => "gz",
            PhonemeId::Muet => "muet",
        }
    }

    /// Parse a style-target key back into a phoneme identity.
    pub fn from_code(code: &str) -> Option<PhonemeId> {
        ALL.iter().copied().find(|p| p.code() == code)
    }

    /// IPA glyph displayed above a phoneme span when a style carries the
    /// IPA flag.
    pub fn ipa(self) -> &'static str {
        match self {
            PhonemeId::A => "a",
            PhonemeId::EAigu => "e",
            PhonemeId::EOuvert => "\u{025b}",   // ɛ
            PhonemeId::ECaduc => "\u{0259}",    // ə
            PhonemeId::I => "i",
            PhonemeId::OOuvert => "\u{0254}",   // ɔ
            PhonemeId::OFerme => "o",
            PhonemeId::U => "y",
            PhonemeId::Ou => "u",
            PhonemeId::EuOuvert => "\u{0153}",  // œ
            PhonemeId::EuFerme => "\u{00f8}",   // ø
            PhonemeId::Wa => "wa",
            PhonemeId::Win => "w\u{025b}\u{0303}",
            PhonemeId::An => "\u{0251}\u{0303}",
            PhonemeId::On => "\u{0254}\u{0303}",
            PhonemeId::In => "\u{025b}\u{0303}",
            PhonemeId::Un => "\u{0153}\u{0303}",
            PhonemeId::Yod => "j",
            PhonemeId::W => "w",
            PhonemeId::Ue => "\u{0265}",        // ɥ
            PhonemeId::B => "b",
            PhonemeId::K => "k",
            PhonemeId::Ch => "\u{0283}",        // ʃ
            PhonemeId::D => "d",
            PhonemeId::F => "f",
            PhonemeId::G => "g",
            PhonemeId::Gn => "\u{0272}",        // ɲ
            PhonemeId::Ng => "\u{014b}",        // ŋ
            PhonemeId::Je => "\u{0292}",        // ʒ
            PhonemeId::L => "l",
            PhonemeId::M => "m",
            PhonemeId::N => "n",
            PhonemeId::P => "p",
            PhonemeId::R => "\u{0281}",         // ʁ
            PhonemeId::S => "s",
            PhonemeId::T => "t",
            PhonemeId::V => "v",
            PhonemeId::Z => "z",
            PhonemeId::Ks => "ks",
            PhonemeId::Gz => "gz",
            PhonemeId::Muet => "",
        }
    }

    pub fn class(self) -> PhonemeClass {
        match self {
            PhonemeId::A
            | PhonemeId::EAigu
            | PhonemeId::EOuvert
            | PhonemeId::ECaduc
            | PhonemeId::I
            | PhonemeId::OOuvert
            | PhonemeId::OFerme
            | PhonemeId::U
            | PhonemeId::Ou
            | PhonemeId::EuOuvert
            | PhonemeId::EuFerme
            | PhonemeId::Wa
            | PhonemeId::Win
            | PhonemeId::An
            | PhonemeId::On
            | PhonemeId::In
            | PhonemeId::Un => PhonemeClass::Vowel,
            PhonemeId::Yod | PhonemeId::W | PhonemeId::Ue => PhonemeClass::SemiVowel,
            PhonemeId::Muet => PhonemeClass::Silent,
            _ => PhonemeClass::Consonant,
        }
    }
}

const ALL: [PhonemeId; 41] = [
    PhonemeId::A,
    PhonemeId::EAigu,
    PhonemeId::EOuvert,
    PhonemeId::ECaduc,
    PhonemeId::I,
    PhonemeId::OOuvert,
    PhonemeId::OFerme,
    PhonemeId::U,
    PhonemeId::Ou,
    PhonemeId::EuOuvert,
    PhonemeId::EuFerme,
    PhonemeId::Wa,
    PhonemeId::Win,
    PhonemeId::An,
    PhonemeId::On,
    PhonemeId::In,
    PhonemeId::Un,
    PhonemeId::Yod,
    PhonemeId::W,
    PhonemeId::Ue,
    PhonemeId::B,
    PhonemeId::K,
    PhonemeId::Ch,
    PhonemeId::D,
    PhonemeId::F,
    PhonemeId::G,
    PhonemeId::Gn,
    PhonemeId::Ng,
    PhonemeId::Je,
    PhonemeId::L,
    PhonemeId::M,
    PhonemeId::N,
    PhonemeId::P,
    PhonemeId::R,
    PhonemeId::S,
    PhonemeId::T,
    PhonemeId::V,
    PhonemeId::Z,
    PhonemeId::Ks,
    PhonemeId::Gz,
    PhonemeId::Muet,
];

/// One extracted grapheme span of a word.
///
/// `letters` is the exact original-case substring consumed. `phoneme` is
/// `None` for characters the automaton does not recognize (digits, foreign
/// scripts, punctuation), which pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    /// Phoneme identity, or `None` for a passthrough span
    pub phoneme: Option<PhonemeId>,
    /// Original-case letters consumed for this span
    pub letters: String,
}

impl Phoneme {
    pub fn new(phoneme: Option<PhonemeId>, letters: impl Into<String>) -> Self {
        Self {
            phoneme,
            letters: letters.into(),
        }
    }

    /// Derived class; `None` for passthrough spans, which stay outside the
    /// vowel/consonant classification entirely.
    pub fn class(&self) -> Option<PhonemeClass> {
        self.phoneme.map(PhonemeId::class)
    }

    pub fn is_vowel(&self) -> bool {
        self.class() == Some(PhonemeClass::Vowel)
    }

    pub fn is_consonant(&self) -> bool {
        self.class() == Some(PhonemeClass::Consonant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for id in ALL {
            assert_eq!(PhonemeId::from_code(id.code()), Some(id));
        }
    }

    #[test]
    fn test_classes() {
        assert_eq!(PhonemeId::A.class(), PhonemeClass::Vowel);
        assert_eq!(PhonemeId::An.class(), PhonemeClass::Vowel);
        assert_eq!(PhonemeId::Yod.class(), PhonemeClass::SemiVowel);
        assert_eq!(PhonemeId::B.class(), PhonemeClass::Consonant);
        assert_eq!(PhonemeId::Muet.class(), PhonemeClass::Silent);
    }

    #[test]
    fn test_passthrough_has_no_class() {
        let p = Phoneme::new(None, "7");
        assert_eq!(p.class(), None);
        assert!(!p.is_vowel());
        assert!(!p.is_consonant());
    }
}
