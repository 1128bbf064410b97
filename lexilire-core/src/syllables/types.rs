//! Syllable types

use serde::{Deserialize, Serialize};

use crate::phonemes::{Phoneme, PhonemeId};

/// One written syllable of a word: a run of phoneme spans whose letters,
/// concatenated across all syllables, reproduce the word exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub phonemes: Vec<Phoneme>,
}

impl Syllable {
    pub fn new(phonemes: Vec<Phoneme>) -> Self {
        Self { phonemes }
    }

    /// Letters covered by this syllable, in input order.
    pub fn letters(&self) -> String {
        self.phonemes.iter().map(|p| p.letters.as_str()).collect()
    }

    /// Number of non-silent, non-passthrough phonemes.
    pub fn sounded_len(&self) -> usize {
        self.phonemes
            .iter()
            .filter(|p| p.phoneme.map_or(false, |id| id != PhonemeId::Muet))
            .count()
    }
}
