//! lexilire-core: French reading-adaptation engine
//!
//! This crate provides the text-processing components for Lexilire:
//! - Phonemes: Rule-automaton grapheme-to-phoneme transcription
//! - Syllables: Written-syllable segmentation over phoneme spans
//! - Adaptation: Profile-driven HTML rendering (colors, syllable marks,
//!   liaison ties, line alternation, reading rule)
//! - Errors: Profile compilation failures

pub mod adaptation;
pub mod errors;
pub mod phonemes;
pub mod syllables;

// Re-exports for convenience
pub use adaptation::{
    adapt_text, adapt_text_json, AdaptationStep, Adapter, Granularity, MonospaceMeasurer,
    ReaderConfig, RenderSurface, StyleEntry, TextMeasurer,
};
pub use errors::ProfileError;
pub use phonemes::{extract_phonemes, Phoneme, PhonemeClass, PhonemeId};
pub use syllables::{segment_phonemes, segment_word, Syllable};
