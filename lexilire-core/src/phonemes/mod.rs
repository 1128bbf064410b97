//! Phonemes - French grapheme-to-phoneme transcription
//!
//! A rule automaton scans each word left to right. At every position the
//! current letter selects an ordered rule table; forward/backward context
//! patterns and exception word lists pick the rule, which emits one phoneme
//! span and consumes one or more letters. The emitted spans partition the
//! word, so downstream rendering can always rebuild the exact input text.

mod exceptions;
mod extractor;
mod rules;
mod tables;
mod types;

pub use extractor::extract_phonemes;
pub use types::{Phoneme, PhonemeClass, PhonemeId};
