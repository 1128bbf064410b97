//! Syllables - Written-syllable segmentation over phoneme spans

mod segmenter;
mod types;

pub use segmenter::{segment_phonemes, segment_word};
pub use types::Syllable;
