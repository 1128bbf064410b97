//! Adaptation - typographic transformation of text for impaired readers
//!
//! A profile is an ordered list of steps, each naming an adaptation
//! function (colored syllables, phoneme highlighting, liaison marks, line
//! alternation...) with a style and parameters. The engine compiles the
//! profile once, then renders plain text to HTML span structures the host
//! can display and restyle.

mod engine;
mod html;
mod measure;
mod style;
mod types;
mod units;

pub use engine::{adapt_text, adapt_text_json, Adapter, ReaderConfig};
pub use measure::{MonospaceMeasurer, RenderSurface, TextMeasurer};
pub use types::{AdaptationStep, Granularity, StyleEntry};
