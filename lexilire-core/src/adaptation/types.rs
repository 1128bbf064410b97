//! Adaptation types - Profile steps, style entries and granularity levels

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Granularity at which an adaptation function operates, from coarsest to
/// finest. Ordering matters: the engine decomposes words only when a step
/// works at `Syllable` level or finer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Text,
    Word,
    Syllable,
    InterWord,
    Phoneme,
    Letter,
}

/// Visual treatment of one adaptation target.
///
/// All fields are optional in profile JSON; an all-default entry renders
/// nothing. `keys` narrows the targets (letter or phoneme codes); empty
/// means every target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleEntry {
    pub color: Option<String>,
    pub background: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub shadow: bool,
    pub stroke: bool,
    pub keys: Vec<String>,
    pub pictogram: Option<String>,
    pub ipa: bool,
}

impl StyleEntry {
    /// True when the target key is selected by this entry.
    pub fn selects(&self, key: &str) -> bool {
        self.keys.is_empty() || self.keys.iter().any(|k| k == key)
    }
}

/// One step of an adaptation profile.
///
/// `format` is a list: single-style functions read the first entry,
/// keyed functions (letters, phonemes) apply every entry whose `keys`
/// select the target, alternating functions rotate through the whole
/// list. An empty list means "no styling configured".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdaptationStep {
    /// Adaptation function to apply, e.g. "syllables" or "reading_rule"
    pub function_id: String,
    /// Styles of the produced spans
    pub format: Vec<StyleEntry>,
    /// Function-specific parameters
    pub params: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_ordering() {
        assert!(Granularity::Text < Granularity::Word);
        assert!(Granularity::Word < Granularity::Syllable);
        assert!(Granularity::Phoneme < Granularity::Letter);
    }

    #[test]
    fn test_step_deserializes_with_defaults() {
        let step: AdaptationStep =
            serde_json::from_str(r#"{"functionId": "syllables"}"#).unwrap();
        assert_eq!(step.function_id, "syllables");
        assert!(step.format.is_empty());
        assert!(step.params.is_empty());
    }

    #[test]
    fn test_style_entry_selects() {
        let all = StyleEntry::default();
        assert!(all.selects("a"));
        let some = StyleEntry {
            keys: vec!["b".into(), "d".into()],
            ..Default::default()
        };
        assert!(some.selects("b"));
        assert!(!some.selects("a"));
    }
}
