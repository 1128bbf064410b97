//! Adaptation units - one runtime unit per profile step
//!
//! A unit is the compiled form of an `AdaptationStep`: the function it
//! names resolved to a variant, its parameters extracted and defaulted.
//! Alternating units carry their own counter, which lives as long as the
//! adapter so colors keep rotating across successive renders.

use serde_json::Value;

use crate::errors::ProfileError;

use super::style::style_string;
use super::types::{AdaptationStep, Granularity, StyleEntry};

/// Palette used by alternating functions when the profile supplies none.
fn default_palette() -> Vec<StyleEntry> {
    ["#d40000", "#0066cc", "#009933"]
        .into_iter()
        .map(|color| StyleEntry {
            color: Some(color.to_string()),
            ..Default::default()
        })
        .collect()
}

/// Rotating style state of an alternating unit.
#[derive(Debug)]
pub(crate) struct Alternation {
    styles: Vec<StyleEntry>,
    counter: usize,
}

impl Alternation {
    fn from_format(format: &[StyleEntry]) -> Self {
        // entries that all compose to nothing visible count as unconfigured
        let styles = if format.iter().all(|e| style_string(e).is_empty()) {
            default_palette()
        } else {
            format.to_vec()
        };
        Self { styles, counter: 0 }
    }

    /// Advance and return the style for the next segment. The counter is
    /// bumped before indexing, so the first segment wears style 1 of N.
    pub fn next_style(&mut self) -> &StyleEntry {
        self.counter += 1;
        &self.styles[self.counter % self.styles.len()]
    }
}

fn first_style(format: &[StyleEntry]) -> StyleEntry {
    format.first().cloned().unwrap_or_default()
}

/// Compiled adaptation function.
#[derive(Debug)]
pub(crate) enum AdaptationUnit {
    Default {
        style: StyleEntry,
    },
    Letters {
        styles: Vec<StyleEntry>,
    },
    Phonemes {
        styles: Vec<StyleEntry>,
    },
    Syllables {
        style: StyleEntry,
        separator: Option<String>,
    },
    SyllableArc {
        style: StyleEntry,
    },
    Liaisons {
        style: StyleEntry,
    },
    AlternatingLetters(Alternation),
    AlternatingPhonemes(Alternation),
    AlternatingSyllables(Alternation),
    AlternatingWords(Alternation),
    AlternatingLines(Alternation),
    ReadingRule {
        style: StyleEntry,
        line: usize,
    },
    /// Pure config carrier for the speech collaborator; identity markup.
    Reader {
        rate: f32,
        voice_index: usize,
    },
}

impl AdaptationUnit {
    pub fn from_step(step: &AdaptationStep) -> Result<Self, ProfileError> {
        let unit = match step.function_id.as_str() {
            "default" => AdaptationUnit::Default {
                style: first_style(&step.format),
            },
            "letters" => AdaptationUnit::Letters {
                styles: step.format.clone(),
            },
            "phonemes" => AdaptationUnit::Phonemes {
                styles: step.format.clone(),
            },
            "syllables" => AdaptationUnit::Syllables {
                style: first_style(&step.format),
                separator: step
                    .params
                    .get("separator")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            "syllable_arc" => AdaptationUnit::SyllableArc {
                style: first_style(&step.format),
            },
            "liaisons" => AdaptationUnit::Liaisons {
                style: first_style(&step.format),
            },
            "alternating_letters" => {
                AdaptationUnit::AlternatingLetters(Alternation::from_format(&step.format))
            }
            "alternating_phonemes" => {
                AdaptationUnit::AlternatingPhonemes(Alternation::from_format(&step.format))
            }
            "alternating_syllables" => {
                AdaptationUnit::AlternatingSyllables(Alternation::from_format(&step.format))
            }
            "alternating_words" => {
                AdaptationUnit::AlternatingWords(Alternation::from_format(&step.format))
            }
            "alternating_lines" => {
                AdaptationUnit::AlternatingLines(Alternation::from_format(&step.format))
            }
            "reading_rule" => AdaptationUnit::ReadingRule {
                style: first_style(&step.format),
                line: step
                    .params
                    .get("line")
                    .and_then(Value::as_u64)
                    .unwrap_or(0) as usize,
            },
            "reader" => AdaptationUnit::Reader {
                rate: step
                    .params
                    .get("rate")
                    .and_then(Value::as_f64)
                    .unwrap_or(1.0) as f32,
                voice_index: step
                    .params
                    .get("voiceIndex")
                    .and_then(Value::as_u64)
                    .unwrap_or(0) as usize,
            },
            other => return Err(ProfileError::UnknownFunction(other.to_string())),
        };
        Ok(unit)
    }

    pub fn level(&self) -> Granularity {
        match self {
            AdaptationUnit::Default { .. } | AdaptationUnit::AlternatingWords(_) => {
                Granularity::Word
            }
            AdaptationUnit::Letters { .. } | AdaptationUnit::AlternatingLetters(_) => {
                Granularity::Letter
            }
            AdaptationUnit::Phonemes { .. } | AdaptationUnit::AlternatingPhonemes(_) => {
                Granularity::Phoneme
            }
            AdaptationUnit::Syllables { .. }
            | AdaptationUnit::SyllableArc { .. }
            | AdaptationUnit::AlternatingSyllables(_) => Granularity::Syllable,
            AdaptationUnit::Liaisons { .. } => Granularity::InterWord,
            AdaptationUnit::AlternatingLines(_)
            | AdaptationUnit::ReadingRule { .. }
            | AdaptationUnit::Reader { .. } => Granularity::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(function_id: &str) -> AdaptationStep {
        AdaptationStep {
            function_id: function_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_function_is_rejected() {
        let err = AdaptationUnit::from_step(&step("sparkle")).unwrap_err();
        assert!(matches!(err, ProfileError::UnknownFunction(name) if name == "sparkle"));
    }

    #[test]
    fn test_all_known_functions_build() {
        for id in [
            "default",
            "letters",
            "phonemes",
            "syllables",
            "syllable_arc",
            "liaisons",
            "alternating_letters",
            "alternating_phonemes",
            "alternating_syllables",
            "alternating_words",
            "alternating_lines",
            "reading_rule",
            "reader",
        ] {
            assert!(AdaptationUnit::from_step(&step(id)).is_ok(), "{id}");
        }
    }

    #[test]
    fn test_alternation_counter_pre_increments() {
        let mut alt = Alternation::from_format(&[]);
        // first segment wears style 1, not style 0
        assert_eq!(alt.next_style().color.as_deref(), Some("#0066cc"));
        assert_eq!(alt.next_style().color.as_deref(), Some("#009933"));
        assert_eq!(alt.next_style().color.as_deref(), Some("#d40000"));
        assert_eq!(alt.next_style().color.as_deref(), Some("#0066cc"));
    }

    #[test]
    fn test_all_neutral_format_falls_back_to_palette() {
        let neutral = vec![StyleEntry::default(), StyleEntry::default()];
        let mut alt = Alternation::from_format(&neutral);
        assert_eq!(alt.next_style().color.as_deref(), Some("#0066cc"));
        assert_eq!(alt.next_style().color.as_deref(), Some("#009933"));
        assert_eq!(alt.next_style().color.as_deref(), Some("#d40000"));
    }

    #[test]
    fn test_alternation_uses_profile_styles() {
        let format: Vec<StyleEntry> = ["red", "blue"]
            .into_iter()
            .map(|c| StyleEntry {
                color: Some(c.to_string()),
                ..Default::default()
            })
            .collect();
        let mut alt = Alternation::from_format(&format);
        assert_eq!(alt.next_style().color.as_deref(), Some("blue"));
        assert_eq!(alt.next_style().color.as_deref(), Some("red"));
    }

    #[test]
    fn test_reader_params() {
        let mut s = step("reader");
        s.params.insert("rate".into(), serde_json::json!(1.5));
        s.params.insert("voiceIndex".into(), serde_json::json!(2));
        match AdaptationUnit::from_step(&s).unwrap() {
            AdaptationUnit::Reader { rate, voice_index } => {
                assert_eq!(rate, 1.5);
                assert_eq!(voice_index, 2);
            }
            _ => unreachable!(),
        }
    }
}
