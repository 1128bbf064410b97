//! NAPI bindings - extract_phonemes(), segment_word(), adapt_text().

use napi_derive::napi;
use serde::{Deserialize, Serialize};

use lexilire_core::{AdaptationStep, Adapter, Phoneme, RenderSurface, Syllable};

/// A phoneme span returned to TypeScript.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsPhoneme {
    /// Phoneme code ("an", "ch", "muet"), absent for passthrough spans
    pub phoneme: Option<String>,
    /// Original-case letters covered by the span
    pub letters: String,
    /// IPA glyph, absent for passthrough and silent spans
    pub ipa: Option<String>,
}

impl From<Phoneme> for JsPhoneme {
    fn from(p: Phoneme) -> Self {
        let phoneme = p.phoneme.map(|id| id.code().to_string());
        let ipa = p
            .phoneme
            .map(|id| id.ipa())
            .filter(|glyph| !glyph.is_empty())
            .map(str::to_string);
        Self {
            phoneme,
            letters: p.letters,
            ipa,
        }
    }
}

/// A syllable returned to TypeScript.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsSyllable {
    pub phonemes: Vec<JsPhoneme>,
    pub letters: String,
}

impl From<Syllable> for JsSyllable {
    fn from(s: Syllable) -> Self {
        Self {
            letters: s.letters(),
            phonemes: s.phonemes.into_iter().map(JsPhoneme::from).collect(),
        }
    }
}

/// Transcribe one word into its phoneme spans.
#[napi]
pub fn extract_phonemes(word: String) -> Vec<JsPhoneme> {
    lexilire_core::extract_phonemes(&word)
        .into_iter()
        .map(JsPhoneme::from)
        .collect()
}

/// Transcribe and segment one word into written syllables.
#[napi]
pub fn segment_word(word: String) -> Vec<JsSyllable> {
    lexilire_core::segment_word(&word)
        .into_iter()
        .map(JsSyllable::from)
        .collect()
}

/// Render `text` to adapted HTML through a JSON profile (an array of
/// adaptation steps). Runs headless: line-level steps degrade because no
/// text measurer is available on this side of the boundary.
#[napi]
pub fn adapt_text(text: String, profile_json: String) -> napi::Result<String> {
    lexilire_core::adapt_text_json(&text, &profile_json, &RenderSurface::headless())
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Speech settings returned to TypeScript.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsReaderConfig {
    pub rate: f64,
    pub voice_index: u32,
}

/// Speech settings of the profile's "reader" step, when the profile has
/// one. The host drives its speech synthesis from this; the step renders
/// nothing.
#[napi]
pub fn reader_config(profile_json: String) -> napi::Result<Option<JsReaderConfig>> {
    let steps: Vec<AdaptationStep> =
        serde_json::from_str(&profile_json).map_err(|e| napi::Error::from_reason(e.to_string()))?;
    let adapter =
        Adapter::from_profile(&steps).map_err(|e| napi::Error::from_reason(e.to_string()))?;
    Ok(adapter.reader_config().map(|c| JsReaderConfig {
        rate: f64::from(c.rate),
        voice_index: c.voice_index as u32,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phoneme_mirror_conversion() {
        let spans = lexilire_core::extract_phonemes("chat");
        let js: Vec<JsPhoneme> = spans.into_iter().map(JsPhoneme::from).collect();
        assert_eq!(js[0].phoneme.as_deref(), Some("ch"));
        assert_eq!(js[0].letters, "ch");
        assert_eq!(js[0].ipa.as_deref(), Some("\u{0283}"));
        // silent final consonant has no IPA glyph
        let last = js.last().unwrap();
        assert_eq!(last.phoneme.as_deref(), Some("muet"));
        assert!(last.ipa.is_none());
    }

    #[test]
    fn test_syllable_mirror_conversion() {
        let syllables = lexilire_core::segment_word("porte");
        let js: Vec<JsSyllable> = syllables.into_iter().map(JsSyllable::from).collect();
        let letters: Vec<&str> = js.iter().map(|s| s.letters.as_str()).collect();
        assert_eq!(letters, vec!["por", "te"]);
    }

    #[test]
    fn test_reader_config_from_profile_json() {
        let profile = r#"[{"functionId": "reader", "params": {"rate": 1.2, "voiceIndex": 3}}]"#;
        let config = reader_config(profile.to_string()).unwrap().unwrap();
        assert_eq!(config.rate as f32, 1.2);
        assert_eq!(config.voice_index, 3);
        let none = reader_config("[]".to_string()).unwrap();
        assert!(none.is_none());
    }
}
