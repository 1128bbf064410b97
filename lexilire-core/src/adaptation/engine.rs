//! Adaptation engine - renders text to HTML through a compiled profile
//!
//! The adapter is built once from a profile and reused across renders, so
//! alternating counters keep rotating over successive calls. Rendering is
//! two phases: `render` transcribes and decomposes words (only when some
//! step needs syllable level or finer) and marks inter-word liaisons;
//! `post_process` runs the line-level steps over the rendered HTML once
//! the host knows its layout, using the surface's text metrics.

use tracing::{debug, warn};

use crate::errors::ProfileError;
use crate::syllables::segment_word;

use super::html::{escape, split_word_spans, strip_tags, HtmlToken, WORD_SPAN_OPEN};
use super::measure::RenderSurface;
use super::style::{style_string, styled_span};
use super::types::{AdaptationStep, Granularity, StyleEntry};
use super::units::AdaptationUnit;

/// Speech settings carried by a "reader" profile step. The step itself
/// renders nothing; the host drives its speech synthesis from this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReaderConfig {
    pub rate: f32,
    pub voice_index: usize,
}

/// Compiled adaptation profile with its rendering state.
pub struct Adapter {
    units: Vec<AdaptationUnit>,
}

impl Adapter {
    /// Compile a profile. Fails only on a function name the engine does
    /// not know; malformed step parameters degrade to unstyled output.
    pub fn from_profile(steps: &[AdaptationStep]) -> Result<Self, ProfileError> {
        let units = steps
            .iter()
            .map(AdaptationUnit::from_step)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(steps = units.len(), "adaptation profile compiled");
        Ok(Self { units })
    }

    /// Speech settings, when the profile carries a "reader" step.
    pub fn reader_config(&self) -> Option<ReaderConfig> {
        self.units.iter().find_map(|u| match u {
            AdaptationUnit::Reader { rate, voice_index } => Some(ReaderConfig {
                rate: *rate,
                voice_index: *voice_index,
            }),
            _ => None,
        })
    }

    /// Full pipeline: render then post-process line-level steps.
    pub fn adapt(&mut self, text: &str, surface: &RenderSurface) -> String {
        let html = self.render(text, surface);
        self.post_process(&html, surface)
    }

    /// Render `text` to HTML, without line-level steps. Paragraphs are
    /// split on `'\n'` and joined with `<br/>`; every word lands inside
    /// `<span class="lx-word">`.
    pub fn render(&mut self, text: &str, surface: &RenderSurface) -> String {
        let decompose = self.units.iter().any(|u| {
            matches!(
                u.level(),
                Granularity::Syllable | Granularity::Phoneme | Granularity::Letter
            )
        });

        let paragraphs: Vec<String> = text
            .split('\n')
            .map(|par| self.render_paragraph(par, surface, decompose))
            .collect();
        paragraphs.join("<br/>")
    }

    fn render_paragraph(&mut self, par: &str, surface: &RenderSurface, decompose: bool) -> String {
        let tokens = tokenize(par);
        let mut rendered: Vec<String> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match token {
                RawToken::Word(w) => {
                    rendered.push(render_word(&mut self.units, w, surface, decompose))
                }
                RawToken::Sep(s) => rendered.push(escape(s)),
            }
        }

        let liaison_style = self.units.iter().find_map(|u| match u {
            AdaptationUnit::Liaisons { style } => Some(style.clone()),
            _ => None,
        });
        if let Some(style) = liaison_style {
            for i in 1..tokens.len().saturating_sub(1) {
                let (RawToken::Word(prev), RawToken::Sep(sep), RawToken::Word(next)) =
                    (&tokens[i - 1], &tokens[i], &tokens[i + 1])
                else {
                    continue;
                };
                if !sep.is_empty()
                    && sep.chars().all(char::is_whitespace)
                    && is_liaison_pair(prev, next)
                {
                    rendered[i] =
                        class_span(&rendered[i], &style, "lx-liaison", measure(surface, sep));
                }
            }
        }

        rendered.concat()
    }

    /// Apply line-level steps on already rendered HTML. This is the
    /// post-layout phase: the host calls it once its surface can measure
    /// text. Degrades to the input when no measurement is possible.
    pub fn post_process(&mut self, html: &str, surface: &RenderSurface) -> String {
        let has_line_units = self.units.iter().any(|u| {
            matches!(
                u,
                AdaptationUnit::AlternatingLines(_) | AdaptationUnit::ReadingRule { .. }
            )
        });
        if !has_line_units {
            return html.to_string();
        }
        if surface.measurer.is_none() {
            warn!("line-level adaptation skipped, no measurer on surface");
            return html.to_string();
        }

        let paragraphs: Vec<String> = html
            .split("<br/>")
            .map(|par| self.post_process_paragraph(par, surface))
            .collect();
        paragraphs.join("<br/>")
    }

    fn post_process_paragraph(&mut self, html: &str, surface: &RenderSurface) -> String {
        let measurer = match surface.measurer {
            Some(m) => m,
            None => return html.to_string(),
        };

        let tokens = split_word_spans(html);
        let words: Vec<String> = tokens
            .iter()
            .filter_map(|t| match t {
                HtmlToken::Word(h) => Some(strip_tags(h)),
                HtmlToken::Other(_) => None,
            })
            .collect();
        if words.is_empty() {
            return html.to_string();
        }

        let line_texts = measurer.detect_visual_line_breaks(&words.join(" "), surface.max_width);
        if line_texts.is_empty() {
            warn!("line-level adaptation skipped, surface not measurable");
            return html.to_string();
        }

        // first word index of each visual line
        let mut starts: Vec<usize> = Vec::with_capacity(line_texts.len());
        let mut acc = 0usize;
        for line in &line_texts {
            starts.push(acc);
            acc += line.split_whitespace().count();
        }

        let line_of = |wi: usize| starts.partition_point(|s| *s <= wi) - 1;
        let mut lines: Vec<String> = vec![String::new(); starts.len()];
        let mut wi = 0usize;
        for token in tokens {
            match token {
                HtmlToken::Word(h) => {
                    lines[line_of(wi)].push_str(&h);
                    wi += 1;
                }
                // separators stay with the preceding word's line
                HtmlToken::Other(h) => {
                    let li = if wi == 0 { 0 } else { line_of(wi - 1) };
                    lines[li].push_str(&h);
                }
            }
        }

        for unit in self.units.iter_mut() {
            match unit {
                AdaptationUnit::AlternatingLines(alt) => {
                    for line in lines.iter_mut() {
                        let style = alt.next_style().clone();
                        *line = styled_span(line, &style, Some("lx-line"));
                    }
                }
                AdaptationUnit::ReadingRule { style, line } => {
                    if let Some(target) = lines.get_mut(*line) {
                        *target = styled_span(target, style, Some("lx-rule"));
                    }
                }
                _ => {}
            }
        }
        lines.concat()
    }
}

/// One-shot rendering with a fresh adapter.
pub fn adapt_text(
    text: &str,
    steps: &[AdaptationStep],
    surface: &RenderSurface,
) -> Result<String, ProfileError> {
    Ok(Adapter::from_profile(steps)?.adapt(text, surface))
}

/// One-shot rendering from a JSON profile (an array of steps).
pub fn adapt_text_json(
    text: &str,
    profile_json: &str,
    surface: &RenderSurface,
) -> Result<String, ProfileError> {
    let steps: Vec<AdaptationStep> = serde_json::from_str(profile_json)?;
    adapt_text(text, &steps, surface)
}

enum RawToken {
    Word(String),
    Sep(String),
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '\'' | '\u{2019}' | '-')
}

fn tokenize(par: &str) -> Vec<RawToken> {
    let mut tokens: Vec<RawToken> = Vec::new();
    let mut current = String::new();
    let mut current_is_word = false;

    let mut flush = |buf: &mut String, is_word: bool, tokens: &mut Vec<RawToken>| {
        if buf.is_empty() {
            return;
        }
        let text = std::mem::take(buf);
        // apostrophes and hyphens alone are separators, not words
        if is_word && text.chars().any(char::is_alphabetic) {
            tokens.push(RawToken::Word(text));
        } else {
            tokens.push(RawToken::Sep(text));
        }
    };

    for c in par.chars() {
        let w = is_word_char(c);
        if current.is_empty() || w == current_is_word {
            current.push(c);
            current_is_word = w;
        } else {
            flush(&mut current, current_is_word, &mut tokens);
            current.push(c);
            current_is_word = w;
        }
    }
    flush(&mut current, current_is_word, &mut tokens);
    tokens
}

fn is_vowel_letter(c: char) -> bool {
    "aàâäeéèêëiîïoôöuùûüyœæ".contains(c)
}

/// Liaison candidate: previous word ends in a liaison consonant, next word
/// starts with a vowel or `h`.
fn is_liaison_pair(prev: &str, next: &str) -> bool {
    const LIAISON_FINALS: [char; 7] = ['s', 'x', 'z', 't', 'd', 'n', 'p'];
    let last = prev.chars().rev().find(|c| c.is_alphabetic());
    let first = next.chars().find(|c| c.is_alphabetic());
    let (Some(last), Some(first)) = (last, first) else {
        return false;
    };
    let last = last.to_lowercase().next().unwrap_or(last);
    let first = first.to_lowercase().next().unwrap_or(first);
    LIAISON_FINALS.contains(&last) && (is_vowel_letter(first) || first == 'h')
}

/// Measured width of `text` on the surface, absent in headless use.
fn measure(surface: &RenderSurface, text: &str) -> Option<f64> {
    surface.measurer.and_then(|m| m.measure_width(text))
}

/// Span with a class, an optional style and an optional measured width.
/// Arc and liaison marks carry the width so the host can draw under the
/// span without re-measuring.
fn class_span(inner: &str, style: &StyleEntry, class: &str, width: Option<f64>) -> String {
    let mut open = format!(r#"<span class="{class}""#);
    let css = style_string(style);
    if !css.is_empty() {
        open.push_str(&format!(r#" style="{css}""#));
    }
    if let Some(w) = width {
        open.push_str(&format!(r#" data-w="{w}""#));
    }
    format!("{open}>{inner}</span>")
}

fn render_word(
    units: &mut [AdaptationUnit],
    word: &str,
    surface: &RenderSurface,
    decompose: bool,
) -> String {
    let inner = if decompose {
        let syllables = segment_word(word);
        let mut parts: Vec<String> = Vec::with_capacity(syllables.len());
        for syl in &syllables {
            let mut syl_html = String::new();
            for ph in &syl.phonemes {
                let mut seg = render_letters(units, &ph.letters, surface);
                seg = apply_phoneme_units(units, seg, ph, surface);
                syl_html.push_str(&seg);
            }
            parts.push(apply_syllable_units(units, syl_html, &syl.letters(), surface));
        }
        join_syllables(units, parts)
    } else {
        escape(word)
    };
    let inner = apply_word_units(units, inner);
    format!("{WORD_SPAN_OPEN}{inner}</span>")
}

fn render_letters(units: &mut [AdaptationUnit], letters: &str, surface: &RenderSurface) -> String {
    let has_letter_units = units.iter().any(|u| u.level() == Granularity::Letter);
    if !has_letter_units {
        return escape(letters);
    }
    let mut out = String::new();
    for c in letters.chars() {
        let mut ch = escape(&c.to_string());
        for unit in units.iter_mut() {
            match unit {
                AdaptationUnit::Letters { styles } => {
                    let key: String = c.to_lowercase().collect();
                    let glyph = c.to_string();
                    for style in styles.iter().filter(|s| s.selects(&key)) {
                        ch = styled_span(&ch, style, None);
                        if let Some(url) = &style.pictogram {
                            ch.push_str(&picto_img(url, measure(surface, &glyph)));
                        }
                    }
                }
                AdaptationUnit::AlternatingLetters(alt) if c.is_alphabetic() => {
                    let style = alt.next_style().clone();
                    ch = styled_span(&ch, &style, None);
                }
                _ => {}
            }
        }
        out.push_str(&ch);
    }
    out
}

/// Pictogram overlay, sized to the measured width of the segment it
/// illustrates when the surface can measure.
fn picto_img(url: &str, width: Option<f64>) -> String {
    match width {
        Some(w) => format!(
            r#"<img class="lx-picto" src="{}" width="{w}" alt=""/>"#,
            escape(url)
        ),
        None => format!(r#"<img class="lx-picto" src="{}" alt=""/>"#, escape(url)),
    }
}

fn apply_phoneme_units(
    units: &mut [AdaptationUnit],
    mut seg: String,
    ph: &crate::phonemes::Phoneme,
    surface: &RenderSurface,
) -> String {
    use crate::phonemes::PhonemeId;
    for unit in units.iter_mut() {
        match unit {
            AdaptationUnit::Phonemes { styles } => {
                let Some(id) = ph.phoneme else { continue };
                for style in styles.iter().filter(|s| s.selects(id.code())) {
                    if style.ipa && id != PhonemeId::Muet {
                        seg = format!("<ruby>{seg}<rt>{}</rt></ruby>", id.ipa());
                    }
                    seg = styled_span(&seg, style, None);
                    if let Some(url) = &style.pictogram {
                        seg.push_str(&picto_img(url, measure(surface, &ph.letters)));
                    }
                }
            }
            AdaptationUnit::AlternatingPhonemes(alt) => {
                let sounded = ph.phoneme.map_or(false, |id| id != PhonemeId::Muet);
                if sounded {
                    let style = alt.next_style().clone();
                    seg = styled_span(&seg, &style, None);
                }
            }
            _ => {}
        }
    }
    seg
}

fn apply_syllable_units(
    units: &mut [AdaptationUnit],
    mut syl_html: String,
    letters: &str,
    surface: &RenderSurface,
) -> String {
    for unit in units.iter_mut() {
        match unit {
            AdaptationUnit::Syllables { style, .. } => {
                syl_html = styled_span(&syl_html, style, Some("lx-syllable"));
            }
            AdaptationUnit::SyllableArc { style } => {
                syl_html = class_span(&syl_html, style, "lx-arc", measure(surface, letters));
            }
            AdaptationUnit::AlternatingSyllables(alt) => {
                let style = alt.next_style().clone();
                syl_html = styled_span(&syl_html, &style, None);
            }
            _ => {}
        }
    }
    syl_html
}

fn join_syllables(units: &[AdaptationUnit], parts: Vec<String>) -> String {
    let separator = units.iter().find_map(|u| match u {
        AdaptationUnit::Syllables {
            separator: Some(s), ..
        } => Some(s.as_str()),
        _ => None,
    });
    match separator {
        Some(s) if !s.is_empty() => {
            let sep = format!(r#"<span class="lx-sep">{}</span>"#, escape(s));
            parts.join(&sep)
        }
        _ => parts.concat(),
    }
}

fn apply_word_units(units: &mut [AdaptationUnit], mut inner: String) -> String {
    for unit in units.iter_mut() {
        match unit {
            AdaptationUnit::Default { style } => {
                inner = styled_span(&inner, style, None);
            }
            AdaptationUnit::AlternatingWords(alt) => {
                let style = alt.next_style().clone();
                inner = styled_span(&inner, &style, None);
            }
            _ => {}
        }
    }
    inner
}
