//! Phoneme extraction - Left-to-right transcription automaton
//!
//! Scans one word, consulting the letter tables at each position. Rules see
//! the lowercased word while the emitted spans keep the original casing, so
//! the concatenation of `letters` always reproduces the input exactly.

use tracing::trace;

use super::tables::letter_rules;
use super::types::Phoneme;

/// Transcribe a single word into its ordered phoneme spans.
///
/// Every character of `word` is consumed by exactly one span. Characters
/// without a rule table (digits, punctuation, foreign letters) become
/// passthrough spans with no phoneme identity.
pub fn extract_phonemes(word: &str) -> Vec<Phoneme> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    // Per-character lowercase keeps a strict 1:1 mapping with the input;
    // multi-char expansions (ß) never occur in French text.
    let lower_chars: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    let lower: String = lower_chars.iter().collect();

    // Character index to byte offset in `lower`, with a final sentinel.
    let mut offsets: Vec<usize> = Vec::with_capacity(lower_chars.len() + 1);
    let mut byte = 0;
    for c in &lower_chars {
        offsets.push(byte);
        byte += c.len_utf8();
    }
    offsets.push(byte);

    let n = chars.len();
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < n {
        let table = match letter_rules(lower_chars[pos]) {
            Some(t) => t,
            None => {
                out.push(Phoneme::new(None, chars[pos].to_string()));
                pos += 1;
                continue;
            }
        };

        let mut fired: Option<(Option<super::types::PhonemeId>, usize)> = None;
        for rule in &table.rules {
            if rule.matches(&lower, &offsets, pos) {
                trace!(rule = rule.name, pos, word, "rule fired");
                fired = Some((rule.phoneme, rule.take));
                break;
            }
        }
        let (phoneme, take) = match fired {
            Some(hit) => hit,
            None => {
                if pos + 1 == n {
                    table.final_rule.unwrap_or(table.default)
                } else {
                    table.default
                }
            }
        };

        let take = take.min(n - pos);
        let letters: String = chars[pos..pos + take].iter().collect();
        out.push(Phoneme::new(phoneme, letters));
        pos += take;
    }

    out
}
