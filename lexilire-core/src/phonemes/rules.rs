//! Transcription rules - Ordered, context-sensitive grapheme rules
//!
//! Each letter owns an ordered rule table. Rules are tested in declaration
//! order and the first match wins, so the order in `tables.rs` is part of the
//! rule content itself. Forward context is a regex anchored at the scan
//! position; backward context is either anchored to the word start (full
//! prefix match) or evaluated by an explicit bounded reverse scan over the
//! prefix, which keeps the variable-length lookbehind semantics portable.

use regex::Regex;

use super::types::PhonemeId;

/// Pure predicate over the lowercased word and the current character offset.
/// Used by rules that depend on exception word lists rather than on a
/// context pattern pair.
pub(crate) type ExceptionCheck = fn(&str, usize) -> bool;

/// Backward context of a rule.
pub(crate) enum BackwardPattern {
    /// `^`-anchored: must match the entire prefix before the scan position.
    Anchored(Regex),
    /// Unanchored: succeeds if any window ending exactly at the previous
    /// character fully matches.
    Window(Regex),
}

/// One transcription rule inside a letter's ordered table.
pub(crate) struct Rule {
    /// Rule name, for tracing
    pub name: &'static str,
    /// Forward context, matched at the scan position (current char included)
    pub forward: Option<Regex>,
    /// Backward context over the prefix
    pub backward: Option<BackwardPattern>,
    /// Exception predicate; the rule fires only if it returns true
    pub check: Option<ExceptionCheck>,
    /// Emitted phoneme (`None` emits a silent-less passthrough span)
    pub phoneme: Option<PhonemeId>,
    /// Characters consumed, >= 1
    pub take: usize,
}

/// Ordered rule table for one letter.
pub(crate) struct LetterRules {
    pub rules: Vec<Rule>,
    /// Tried when no rule matched and the position is the last character
    pub final_rule: Option<(Option<PhonemeId>, usize)>,
    /// Wildcard fallback; always applies
    pub default: (Option<PhonemeId>, usize),
}

pub(crate) struct RuleBuilder {
    name: &'static str,
    forward: Option<Regex>,
    backward: Option<BackwardPattern>,
    check: Option<ExceptionCheck>,
    phoneme: Option<PhonemeId>,
    take: usize,
}

/// Start a rule emitting `phoneme` and consuming `take` characters.
/// Pattern compilation panics are confined to static table construction.
pub(crate) fn rule(name: &'static str, phoneme: PhonemeId, take: usize) -> RuleBuilder {
    RuleBuilder {
        name,
        forward: None,
        backward: None,
        check: None,
        phoneme: Some(phoneme),
        take,
    }
}

impl RuleBuilder {
    /// Forward context pattern, anchored at the scan position.
    pub fn fwd(mut self, pattern: &str) -> Self {
        let compiled = Regex::new(&format!(r"\A(?:{pattern})"))
            .unwrap_or_else(|e| panic!("bad forward pattern in rule {}: {e}", self.name));
        self.forward = Some(compiled);
        self
    }

    /// Backward context pattern. A leading `^` anchors it to the word start
    /// (full prefix match); otherwise it is evaluated by the reverse window
    /// scan.
    pub fn bwd(mut self, pattern: &str) -> Self {
        let (anchored, body) = match pattern.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let compiled = Regex::new(&format!(r"\A(?:{body})\z"))
            .unwrap_or_else(|e| panic!("bad backward pattern in rule {}: {e}", self.name));
        self.backward = Some(if anchored {
            BackwardPattern::Anchored(compiled)
        } else {
            BackwardPattern::Window(compiled)
        });
        self
    }

    pub fn check(mut self, predicate: ExceptionCheck) -> Self {
        self.check = Some(predicate);
        self
    }

    pub fn build(self) -> Rule {
        Rule {
            name: self.name,
            forward: self.forward,
            backward: self.backward,
            check: self.check,
            phoneme: self.phoneme,
            take: self.take,
        }
    }
}

impl Rule {
    /// Test this rule at character offset `pos`.
    ///
    /// `lower` is the lowercased word, `offsets` maps character index to byte
    /// index (with a final entry at `lower.len()`).
    pub fn matches(&self, lower: &str, offsets: &[usize], pos: usize) -> bool {
        if let Some(ref fwd) = self.forward {
            if !fwd.is_match(&lower[offsets[pos]..]) {
                return false;
            }
        }
        if let Some(ref bwd) = self.backward {
            let prefix_end = offsets[pos];
            match bwd {
                BackwardPattern::Anchored(re) => {
                    if !re.is_match(&lower[..prefix_end]) {
                        return false;
                    }
                }
                BackwardPattern::Window(re) => {
                    let mut found = false;
                    for start in (0..pos).rev() {
                        if re.is_match(&lower[offsets[start]..prefix_end]) {
                            found = true;
                            break;
                        }
                    }
                    if !found {
                        return false;
                    }
                }
            }
        }
        if let Some(check) = self.check {
            if !check(lower, pos) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(s: &str) -> Vec<usize> {
        let mut v: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
        v.push(s.len());
        v
    }

    #[test]
    fn test_forward_anchored_at_position() {
        let r = rule("test", PhonemeId::OFerme, 3).fwd("eau").build();
        let w = "bateau";
        let off = offsets(w);
        assert!(r.matches(w, &off, 3));
        assert!(!r.matches(w, &off, 0));
    }

    #[test]
    fn test_backward_window_scan() {
        // fires only when some window ending just before pos matches
        let r = rule("test", PhonemeId::Z, 1).bwd("[aeiou]").build();
        let w = "maison";
        let off = offsets(w);
        assert!(r.matches(w, &off, 3)); // "i" precedes the s
        let w2 = "verser";
        let off2 = offsets(w2);
        assert!(!r.matches(w2, &off2, 3)); // "r" precedes the s
    }

    #[test]
    fn test_backward_anchored_full_prefix() {
        // whole prefix must be a single optional consonant
        let r = rule("test", PhonemeId::EAigu, 2)
            .fwd("es$")
            .bwd("^[bcdfghjklmnpqrstvwxz]?$")
            .build();
        let les = "les";
        assert!(r.matches(les, &offsets(les), 1));
        let tables = "tables";
        assert!(!r.matches(tables, &offsets(tables), 4));
    }

    #[test]
    fn test_multibyte_prefix_windows() {
        let r = rule("test", PhonemeId::Z, 1).bwd("[éè]").build();
        let w = "poésie";
        let off = offsets(w);
        assert!(r.matches(w, &off, 3)); // é precedes the s
    }
}
