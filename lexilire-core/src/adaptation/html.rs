//! HTML helpers - escaping, tag stripping and word-span tokenization
//!
//! The engine emits every word inside `<span class="lx-word">`. Text-level
//! post-processors re-read that structure from the rendered paragraph, so
//! the scanner here must stay in sync with the emitter in `engine.rs`.

/// Opening tag the engine emits around every word.
pub(crate) const WORD_SPAN_OPEN: &str = r#"<span class="lx-word">"#;

/// Escape text for inclusion in HTML content.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove all tags, keeping text content. Entities are left as-is; only
/// the measurement path uses this and widths are approximate anyway.
pub(crate) fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// One token of a rendered paragraph.
#[derive(Debug, PartialEq)]
pub(crate) enum HtmlToken {
    /// A complete `<span class="lx-word">...</span>` element
    Word(String),
    /// Anything between word spans (separators, liaison spans)
    Other(String),
}

/// Split a rendered paragraph into word spans and the material between
/// them, tracking span nesting so inner spans never close a word early.
pub(crate) fn split_word_spans(html: &str) -> Vec<HtmlToken> {
    let mut tokens = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(WORD_SPAN_OPEN) {
        if start > 0 {
            tokens.push(HtmlToken::Other(rest[..start].to_string()));
        }
        let body = &rest[start..];
        let end = word_span_end(body);
        tokens.push(HtmlToken::Word(body[..end].to_string()));
        rest = &body[end..];
    }
    if !rest.is_empty() {
        tokens.push(HtmlToken::Other(rest.to_string()));
    }
    tokens
}

/// Byte offset one past the `</span>` closing the word span that starts at
/// the beginning of `html`. Falls back to the full length on malformed
/// input, which cannot happen for engine output.
fn word_span_end(html: &str) -> usize {
    let bytes = html.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0usize;
    // byte-wise scan, tag markers are pure ASCII
    while pos < bytes.len() {
        if bytes[pos..].starts_with(b"<span") {
            depth += 1;
            pos += 5;
        } else if bytes[pos..].starts_with(b"</span>") {
            depth -= 1;
            pos += 7;
            if depth == 0 {
                return pos;
            }
        } else {
            pos += 1;
        }
    }
    html.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags(r#"<span style="x">ch</span>at"#), "chat");
    }

    #[test]
    fn test_split_respects_nesting() {
        let html = format!(
            "{o}<span>ch</span>at</span> {o}vert</span>!",
            o = WORD_SPAN_OPEN
        );
        let tokens = split_word_spans(&html);
        assert_eq!(tokens.len(), 4);
        assert_eq!(
            tokens[0],
            HtmlToken::Word(format!("{WORD_SPAN_OPEN}<span>ch</span>at</span>"))
        );
        assert_eq!(tokens[1], HtmlToken::Other(" ".to_string()));
        assert_eq!(
            tokens[2],
            HtmlToken::Word(format!("{WORD_SPAN_OPEN}vert</span>"))
        );
        assert_eq!(tokens[3], HtmlToken::Other("!".to_string()));
    }

    #[test]
    fn test_split_without_words() {
        let tokens = split_word_spans("plain text");
        assert_eq!(tokens, vec![HtmlToken::Other("plain text".to_string())]);
    }
}
