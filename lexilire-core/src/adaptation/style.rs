//! Inline CSS generation for style entries

use super::types::StyleEntry;

fn is_neutral_color(value: &str) -> bool {
    matches!(value, "#000" | "#000000" | "black")
}

fn is_neutral_background(value: &str) -> bool {
    matches!(value, "#fff" | "#ffffff" | "white" | "transparent")
}

/// Inline CSS for a style entry. Neutral defaults (black foreground, white
/// background) are omitted so an untouched entry produces an empty string
/// and no span at all.
pub(crate) fn style_string(entry: &StyleEntry) -> String {
    let mut css = String::new();
    if let Some(color) = &entry.color {
        if !is_neutral_color(color) {
            css.push_str(&format!("color:{color};"));
        }
    }
    if let Some(background) = &entry.background {
        if !is_neutral_background(background) {
            css.push_str(&format!("background-color:{background};"));
        }
    }
    if entry.bold {
        css.push_str("font-weight:bold;");
    }
    if entry.italic {
        css.push_str("font-style:italic;");
    }
    if entry.underline {
        css.push_str("text-decoration:underline;");
    }
    if entry.shadow {
        css.push_str("text-shadow:1px 1px 2px rgba(0,0,0,0.6);");
    }
    if entry.stroke {
        css.push_str("-webkit-text-stroke:1px currentColor;");
    }
    css
}

/// Wrap `inner` in a styled span, or return it unchanged when neither the
/// style nor the class produce anything visible.
pub(crate) fn styled_span(inner: &str, entry: &StyleEntry, class: Option<&str>) -> String {
    let css = style_string(entry);
    match (class, css.is_empty()) {
        (None, true) => inner.to_string(),
        (Some(c), true) => format!(r#"<span class="{c}">{inner}</span>"#),
        (None, false) => format!(r#"<span style="{css}">{inner}</span>"#),
        (Some(c), false) => format!(r#"<span class="{c}" style="{css}">{inner}</span>"#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_entry_is_empty() {
        assert_eq!(style_string(&StyleEntry::default()), "");
        let neutral = StyleEntry {
            color: Some("#000000".into()),
            background: Some("white".into()),
            ..Default::default()
        };
        assert_eq!(style_string(&neutral), "");
    }

    #[test]
    fn test_css_accumulates_in_order() {
        let entry = StyleEntry {
            color: Some("#d40000".into()),
            bold: true,
            underline: true,
            ..Default::default()
        };
        assert_eq!(
            style_string(&entry),
            "color:#d40000;font-weight:bold;text-decoration:underline;"
        );
    }

    #[test]
    fn test_styled_span_skips_empty() {
        assert_eq!(styled_span("abc", &StyleEntry::default(), None), "abc");
        let entry = StyleEntry {
            color: Some("red".into()),
            ..Default::default()
        };
        assert_eq!(
            styled_span("abc", &entry, Some("lx-syllable")),
            r#"<span class="lx-syllable" style="color:red;">abc</span>"#
        );
    }
}
