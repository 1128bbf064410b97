//! Text measurement - host-provided metrics for visual-line detection
//!
//! Line-oriented adaptations need to know where the host's layout engine
//! wraps text. The engine never guesses font metrics; the host passes a
//! measurer and the rendering surface width, and line detection degrades
//! to a no-op when either is missing.

/// Host-side text metrics. Width and height may return `None` when the
/// host cannot measure (no font loaded, headless rendering), in which
/// case line-level processing is skipped.
pub trait TextMeasurer {
    fn measure_width(&self, text: &str) -> Option<f64>;
    fn measure_height(&self, text: &str) -> Option<f64>;

    /// Reconstruct the visually wrapped lines of `text` within
    /// `max_width`. The default is a greedy first-fit over
    /// whitespace-separated words; hosts backed by a real layout engine
    /// should override it with the actual break positions. Returns an
    /// empty vector when measurement is unavailable.
    fn detect_visual_line_breaks(&self, text: &str, max_width: f64) -> Vec<String> {
        if max_width <= 0.0 {
            return Vec::new();
        }
        let Some(space) = self.measure_width(" ") else {
            return Vec::new();
        };

        let mut lines: Vec<String> = Vec::new();
        let mut line = String::new();
        let mut line_width = 0.0;
        for word in text.split_whitespace() {
            let Some(width) = self.measure_width(word) else {
                return Vec::new();
            };
            let extended = if line.is_empty() {
                width
            } else {
                line_width + space + width
            };
            if extended > max_width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = width;
            } else {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_width = extended;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }
}

/// Rendering context for one adaptation run.
#[derive(Clone, Copy, Default)]
pub struct RenderSurface<'a> {
    /// Host measurer, absent in headless use
    pub measurer: Option<&'a dyn TextMeasurer>,
    /// Available line width in the measurer's unit
    pub max_width: f64,
}

impl<'a> RenderSurface<'a> {
    /// Surface without measurement; line-level adaptations degrade.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn new(measurer: &'a dyn TextMeasurer, max_width: f64) -> Self {
        Self {
            measurer: Some(measurer),
            max_width,
        }
    }
}

/// Fixed-advance measurer used by tests and headless callers that still
/// want deterministic line grouping.
pub struct MonospaceMeasurer {
    pub char_width: f64,
    pub line_height: f64,
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_width(&self, text: &str) -> Option<f64> {
        Some(text.chars().count() as f64 * self.char_width)
    }

    fn measure_height(&self, _text: &str) -> Option<f64> {
        Some(self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono() -> MonospaceMeasurer {
        MonospaceMeasurer {
            char_width: 1.0,
            line_height: 10.0,
        }
    }

    #[test]
    fn test_everything_fits_on_one_line() {
        let lines = mono().detect_visual_line_breaks("un chat vert", 100.0);
        assert_eq!(lines, vec!["un chat vert"]);
    }

    #[test]
    fn test_greedy_fill() {
        // "un chat" is 7 wide, adding " vert" would reach 12
        let lines = mono().detect_visual_line_breaks("un chat vert", 8.0);
        assert_eq!(lines, vec!["un chat", "vert"]);
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = mono().detect_visual_line_breaks("anticonstitutionnellement et", 5.0);
        assert_eq!(lines, vec!["anticonstitutionnellement", "et"]);
    }

    #[test]
    fn test_zero_width_surface_is_unmeasurable() {
        assert!(mono().detect_visual_line_breaks("un", 0.0).is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(mono().detect_visual_line_breaks("", 50.0).is_empty());
    }
}
