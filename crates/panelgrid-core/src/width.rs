//! Visual (terminal display) width measurement.
//!
//! Layout never counts bytes or chars: every width decision goes through a
//! [`VisualWidth`] implementation so wide characters (CJK, emoji) take two
//! columns and combining marks take none.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measures how many terminal columns a single line occupies.
pub trait VisualWidth {
    /// Display width of one line of text.
    fn width(&self, text: &str) -> usize;

    /// Widest line of multi-line content (lines split on `'\n'`).
    fn max_line_width(&self, content: &str) -> usize {
        content
            .split('\n')
            .map(|line| self.width(line))
            .max()
            .unwrap_or(0)
    }
}

/// Standard terminal display-width rules backed by `unicode-width`.
///
/// Measured per grapheme cluster, so emoji sequences (ZWJ families, skin
/// tones, VS16 presentation) occupy the columns a terminal draws them in.
/// Control characters (tabs included) have no display width.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWidth;

impl VisualWidth for UnicodeWidth {
    fn width(&self, text: &str) -> usize {
        text.graphemes(true).map(grapheme_width).sum()
    }
}

fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().next().is_some_and(char::is_control) {
        return 0;
    }
    grapheme.width()
}

/// Display width of `text` using [`UnicodeWidth`].
pub fn visual_width(text: &str) -> usize {
    UnicodeWidth.width(text)
}

/// Widest line of `content` using [`UnicodeWidth`].
pub fn max_line_width(content: &str) -> usize {
    UnicodeWidth.max_line_width(content)
}

/// Left-justifies `line` with trailing spaces up to `target` columns.
///
/// Lines already at or beyond `target` are returned unchanged (never truncated).
pub fn pad_to_width(line: &str, target: usize, measurer: &impl VisualWidth) -> String {
    let fill = target.saturating_sub(measurer.width(line));
    let mut padded = String::with_capacity(line.len() + fill);
    padded.push_str(line);
    padded.extend(std::iter::repeat_n(' ', fill));
    padded
}
