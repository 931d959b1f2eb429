//! Display width of message text.
//!
//! East Asian wide, fullwidth and ambiguous characters take two cells,
//! everything else takes one. Control characters and zero-width marks are
//! counted as one cell too, matching how the renderers advance.

use unicode_width::UnicodeWidthChar;

/// Cells taken by `c`: 1 or 2.
pub fn char_width(c: char) -> usize {
    match c.width_cjk() {
        Some(w) if w >= 2 => 2,
        _ => 1,
    }
}

pub fn is_wide(c: char) -> bool {
    char_width(c) == 2
}

/// Total cells taken by `text`.
pub fn count_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}
