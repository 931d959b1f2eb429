//! ANSI escape code helpers.

use crate::face::{Pixel, Rgb};

/// SGR reset: default colors and attributes.
pub const RESET: &str = "\x1b[0m";

/// Append a 24-bit background color sequence to `buf`.
pub fn push_bg(color: Rgb, buf: &mut String) {
    buf.push_str("\x1b[48;2;");
    buf.push_str(&color.r.to_string());
    buf.push(';');
    buf.push_str(&color.g.to_string());
    buf.push(';');
    buf.push_str(&color.b.to_string());
    buf.push('m');
}

/// Append the style for `pixel` to `buf`.
///
/// # Returns
/// `true` if a color was set, `false` if the style was reset
pub fn push_pixel_style(pixel: Pixel, buf: &mut String) -> bool {
    match pixel.color() {
        Some(color) => {
            push_bg(color, buf);
            true
        }
        None => {
            buf.push_str(RESET);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bg_uses_truecolor_sequence() {
        let mut buf = String::new();
        push_bg(Rgb::new(255, 0, 38), &mut buf);
        assert_eq!(buf, "\x1b[48;2;255;0;38m");
    }

    #[test]
    fn background_pixel_resets() {
        let mut buf = String::new();
        assert!(!push_pixel_style(Pixel::Background, &mut buf));
        assert_eq!(buf, RESET);
    }

    #[test]
    fn ink_pixel_sets_palette_color() {
        let mut buf = String::new();
        assert!(push_pixel_style(Pixel::Ink(0), &mut buf));
        assert_eq!(buf, "\x1b[48;2;45;39;42m");
    }
}
