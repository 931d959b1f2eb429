//! Face on the right, message filling the gap to its left.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::layout::{is_wide, Layout};
use crate::render::canvas::Canvas;

/// Draw the face pixel by pixel, writing message text into background
/// pixels left of the face on rows from `message_start` on.
///
/// Every pixel is two cells wide, so narrow characters are emitted in
/// pairs. A narrow character followed by a wide one, or by nothing, is
/// padded with a space instead.
pub fn render_right<W: Write>(
    layout: &Layout,
    message: &str,
    canvas: &mut Canvas<W>,
) -> io::Result<()> {
    let mut chars: VecDeque<char> = message.chars().collect();

    canvas.reset();
    for (y, row) in layout.face.rows().iter().enumerate() {
        let mut open = y >= layout.message_start;

        for &pixel in row {
            // No text right of the face edge on this row
            if !pixel.is_background() {
                open = false;
            }
            canvas.pixel(pixel);

            if !open {
                canvas.text("  ");
                continue;
            }
            let Some(c) = chars.pop_front() else {
                canvas.text("  ");
                continue;
            };
            if c == '\n' {
                canvas.text("  ");
                open = false;
                continue;
            }

            canvas.push(c);
            if !is_wide(c) {
                match chars.front().copied() {
                    Some(next) if !is_wide(next) => {
                        chars.pop_front();
                        if next == '\n' {
                            canvas.push(' ');
                            open = false;
                        } else {
                            canvas.push(next);
                        }
                    }
                    _ => canvas.push(' '),
                }
            }
        }

        canvas.reset();
        canvas.end_line()?;
    }

    super::flush_rest(chars, canvas)
}
