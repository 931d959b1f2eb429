//! Face on the left, message after it up to the terminal edge.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::layout::{is_wide, Layout};
use crate::render::canvas::Canvas;

/// Draw each (mirrored) face row, then as much message as fits on the
/// rest of the terminal line.
///
/// A line break, a full line, or a wide character that would straddle
/// the edge ends the row; the remaining columns are padded with spaces.
pub fn render_left<W: Write>(
    layout: &Layout,
    message: &str,
    canvas: &mut Canvas<W>,
) -> io::Result<()> {
    let mut chars: VecDeque<char> = message.chars().collect();
    let columns = layout.columns;

    canvas.reset();
    for (y, row) in layout.face.rows().iter().enumerate() {
        for &pixel in row {
            canvas.pixel(pixel);
            canvas.text("  ");
        }
        canvas.reset();

        if y >= layout.message_start {
            let mut x = row.len() * 2;
            while x < columns {
                let Some(&c) = chars.front() else {
                    break;
                };
                let wide = is_wide(c);

                if c == '\n' || (wide && x + 1 >= columns) {
                    if c == '\n' {
                        chars.pop_front();
                    }
                    canvas.pad(columns - x);
                    break;
                }

                chars.pop_front();
                canvas.push(c);
                x += if wide { 2 } else { 1 };
            }
        }

        canvas.end_line()?;
    }

    super::flush_rest(chars, canvas)
}
