//! Drawing the face and message as ANSI-colored text.
//!
//! Each face pixel is two terminal cells wide and painted with a 24-bit
//! background color. Output is streamed row by row through a [`Canvas`],
//! which guarantees a style reset on every exit path.

mod ansi;
mod canvas;
mod left;
mod right;

pub use ansi::{push_bg, push_pixel_style, RESET};
pub use canvas::Canvas;
pub use left::render_left;
pub use right::render_right;

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::layout::{Alignment, Layout};

/// Draw `layout` with `message` to `out`, ending with a style reset.
pub fn render<W: Write>(layout: &Layout, message: &str, out: W) -> io::Result<()> {
    let mut canvas = Canvas::new(out);
    match layout.alignment {
        Alignment::Right => render_right(layout, message, &mut canvas)?,
        Alignment::Left => render_left(layout, message, &mut canvas)?,
    }
    canvas.finish()
}

/// Write whatever did not fit beside the face as plain trailing text.
///
/// The leftover ends with exactly one line break. It is not a verbatim
/// flush: a `\n` already closing the leftover is not followed by a second
/// one, so no blank line trails the output.
fn flush_rest<W: Write>(chars: VecDeque<char>, canvas: &mut Canvas<W>) -> io::Result<()> {
    if chars.is_empty() {
        return Ok(());
    }
    let rest: String = chars.into_iter().collect();
    tracing::debug!(chars = rest.chars().count(), "message overflowed the face");

    match rest.strip_suffix('\n') {
        Some(body) => canvas.text(body),
        None => canvas.text(&rest),
    }
    canvas.end_line()
}
