//! Line-buffered output that always leaves the terminal style clean.

use std::io::{self, Write};

use crate::face::Pixel;
use crate::render::ansi::{push_pixel_style, RESET};

/// Output sink for the renderers.
///
/// Text is collected per line and written when the line ends. Once a
/// colored pixel has been emitted the canvas owns a "modified terminal
/// style"; [`Canvas::restore`] gives it back and is also run on drop, so an
/// early return never leaves the terminal painted.
pub struct Canvas<W: Write> {
    out: W,
    line: String,
    styled: bool,
}

impl<W: Write> Canvas<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::with_capacity(256),
            styled: false,
        }
    }

    /// Set the style for `pixel`. Cell content follows via [`Canvas::text`].
    pub fn pixel(&mut self, pixel: Pixel) {
        self.styled = push_pixel_style(pixel, &mut self.line);
    }

    pub fn reset(&mut self) {
        self.line.push_str(RESET);
        self.styled = false;
    }

    pub fn push(&mut self, c: char) {
        self.line.push(c);
    }

    pub fn text(&mut self, text: &str) {
        self.line.push_str(text);
    }

    /// Append `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.line.extend(std::iter::repeat(' ').take(count));
    }

    /// Terminate the current line and write it out.
    pub fn end_line(&mut self) -> io::Result<()> {
        self.line.push('\n');
        self.flush_line()
    }

    fn flush_line(&mut self) -> io::Result<()> {
        if !self.line.is_empty() {
            self.out.write_all(self.line.as_bytes())?;
            self.line.clear();
        }
        Ok(())
    }

    /// Write pending text and reset the style if a color is still active.
    /// Calling it again is a no-op apart from flushing.
    pub fn restore(&mut self) -> io::Result<()> {
        self.flush_line()?;
        if self.styled {
            self.out.write_all(RESET.as_bytes())?;
            self.styled = false;
        }
        self.out.flush()
    }

    /// Normal completion: unconditional reset, then flush.
    pub fn finish(&mut self) -> io::Result<()> {
        self.reset();
        self.restore()
    }
}

impl<W: Write> Drop for Canvas<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
