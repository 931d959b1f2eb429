//! techo - Teto's echo.
//!
//! Prints a pixel-art face in 24-bit color with a message beside it,
//! sized to the terminal. The pipeline runs strictly forward:
//!
//! 1. [`message::MessageSource`] reads the raw text
//! 2. [`message::sanitize`] strips control characters and normalizes lines
//! 3. [`face::Face`] copies a stock bitmap and optionally narrows it
//! 4. [`layout::Layout`] pads or mirrors it and picks the message start row
//! 5. [`render::render`] streams pixels and text to the output

pub mod cli;
pub mod config;
pub mod error;
pub mod face;
pub mod layout;
pub mod message;
pub mod render;
pub mod terminal;

use std::io::Write;

pub use config::Options;
pub use error::{Error, Result};

use face::Face;
use layout::Layout;
use message::{line_count, sanitize};

/// Draw the face selected by `options` with `raw` as the message.
///
/// `columns` is the terminal width. Nothing is written when the face does
/// not fit ([`Error::NarrowScreen`]).
pub fn draw<W: Write>(options: &Options, raw: &str, columns: usize, out: W) -> Result<()> {
    let message = sanitize(raw);

    let mut face = Face::load(options.face);
    if !options.whole {
        face.narrow(line_count(&message));
    }

    let layout = Layout::prepare(face, &message, options.alignment, columns)?;
    render::render(&layout, &message, out)?;
    Ok(())
}
