//! Placement of the face and the message on screen.
//!
//! Right alignment pushes the face towards the right edge with background
//! padding and picks the first row whose left-hand gap, together with the
//! rows above it, has room for the message. Left alignment mirrors the face
//! and starts the message as low as it can while staying centered.

mod width;

pub use width::{char_width, count_width, is_wide};

use crate::error::{Error, Result};
use crate::face::Face;
use crate::message::line_count;

/// Which side of the screen the face is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Face on the left, message to its right.
    Left,
    /// Face on the right, message to its left.
    #[default]
    Right,
}

/// A face ready to draw, plus where the message begins.
#[derive(Debug, Clone)]
pub struct Layout {
    pub face: Face,
    pub alignment: Alignment,
    /// Terminal width in cells.
    pub columns: usize,
    /// First face row that may carry message text.
    pub message_start: usize,
}

impl Layout {
    /// Position `face` for `message` on a terminal `columns` cells wide.
    ///
    /// `message` must already be sanitized. Fails with
    /// [`Error::NarrowScreen`] when a right-aligned face does not fit.
    pub fn prepare(
        mut face: Face,
        message: &str,
        alignment: Alignment,
        columns: usize,
    ) -> Result<Self> {
        let lines = line_count(message);
        let centered = centered_start(face.height(), lines);

        let message_start = match alignment {
            Alignment::Right => {
                let required = face.width() * 2;
                if columns <= required {
                    tracing::warn!(columns, required, "terminal too narrow for face");
                    return Err(Error::NarrowScreen { columns, required });
                }
                face.pad_left((columns - required) / 2);
                gap_start(&face, count_width(message)).min(centered)
            }
            Alignment::Left => {
                face.mirror();
                face.height().saturating_sub(lines).min(centered)
            }
        };

        tracing::debug!(?alignment, columns, message_start, lines, "layout ready");

        Ok(Self {
            face,
            alignment,
            columns,
            message_start,
        })
    }
}

/// Row that vertically centers `lines` lines next to `height` rows.
fn centered_start(height: usize, lines: usize) -> usize {
    let start = (height as isize - lines as isize + 1) / 2;
    start.max(0) as usize
}

/// Walk rows outward from the middle (center, above, below, two above, ...)
/// summing the background gap before the face on each row, two cells per
/// pixel. Returns the upper row of the pair at which the gaps first hold
/// `wanted` cells, or 0 if they never do.
fn gap_start(face: &Face, wanted: usize) -> usize {
    let center = face.height() / 2;
    let mut room = 0;

    for step in 0..face.height() {
        let offset = (step + 1) / 2;
        let row = if step % 2 == 0 {
            center + offset
        } else {
            match center.checked_sub(offset) {
                Some(row) => row,
                None => continue,
            }
        };

        room += face.leading_background(row) * 2;
        if room >= wanted {
            return center.saturating_sub(offset);
        }
    }
    0
}
