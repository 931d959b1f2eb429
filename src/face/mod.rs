//! Face bitmaps and the face selector.
//!
//! The stock faces live in static tables. Everything that narrows, pads or
//! mirrors a face works on a [`Face`], which is a private copy of one of
//! those tables, so the canonical data is never mutated.

mod bitmaps;
mod error;
mod palette;

pub use bitmaps::{FACE_COUNT, FACE_HEIGHT, FACE_WIDTH};
pub use error::FaceError;
pub use palette::{Rgb, PALETTE};

use bitmaps::FACES;

/// Smallest number of rows shown when the face is reduced.
const MIN_WINDOW: usize = 6;

/// One face pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    /// Transparent, drawn with the terminal's default background.
    Background,
    /// Index into [`PALETTE`].
    Ink(u8),
}

impl Pixel {
    /// Parse a bitmap symbol: `.` or a palette digit.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Background),
            '0'..='9' => symbol.to_digit(10).map(|d| Self::Ink(d as u8)),
            _ => None,
        }
    }

    pub fn is_background(self) -> bool {
        matches!(self, Self::Background)
    }

    /// Palette color of this pixel, `None` for background.
    pub fn color(self) -> Option<Rgb> {
        match self {
            Self::Background => None,
            Self::Ink(index) => PALETTE.get(index as usize).copied(),
        }
    }
}

/// Index of a stock face (0 to `FACE_COUNT - 1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceId(u8);

impl FaceId {
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < FACE_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All stock faces in order.
    pub fn all() -> impl Iterator<Item = FaceId> {
        (0..FACE_COUNT as u8).map(FaceId)
    }
}

/// A working copy of a face bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    rows: Vec<Vec<Pixel>>,
}

impl Face {
    /// Copy a stock face into a fresh working buffer.
    pub fn load(id: FaceId) -> Self {
        // Stock tables hold only valid symbols.
        let rows = FACES[id.index()]
            .iter()
            .map(|row| row.chars().filter_map(Pixel::from_symbol).collect())
            .collect();
        Self { rows }
    }

    /// Build a face from symbol rows.
    ///
    /// All rows must have the same length and use only `.` and `0`-`9`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, FaceError> {
        let mut parsed: Vec<Vec<Pixel>> = Vec::with_capacity(rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            let pixels = row
                .as_ref()
                .chars()
                .map(|symbol| {
                    Pixel::from_symbol(symbol).ok_or(FaceError::InvalidSymbol {
                        row: row_index,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = parsed.first() {
                if first.len() != pixels.len() {
                    return Err(FaceError::RaggedRows {
                        row: row_index,
                        expected: first.len(),
                        found: pixels.len(),
                    });
                }
            }
            parsed.push(pixels);
        }

        if parsed.is_empty() {
            return Err(FaceError::Empty);
        }
        Ok(Self { rows: parsed })
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Pixels per row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Keep only the rows needed next to a message of `line_count` lines.
    ///
    /// Short messages get a fixed six-row window around the middle of the
    /// face. Longer ones get one row more than they have lines. A message
    /// nearly as tall as the face leaves it untouched.
    pub fn narrow(&mut self, line_count: usize) {
        let height = self.height();
        let lines = line_count.max(1);

        let (start, end) = if lines < MIN_WINDOW {
            let start = (height / 2 + 2).saturating_sub(MIN_WINDOW / 2);
            (start, start + MIN_WINDOW)
        } else if lines + 2 < height {
            let start = (height / 2 + 1).saturating_sub(lines / 2);
            (start, start + lines + 1)
        } else {
            return;
        };

        let end = end.min(height);
        let start = start.min(end);
        tracing::debug!(start, end, height, lines, "narrowing face");

        self.rows.truncate(end);
        self.rows.drain(..start);
    }

    /// Prefix every row with `count` background pixels.
    pub fn pad_left(&mut self, count: usize) {
        for row in &mut self.rows {
            let mut padded = vec![Pixel::Background; count];
            padded.append(row);
            *row = padded;
        }
    }

    /// Flip the face horizontally.
    pub fn mirror(&mut self) {
        for row in &mut self.rows {
            row.reverse();
        }
    }

    /// Number of background pixels before the first ink on `row`.
    pub fn leading_background(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |pixels| {
            pixels.iter().take_while(|p| p.is_background()).count()
        })
    }
}
