//! Face construction errors.

/// Errors raised while building a face from symbol rows.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FaceError {
    #[error("Face has no rows")]
    Empty,

    #[error("Row {row} is {found} pixels wide, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown symbol {symbol:?} in row {row}")]
    InvalidSymbol { row: usize, symbol: char },
}
