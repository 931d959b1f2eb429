//! Errors surfaced by the techo pipeline.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The face does not fit beside the terminal's right edge.
    #[error("Terminal is {columns} columns wide, face needs more than {required}")]
    NarrowScreen { columns: usize, required: usize },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
