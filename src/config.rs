//! Options for a single run.

use crate::face::FaceId;
use crate::layout::Alignment;
use crate::message::MessageSource;

/// Everything a run needs besides the terminal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Which stock face to draw
    pub face: FaceId,
    /// Side of the screen the face goes on
    pub alignment: Alignment,
    /// Show every face row instead of a window sized to the message
    pub whole: bool,
    /// Where the message comes from
    pub source: MessageSource,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            face: FaceId::default(),
            alignment: Alignment::Right,
            whole: true,
            source: MessageSource::Stdin,
        }
    }
}
