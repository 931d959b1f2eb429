//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Options;
use crate::face::FaceId;
use crate::layout::Alignment;
use crate::message::MessageSource;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TECHO_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("TECHO_BUILD_DATE"),
    ")"
);

/// Teto's echo - print a message next to Teto's face
#[derive(Parser, Debug)]
#[command(name = "techo", version = VERSION, long_about = None, args_override_self = true)]
#[command(after_help = "Examples:\n  techo hello world\n  cat sample.txt | techo\n  techo -q")]
pub struct Cli {
    /// Composed face (default)
    #[arg(short = '0', overrides_with_all = ["face1", "face2", "face3", "face4", "face5"])]
    pub face0: bool,

    /// Smiling face
    #[arg(short = '1', overrides_with_all = ["face0", "face2", "face3", "face4", "face5"])]
    pub face1: bool,

    /// Sharp look with a grin
    #[arg(short = '2', overrides_with_all = ["face0", "face1", "face3", "face4", "face5"])]
    pub face2: bool,

    /// Wide-eyed face
    #[arg(short = '3', overrides_with_all = ["face0", "face1", "face2", "face4", "face5"])]
    pub face3: bool,

    /// Surprised face
    #[arg(short = '4', overrides_with_all = ["face0", "face1", "face2", "face3", "face5"])]
    pub face4: bool,

    /// Troubled face
    #[arg(short = '5', overrides_with_all = ["face0", "face1", "face2", "face3", "face4"])]
    pub face5: bool,

    /// Output no message (show face only)
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Reduce the face's height to fit the message
    #[arg(short = 'd')]
    pub reduce: bool,

    /// Position face to the left
    #[arg(short = 'l', overrides_with = "right")]
    pub left: bool,

    /// Position face to the right (default)
    #[arg(short = 'r', overrides_with = "left")]
    pub right: bool,

    /// Read message from a text file
    #[arg(short = 'f', value_name = "TEXT_FILE")]
    pub file: Option<PathBuf>,

    /// Message words, joined with single spaces (stdin when absent)
    #[arg(value_name = "MESSAGE", num_args = 1.., trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Selected face index, 0 when no face flag was given.
    pub fn face(&self) -> FaceId {
        let flags = [
            self.face0, self.face1, self.face2, self.face3, self.face4, self.face5,
        ];
        flags
            .iter()
            .position(|&set| set)
            .and_then(|index| FaceId::new(index as u8))
            .unwrap_or_default()
    }

    pub fn alignment(&self) -> Alignment {
        if self.left {
            Alignment::Left
        } else {
            Alignment::Right
        }
    }

    pub fn into_options(self) -> Options {
        Options {
            face: self.face(),
            alignment: self.alignment(),
            whole: !self.reduce,
            source: MessageSource::select(self.quiet, self.file, self.message),
        }
    }
}
