//! Where the message comes from.

use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Message source, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageSource {
    /// No message, face only.
    Quiet,
    /// Whole file read as text.
    File(PathBuf),
    /// Command-line words joined by single spaces.
    Args(Vec<String>),
    /// Standard input, line by line until end of input.
    #[default]
    Stdin,
}

impl MessageSource {
    /// Pick the source the way the CLI flags rank them.
    pub fn select(quiet: bool, file: Option<PathBuf>, words: Vec<String>) -> Self {
        if quiet {
            Self::Quiet
        } else if let Some(path) = file {
            Self::File(path)
        } else if !words.is_empty() {
            Self::Args(words)
        } else {
            Self::Stdin
        }
    }

    /// Read the raw message. `stdin` is only touched for [`MessageSource::Stdin`].
    pub fn read_with<R: BufRead>(&self, stdin: R) -> Result<String> {
        match self {
            Self::Quiet => Ok(String::new()),
            Self::File(path) => fs::read_to_string(path).map_err(|source| Error::ReadFile {
                path: path.clone(),
                source,
            }),
            Self::Args(words) => Ok(words.join(" ")),
            Self::Stdin => read_lines(stdin),
        }
    }
}

/// Collect every line of `reader`, each followed by `\n`.
fn read_lines<R: BufRead>(reader: R) -> Result<String> {
    let mut message = String::new();
    for line in reader.lines() {
        message.push_str(&line?);
        message.push('\n');
    }
    Ok(message)
}
