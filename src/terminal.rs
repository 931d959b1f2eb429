//! Terminal queries and cleanup.

use std::io::{self, Write};

use terminal_size::{terminal_size, Width};

use crate::render::RESET;

/// Width used when stdout is not a terminal and `COLUMNS` is unset.
pub const DEFAULT_COLUMNS: usize = 80;

/// Terminal width in cells, queried once per run.
///
/// `COLUMNS` wins when it holds a positive number, then the size of the
/// terminal on stdout, then [`DEFAULT_COLUMNS`].
pub fn columns() -> usize {
    columns_from(std::env::var("COLUMNS").ok().as_deref(), || {
        terminal_size().map(|(Width(w), _)| w as usize)
    })
}

fn columns_from(env: Option<&str>, query: impl FnOnce() -> Option<usize>) -> usize {
    env.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .or_else(|| query().filter(|&n| n > 0))
        .unwrap_or(DEFAULT_COLUMNS)
}

/// Reset colors and attributes on `out`.
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(RESET.as_bytes())?;
    out.flush()
}

/// On Ctrl+C, reset the terminal style and exit with status 0.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let _ = interrupt_reset();
        std::process::exit(0);
    })
}

/// Reset sent from the interrupt handler.
///
/// The renderer holds the stdout lock for the whole drawing, so the reset
/// goes to stderr, which shares the terminal when both are attached to it.
fn interrupt_reset() -> io::Result<()> {
    restore(&mut io::stderr())
}
