//! Message input and normalization.

mod input;
mod sanitize;

pub use input::MessageSource;
pub use sanitize::{line_count, sanitize};
