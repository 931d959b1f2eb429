//! Integration tests for techo.

mod cli_test;
mod helpers;
mod render_test;
