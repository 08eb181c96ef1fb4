//! Command implementations for todoparse.
//!
//! Each command returns the text to print.

mod completions;
mod parse;
mod read;

pub use completions::completions;
pub use parse::parse_line;
pub use read::read_file;
