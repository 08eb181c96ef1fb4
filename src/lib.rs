//! todoparse - a todo.txt parser
//!
//! This crate parses todo.txt entries into structured [`Task`] records. The
//! [`LineParser`] runs a fixed pipeline of replaceable extraction rules over
//! one line; the [`FileReader`] applies it to every non-empty line of a file.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod reader;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoError;
pub use parser::{key_value_rule, LineParser, RuleName, Task, TaskDraft};
pub use reader::FileReader;
