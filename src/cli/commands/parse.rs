//! Single-line parse command implementation.

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::TodoError;
use crate::output::format_task;

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if an extension key is invalid or output formatting fails.
pub fn parse_line(config: &Config, args: &ParseArgs, format: OutputFormat) -> Result<String, TodoError> {
    let parser = config.build_parser(&args.extensions)?;
    let task = parser.parse(&args.line);
    format_task(&task, format)
}
