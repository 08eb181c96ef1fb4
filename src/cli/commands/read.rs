//! File read command implementation.

use crate::cli::args::{OutputFormat, ReadArgs};
use crate::config::Config;
use crate::error::TodoError;
use crate::output::format_tasks;
use crate::reader::FileReader;

/// Execute the read command.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, an extension key
/// is invalid, or output formatting fails.
pub fn read_file(config: &Config, args: &ReadArgs, format: OutputFormat) -> Result<String, TodoError> {
    let reader = FileReader::with_parser(config.build_parser(&args.extensions)?);
    let tasks = reader.parse_file(&args.file)?;
    format_tasks(&tasks, &args.file.display().to_string(), format)
}
