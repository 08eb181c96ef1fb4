//! Output formatting for todoparse.
//!
//! This module provides formatters for displaying parsed tasks in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::parser::Task;

pub use json::*;
pub use pretty::*;

/// Format a task list based on output format
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], source: &str, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, source)),
        OutputFormat::Json => format_tasks_json(tasks, source),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}
