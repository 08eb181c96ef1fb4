//! Error types for todoparse.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the parser, the file reader, and the CLI.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The parser received input that is not a string.
    #[error("Input is not a string: {0}")]
    InvalidInput(String),

    /// `override_rule` was called with a name that is not a built-in rule.
    #[error("Parser with name >{0}< does not exist.")]
    UnknownRule(String),

    /// An extension rule could not be built from the given argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The file reader was pointed at a path that does not exist.
    #[error("File {} does not exist.", .0.display())]
    FileNotFound(PathBuf),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = TodoError::FileNotFound(PathBuf::from("/wrong/path"));
        assert_eq!(err.to_string(), "File /wrong/path does not exist.");
    }

    #[test]
    fn test_unknown_rule_message() {
        let err = TodoError::UnknownRule("dueDate".to_string());
        assert_eq!(err.to_string(), "Parser with name >dueDate< does not exist.");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TodoError = io.into();
        assert!(matches!(err, TodoError::Io(_)));
    }
}
