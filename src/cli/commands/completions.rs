//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TodoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "todoparse", &mut buf);
    script_from_bytes(buf)
}

fn script_from_bytes(buf: Vec<u8>) -> Result<String, TodoError> {
    String::from_utf8(buf)
        .map_err(|e| TodoError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_commands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("todoparse"));
        assert!(script.contains("parse"));
        assert!(script.contains("read"));
    }

    #[test]
    fn test_non_utf8_script_is_an_io_error() {
        let err = script_from_bytes(vec![b'#', 0xff]).unwrap_err();
        assert!(matches!(&err, TodoError::Io(io) if io.kind() == std::io::ErrorKind::InvalidData));
        assert!(!err.to_string().contains("not a string"));
    }
}
