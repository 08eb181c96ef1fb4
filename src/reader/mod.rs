//! Whole-file parsing.
//!
//! Reads a todo.txt file line by line, skips empty lines, and parses each
//! remaining line with a [`LineParser`]. Output order matches line order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::TodoError;
use crate::parser::{LineParser, Task, TaskDraft};

/// Parses todo.txt files into ordered task lists.
#[derive(Debug, Default)]
pub struct FileReader {
    parser: LineParser,
}

impl FileReader {
    /// Create a reader backed by a stock parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader backed by an already configured parser.
    #[must_use]
    pub const fn with_parser(parser: LineParser) -> Self {
        Self { parser }
    }

    /// The parser used for each line.
    #[must_use]
    pub const fn parser(&self) -> &LineParser {
        &self.parser
    }

    /// Register an extension rule on the inner parser.
    pub fn register<F>(&mut self, rule: F) -> &mut Self
    where
        F: Fn(&mut TaskDraft) + Send + Sync + 'static,
    {
        self.parser.register(rule);
        self
    }

    /// Parse every non-empty line of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::FileNotFound` before reading anything if `path`
    /// does not exist, `TodoError::Io` if reading fails, and
    /// `TodoError::InvalidInput` if a line is not UTF-8.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Task>, TodoError> {
        let mut tasks = Vec::new();
        self.stream_file(path, |task| tasks.push(task))?;
        Ok(tasks)
    }

    /// Parse the file at `path` and hand the outcome to `callback`.
    ///
    /// The callback runs exactly once, with either the full task list or the
    /// first error.
    pub fn parse_file_with<F>(&self, path: &Path, callback: F)
    where
        F: FnOnce(Result<Vec<Task>, TodoError>),
    {
        callback(self.parse_file(path));
    }

    /// Parse the file at `path`, passing each task to `on_task` as soon as
    /// its line is read. Returns the number of tasks produced.
    ///
    /// # Errors
    ///
    /// Same as [`FileReader::parse_file`].
    pub fn stream_file<F>(&self, path: &Path, on_task: F) -> Result<usize, TodoError>
    where
        F: FnMut(Task),
    {
        if !path.exists() {
            return Err(TodoError::FileNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "reading todo file");
        let file = File::open(path)?;
        let count = self.stream_reader(BufReader::new(file), on_task)?;
        debug!(path = %path.display(), count, "finished todo file");
        Ok(count)
    }

    /// Parse every non-empty line from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Io` if reading fails and `TodoError::InvalidInput`
    /// if a line is not UTF-8.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Task>, TodoError> {
        let mut tasks = Vec::new();
        self.stream_reader(reader, |task| tasks.push(task))?;
        Ok(tasks)
    }

    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    fn stream_reader<R, F>(&self, mut reader: R, mut on_task: F) -> Result<usize, TodoError>
    where
        R: BufRead,
        F: FnMut(Task),
    {
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        let mut count = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            for line in split_lines(&buf) {
                line_no += 1;
                if line.is_empty() {
                    continue;
                }

                let task = self.parser.parse_bytes(line).map_err(|e| match e {
                    TodoError::InvalidInput(msg) => {
                        TodoError::InvalidInput(format!("line {line_no}: {msg}"))
                    }
                    other => other,
                })?;
                on_task(task);
                count += 1;
            }
        }

        Ok(count)
    }
}

/// Split one `\n`-terminated chunk on the remaining `\r` breaks.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(chunk: &[u8]) -> Vec<&[u8]> {
        split_lines(chunk).collect()
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(lines(b"task\n"), vec![&b"task"[..]]);
        assert_eq!(lines(b"task\r\n"), vec![&b"task"[..]]);
        assert_eq!(lines(b"task"), vec![&b"task"[..]]);
        assert_eq!(lines(b"\n"), vec![&b""[..]]);
        assert_eq!(lines(b"one\rtwo\n"), vec![&b"one"[..], &b"two"[..]]);
    }

    #[test]
    fn test_parse_reader_lone_carriage_returns() {
        let reader = FileReader::new();
        let tasks = reader
            .parse_reader(Cursor::new("(A) first\r\rsecond +ctx\rthird"))
            .unwrap();
        let descriptions: Vec<_> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
        assert_eq!(tasks[0].priority, Some('A'));
        assert_eq!(tasks[1].context, vec!["ctx"]);
    }

    #[test]
    fn test_parse_reader_skips_empty_lines() {
        let reader = FileReader::new();
        let tasks = reader
            .parse_reader(Cursor::new("\n(A) Test task +context @project\n\n"))
            .unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(
            tasks[0],
            LineParser::new().parse("(A) Test task +context @project")
        );
    }

    #[test]
    fn test_parse_reader_keeps_order() {
        let reader = FileReader::new();
        let tasks = reader
            .parse_reader(Cursor::new("first\r\nsecond\nthird"))
            .unwrap();
        let descriptions: Vec<_> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_whitespace_line_is_not_empty() {
        let reader = FileReader::new();
        let tasks = reader.parse_reader(Cursor::new("  \n")).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "");
    }

    #[test]
    fn test_parse_reader_reports_bad_line() {
        let reader = FileReader::new();
        let err = reader
            .parse_reader(Cursor::new(b"ok\n\xff\xfe\n".to_vec()))
            .unwrap_err();
        assert!(matches!(err, TodoError::InvalidInput(msg) if msg.starts_with("line 2:")));
    }

    #[test]
    fn test_register_forwards_to_parser() {
        let mut reader = FileReader::new();
        reader.register(|draft: &mut TaskDraft| {
            draft.extras.insert("seen".into(), true.into());
        });
        assert_eq!(reader.parser().extension_count(), 1);

        let tasks = reader.parse_reader(Cursor::new("a\nb\n")).unwrap();
        assert!(tasks.iter().all(|t| t.extras["seen"] == true));
    }
}
