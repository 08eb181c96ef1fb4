//! todo.txt line parser.
//!
//! Parses lines like "x 2017-01-05 2017-01-01 Call mom +family @phone"
//! into a [`Task`] by running a fixed pipeline of extraction rules:
//!
//! done → priority | completion date → context → project → creation date →
//! extension rules → description
//!
//! Built-in rules can be swapped by name and extension rules appended, but
//! the dispatch order never changes.

pub mod rules;
mod task;

use std::fmt;

use tracing::trace;

pub use rules::{key_value_rule, Rule, RuleName};
pub use task::{Task, TaskDraft};

use crate::error::TodoError;

/// Line parser holding the built-in rule table and extension rules.
pub struct LineParser {
    builtins: [Rule; 7],
    extensions: Vec<Rule>,
}

impl LineParser {
    /// Create a parser with the stock rules and no extensions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builtins: RuleName::ALL.map(RuleName::builtin),
            extensions: Vec::new(),
        }
    }

    /// Parse one line into a task.
    ///
    /// # Examples
    ///
    /// ```
    /// use todoparse::parser::LineParser;
    ///
    /// let parser = LineParser::new();
    /// let task = parser.parse("(A) 2017-01-01 Call mom +family @phone");
    /// assert_eq!(task.priority, Some('A'));
    /// assert_eq!(task.context, vec!["family"]);
    /// assert_eq!(task.project, vec!["phone"]);
    /// assert_eq!(task.description, "Call mom");
    /// ```
    #[must_use]
    pub fn parse(&self, line: &str) -> Task {
        let mut draft = TaskDraft::new(line);

        self.run(RuleName::Done, &mut draft);
        if draft.done {
            self.run(RuleName::CompletionDate, &mut draft);
        } else {
            self.run(RuleName::Priority, &mut draft);
        }
        self.run(RuleName::Context, &mut draft);
        self.run(RuleName::Project, &mut draft);
        self.run(RuleName::CreationDate, &mut draft);

        for rule in &self.extensions {
            rule(&mut draft);
        }

        self.run(RuleName::Description, &mut draft);

        let task = draft.finish();
        trace!(line, done = task.done, "parsed line");
        task
    }

    /// Parse raw bytes, rejecting anything that is not UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if `line` is not valid UTF-8.
    pub fn parse_bytes(&self, line: &[u8]) -> Result<Task, TodoError> {
        let line = std::str::from_utf8(line).map_err(|e| TodoError::InvalidInput(e.to_string()))?;
        Ok(self.parse(line))
    }

    /// Append an extension rule.
    ///
    /// Extension rules run after every built-in rule except the
    /// description, in registration order.
    pub fn register<F>(&mut self, rule: F) -> &mut Self
    where
        F: Fn(&mut TaskDraft) + Send + Sync + 'static,
    {
        self.extensions.push(Box::new(rule));
        self
    }

    /// Replace the built-in rule called `name`.
    ///
    /// Accepts `done`, `priority`, `creationDate`, `completionDate`,
    /// `context`, `project` and `description`.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::UnknownRule` if `name` is not a built-in rule.
    pub fn override_rule<F>(&mut self, name: &str, rule: F) -> Result<&mut Self, TodoError>
    where
        F: Fn(&mut TaskDraft) + Send + Sync + 'static,
    {
        let name: RuleName = name.parse()?;
        Ok(self.override_builtin(name, rule))
    }

    /// Replace a built-in rule by its typed name.
    pub fn override_builtin<F>(&mut self, name: RuleName, rule: F) -> &mut Self
    where
        F: Fn(&mut TaskDraft) + Send + Sync + 'static,
    {
        self.builtins[name.slot()] = Box::new(rule);
        self
    }

    /// Number of registered extension rules.
    #[must_use]
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    fn run(&self, name: RuleName, draft: &mut TaskDraft) {
        (self.builtins[name.slot()])(draft);
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineParser")
            .field("extensions", &self.extensions.len())
            .finish_non_exhaustive()
    }
}
