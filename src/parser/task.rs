//! Parsed task records.
//!
//! [`TaskDraft`] is the in-progress record the extraction rules work on. It
//! carries the `residue`, the part of the line no rule has claimed yet.
//! [`TaskDraft::finish`] drops the residue and yields the final [`Task`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One parsed todo.txt line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The unmodified input line.
    pub original: String,
    /// Whether the line starts with the `x ` completion marker.
    pub done: bool,
    /// Priority letter from a leading `(A)`. Only set for open tasks.
    #[serde(default)]
    pub priority: Option<char>,
    #[serde(default)]
    pub creation_date: Option<NaiveDate>,
    /// Only set for done tasks.
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    /// `+tag` entries in order of appearance.
    #[serde(default)]
    pub context: Vec<String>,
    /// `@tag` entries in order of appearance.
    #[serde(default)]
    pub project: Vec<String>,
    /// Free text left over once every other field is stripped.
    #[serde(default)]
    pub description: String,
    /// Fields populated by extension rules.
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Task {
    /// Look up an extension field as a string.
    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extras.get(key).and_then(serde_json::Value::as_str)
    }

    /// Check whether any structured field beyond the description was found.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.priority.is_some()
            || self.creation_date.is_some()
            || self.completion_date.is_some()
            || !self.context.is_empty()
            || !self.project.is_empty()
            || !self.extras.is_empty()
    }
}

/// A task under construction.
///
/// Rules read `original` for matching and remove what they claim from
/// `residue`. Extension rules may touch any field, including `extras`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub original: String,
    pub residue: String,
    pub done: bool,
    pub priority: Option<char>,
    pub creation_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub context: Vec<String>,
    pub project: Vec<String>,
    pub description: String,
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl TaskDraft {
    /// Start a draft for `line` with every optional field absent.
    #[must_use]
    pub fn new(line: &str) -> Self {
        Self {
            original: line.to_string(),
            residue: line.to_string(),
            ..Self::default()
        }
    }

    /// Remove the first occurrence of `span` from the residue.
    ///
    /// Only one occurrence goes, so a repeated marker has to be claimed once
    /// per match.
    pub fn claim(&mut self, span: &str) {
        if span.is_empty() {
            return;
        }
        if self.residue.contains(span) {
            self.residue = self.residue.replacen(span, "", 1);
        }
    }

    /// Drop the residue and return the finished task.
    #[must_use]
    pub fn finish(self) -> Task {
        Task {
            original: self.original,
            done: self.done,
            priority: self.priority,
            creation_date: self.creation_date,
            completion_date: self.completion_date,
            context: self.context,
            project: self.project,
            description: self.description,
            extras: self.extras,
        }
    }
}
