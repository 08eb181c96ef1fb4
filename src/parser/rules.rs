//! Built-in extraction rules and the key:value extension rule factory.
//!
//! Every rule reads `original` for matching and claims what it extracted
//! from `residue`, so the description ends up as whatever no rule wanted.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::task::TaskDraft;
use crate::error::TodoError;

/// A rule run against the draft of one line.
pub type Rule = Box<dyn Fn(&mut TaskDraft) + Send + Sync>;

/// Names of the built-in rule slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    Done,
    Priority,
    CreationDate,
    CompletionDate,
    Context,
    Project,
    Description,
}

impl RuleName {
    /// Every built-in rule, in slot order.
    pub const ALL: [Self; 7] = [
        Self::Done,
        Self::Priority,
        Self::CreationDate,
        Self::CompletionDate,
        Self::Context,
        Self::Project,
        Self::Description,
    ];

    /// Index of this rule's slot in the parser table.
    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// The canonical name used by `override_rule`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Priority => "priority",
            Self::CreationDate => "creationDate",
            Self::CompletionDate => "completionDate",
            Self::Context => "context",
            Self::Project => "project",
            Self::Description => "description",
        }
    }

    /// The stock implementation bound to this slot.
    #[must_use]
    pub fn builtin(self) -> Rule {
        match self {
            Self::Done => Box::new(parse_done),
            Self::Priority => Box::new(parse_priority),
            Self::CreationDate => Box::new(parse_creation_date),
            Self::CompletionDate => Box::new(parse_completion_date),
            Self::Context => Box::new(parse_context),
            Self::Project => Box::new(parse_project),
            Self::Description => Box::new(parse_description),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "done" => Ok(Self::Done),
            "priority" => Ok(Self::Priority),
            "creationDate" | "creation_date" => Ok(Self::CreationDate),
            "completionDate" | "completion_date" => Ok(Self::CompletionDate),
            "context" => Ok(Self::Context),
            "project" => Ok(Self::Project),
            "description" => Ok(Self::Description),
            other => Err(TodoError::UnknownRule(other.to_string())),
        }
    }
}

const DONE_MARKER: &str = "x ";

// Compiled regex patterns
static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([A-Z])\)").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static COMPLETION_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^x\s([0-9]{4}-[0-9]{2}-[0-9]{2})")
        .unwrap_or_else(|e| panic!("Invalid completion date regex: {e}"))
});

static CREATION_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Line start, or right after a "(A) " priority.
    Regex::new(r"(^|^\([A-Z]\)\s)([0-9]{4}-[0-9]{2}-[0-9]{2})")
        .unwrap_or_else(|e| panic!("Invalid creation date regex: {e}"))
});

static DONE_CREATION_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Right after "x YYYY-MM-DD ".
    Regex::new(r"(^x\s[0-9]{4}-[0-9]{2}-[0-9]{2}\s)([0-9]{4}-[0-9]{2}-[0-9]{2})")
        .unwrap_or_else(|e| panic!("Invalid done creation date regex: {e}"))
});

static CONTEXT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+([A-Za-z0-9]*)").unwrap_or_else(|e| panic!("Invalid context regex: {e}"))
});

static PROJECT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9]*)").unwrap_or_else(|e| panic!("Invalid project regex: {e}"))
});

static EXTENSION_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").unwrap_or_else(|e| panic!("Invalid extension key regex: {e}"))
});

/// Mark the draft done when the line starts with `x `.
pub fn parse_done(draft: &mut TaskDraft) {
    if draft.original.starts_with(DONE_MARKER) {
        draft.done = true;
        draft.claim(DONE_MARKER);
    }
}

/// Extract a leading `(A)` priority.
pub fn parse_priority(draft: &mut TaskDraft) {
    let Some(caps) = PRIORITY_PATTERN.captures(&draft.original) else {
        return;
    };
    let (Some(span), Some(letter)) = (caps.get(0), caps.get(1)) else {
        return;
    };
    let span = span.as_str().to_string();
    draft.priority = letter.as_str().chars().next();
    draft.claim(&span);
}

/// Extract the date that follows the `x ` marker.
pub fn parse_completion_date(draft: &mut TaskDraft) {
    let Some(raw) = COMPLETION_DATE_PATTERN
        .captures(&draft.original)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
    else {
        return;
    };
    draft.completion_date = parse_date(&raw);
    draft.claim(&raw);
}

/// Extract the creation date.
///
/// Open tasks accept it at line start or after the priority; done tasks
/// only right after the completion date.
pub fn parse_creation_date(draft: &mut TaskDraft) {
    let pattern = if draft.done {
        &*DONE_CREATION_DATE_PATTERN
    } else {
        &*CREATION_DATE_PATTERN
    };
    let Some(raw) = pattern
        .captures(&draft.original)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
    else {
        return;
    };
    draft.creation_date = parse_date(&raw);
    draft.claim(&raw);
}

/// Collect every `+tag`.
pub fn parse_context(draft: &mut TaskDraft) {
    let tags = collect_tags(&CONTEXT_PATTERN, draft);
    draft.context.extend(tags);
}

/// Collect every `@tag`.
pub fn parse_project(draft: &mut TaskDraft) {
    let tags = collect_tags(&PROJECT_PATTERN, draft);
    draft.project.extend(tags);
}

/// Whatever is left of the residue, trimmed.
pub fn parse_description(draft: &mut TaskDraft) {
    draft.description = draft.residue.trim().to_string();
}

/// Claim every match of `pattern` in `original` and return the captured tags.
fn collect_tags(pattern: &Regex, draft: &mut TaskDraft) -> Vec<String> {
    let matches: Vec<(String, String)> = pattern
        .captures_iter(&draft.original)
        .filter_map(|caps| {
            let span = caps.get(0)?.as_str().to_string();
            let tag = caps.get(1).map_or("", |m| m.as_str()).to_string();
            Some((span, tag))
        })
        .collect();

    matches
        .into_iter()
        .map(|(span, tag)| {
            draft.claim(&span);
            tag
        })
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(date = raw, error = %e, "ignoring impossible calendar date");
            None
        }
    }
}

/// Build an extension rule for todo.txt `key:value` metadata.
///
/// The value of the first `key:value` token lands in `extras[key]`; every
/// matching token is removed from the residue.
///
/// # Errors
///
/// Returns `TodoError::InvalidArgument` if `key` is empty or contains
/// anything besides ASCII letters, digits, `-` and `_`.
///
/// # Examples
///
/// ```
/// use todoparse::parser::{key_value_rule, LineParser};
///
/// let mut parser = LineParser::new();
/// parser.register(key_value_rule("due").unwrap());
///
/// let task = parser.parse("pay rent due:2017-02-01 +home");
/// assert_eq!(task.extra_str("due"), Some("2017-02-01"));
/// assert_eq!(task.description, "pay rent");
/// ```
pub fn key_value_rule(key: &str) -> Result<Rule, TodoError> {
    if !EXTENSION_KEY_PATTERN.is_match(key) {
        return Err(TodoError::InvalidArgument(format!(
            "extension key {key:?} must be non-empty and use only letters, digits, '-' or '_'"
        )));
    }

    let pattern = Regex::new(&format!(r"(?:^|\s)({}:(\S+))", regex::escape(key)))
        .map_err(|e| TodoError::InvalidArgument(format!("extension key {key:?}: {e}")))?;
    let key = key.to_string();

    Ok(Box::new(move |draft: &mut TaskDraft| {
        let found: Vec<(String, String)> = pattern
            .captures_iter(&draft.original)
            .filter_map(|caps| {
                Some((caps.get(1)?.as_str().to_string(), caps.get(2)?.as_str().to_string()))
            })
            .collect();

        for (i, (token, value)) in found.into_iter().enumerate() {
            if i == 0 {
                draft
                    .extras
                    .insert(key.clone(), serde_json::Value::String(value));
            }
            draft.claim(&token);
        }
    }))
}
