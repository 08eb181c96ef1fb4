//! JSON output formatting for todoparse.

use serde_json::json;

use crate::error::TodoError;
use crate::parser::Task;

/// Format a task list as JSON
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], source: &str) -> Result<String, TodoError> {
    let output = json!({
        "file": source,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(task)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LineParser;

    #[test]
    fn test_format_tasks_json_empty_list() {
        let result = format_tasks_json(&[], "todo.txt").unwrap();

        assert!(result.contains("\"file\": \"todo.txt\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_task_json_fields() {
        let task = LineParser::new().parse("x 2017-01-05 2017-01-01 Test message +ctx @proj");
        let result = format_task_json(&task).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["done"], true);
        assert_eq!(value["completionDate"], "2017-01-05");
        assert_eq!(value["creationDate"], "2017-01-01");
        assert_eq!(value["context"], json!(["ctx"]));
        assert_eq!(value["project"], json!(["proj"]));
        assert_eq!(value["description"], "Test message");
        assert!(value.get("residue").is_none());
    }

    #[test]
    fn test_format_task_json_reads_back() {
        let task = LineParser::new().parse("(B) Call +family");
        let result = format_task_json(&task).unwrap();
        let back: Task = serde_json::from_str(&result).unwrap();
        assert_eq!(back, task);
    }
}
