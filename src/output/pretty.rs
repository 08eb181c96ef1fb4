use std::fmt::Write;

use colored::Colorize;

use crate::parser::Task;

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[Task], source: &str) -> String {
    if tasks.is_empty() {
        return format!("{} (0 tasks)\n  No tasks", source);
    }

    let mut output = format!("{} ({} tasks)\n", source, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&task_line(task));
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task) -> String {
    let mut output = format!("{}\n", task_line(task));

    writeln!(output, "  {}: {}", "Status".dimmed(), if task.done { "done" } else { "open" }).ok();

    if let Some(priority) = task.priority {
        writeln!(output, "  {}: {}", "Priority".dimmed(), priority).ok();
    }
    if let Some(created) = task.creation_date {
        writeln!(output, "  {}: {}", "Created".dimmed(), created).ok();
    }
    if let Some(completed) = task.completion_date {
        writeln!(output, "  {}: {}", "Completed".dimmed(), completed).ok();
    }
    if !task.context.is_empty() {
        writeln!(output, "  {}: {}", "Context".dimmed(), task.context.join(", ")).ok();
    }
    if !task.project.is_empty() {
        writeln!(output, "  {}: {}", "Project".dimmed(), task.project.join(", ")).ok();
    }
    for (key, value) in &task.extras {
        let value = value.as_str().map_or_else(|| value.to_string(), str::to_string);
        writeln!(output, "  {}: {}", key.dimmed(), value).ok();
    }

    output
}

fn task_line(task: &Task) -> String {
    let status_icon = if task.done { "[x]".green() } else { "[ ]".white() };

    let mut line = status_icon.to_string();

    if let Some(priority) = task.priority {
        write!(line, " {}", format!("({priority})").red().bold()).ok();
    }

    let description = if task.done {
        task.description.dimmed().to_string()
    } else {
        task.description.bold().to_string()
    };
    write!(line, " {description}").ok();

    if let Some(date) = task.completion_date.or(task.creation_date) {
        write!(line, "  {}", date.to_string().yellow()).ok();
    }
    if !task.context.is_empty() {
        let tags: Vec<String> = task.context.iter().map(|t| format!("+{t}")).collect();
        write!(line, "  {}", tags.join(" ").cyan()).ok();
    }
    if !task.project.is_empty() {
        let tags: Vec<String> = task.project.iter().map(|t| format!("@{t}")).collect();
        write!(line, "  {}", tags.join(" ").magenta()).ok();
    }

    line
}
