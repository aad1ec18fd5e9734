use chrono::NaiveDate;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::model::{Task, TaskHandle};
use crate::reminder::ReminderReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

/// A task as rendered to the user: row number plus the derived overdue flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView<'a> {
    pub index: usize,
    pub task: &'a str,
    pub due: NaiveDate,
    pub completed: bool,
    pub overdue: bool,
}

impl<'a> TaskView<'a> {
    pub fn new(handle: TaskHandle, task: &'a Task, today: NaiveDate) -> Self {
        Self {
            index: handle.row(),
            task: &task.text,
            due: task.due,
            completed: task.completed,
            overdue: task.is_overdue(today),
        }
    }
}

fn pretty_line(view: &TaskView<'_>) -> String {
    let check = if view.completed { "[x]" } else { "[ ]" };
    let body = format!("{} (Due: {})", view.task, view.due);
    let body = if view.completed {
        body.strikethrough().dimmed().to_string()
    } else if view.overdue {
        body.red().to_string()
    } else {
        body
    };
    format!("{:>3}. {check} {body}", view.index)
}

pub fn print_task(view: &TaskView<'_>, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(view)?),
        Format::Pretty => println!("{}", pretty_line(view)),
        Format::Minimal => println!("{}", minimal_line(view)),
    }
    Ok(())
}

pub fn print_tasks(views: &[TaskView<'_>], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(views)?),
        Format::Pretty => {
            if views.is_empty() {
                println!("{}", "no tasks".dimmed());
            }
            for view in views {
                println!("{}", pretty_line(view));
            }
        }
        Format::Minimal => {
            println!("{:>4} {:10} {:4} {:7} TASK", "#", "DUE", "DONE", "OVERDUE");
            println!("{}", "-".repeat(50));
            for view in views {
                println!("{}", minimal_line(view));
            }
        }
    }
    Ok(())
}

fn minimal_line(view: &TaskView<'_>) -> String {
    format!(
        "{:>4} {:10} {:4} {:7} {}",
        view.index,
        view.due.to_string(),
        if view.completed { "yes" } else { "no" },
        if view.overdue { "yes" } else { "no" },
        truncate_text(view.task, 40)
    )
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

/// Summary line for a bulk completion change.
pub fn print_count(action: &str, count: usize, format: Format) -> Result<()> {
    match format {
        Format::Json => println!(
            "{}",
            serde_json::json!({ "action": action, "count": count })
        ),
        _ => println!("{action}: {count} task(s)"),
    }
    Ok(())
}

pub fn print_report(report: &ReminderReport, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(report)?),
        Format::Pretty | Format::Minimal => {
            if report.sent.is_empty() {
                println!("no reminders due for {}", report.today);
            }
            for reminder in &report.sent {
                println!("{}", reminder.message());
            }
            if report.failed > 0 {
                println!(
                    "{}",
                    format!("{} reminder(s) could not be delivered", report.failed).yellow()
                );
            }
        }
    }
    Ok(())
}
