use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use docket::config::{Config, Overrides};
use docket::error::{DocketError, Result};
use docket::facade::{Docket, local_today};
use docket::model::{TaskHandle, parse_date};
use docket::notify::Notifier;
use docket::output::Format;

#[derive(Parser)]
#[command(
    name = "docket",
    version = docket::build_info::long_version(),
    about = "Local to-do list with due dates and once-a-day reminders"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Shorthand for --format json
    #[arg(long, global = true, hide = true)]
    json: bool,
    /// Task file (default: tasks.json in DOCKET_DIR or the working directory)
    #[arg(long, global = true)]
    tasks_file: Option<PathBuf>,
    /// Reminder log file (default: notified.json next to the task file)
    #[arg(long, global = true)]
    notified_file: Option<PathBuf>,
    /// Where reminders are delivered
    #[arg(long, global = true, value_enum)]
    notifier: Option<Notifier>,
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, hide = true)]
    today: Option<String>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        text: String,
        /// Due date: YYYY-MM-DD, today, tomorrow or yesterday
        #[arg(long, default_value = "today")]
        due: String,
    },
    /// Replace a task's text (due date and completion are kept)
    Edit {
        /// Row number as shown by `list`
        index: usize,
        /// New task description
        text: String,
    },
    /// Delete a task
    Delete {
        /// Row number as shown by `list`
        index: usize,
    },
    /// Mark a task completed
    Done {
        /// Row number as shown by `list`
        index: usize,
    },
    /// Mark a task not completed
    Undone {
        /// Row number as shown by `list`
        index: usize,
    },
    /// Mark every task completed
    DoneAll,
    /// Mark every task not completed
    UndoneAll,
    /// List tasks
    List {
        /// Only tasks due on this date: YYYY-MM-DD, today, tomorrow or yesterday
        #[arg(long)]
        date: Option<String>,
        /// Only overdue tasks
        #[arg(long)]
        overdue: bool,
    },
    /// Show the reminders sent at startup
    Remind,
}

fn handle_arg(index: usize) -> Result<TaskHandle> {
    TaskHandle::from_row(index).ok_or(DocketError::TaskNotFound(index))
}

fn resolve_today(input: Option<&str>) -> Result<NaiveDate> {
    let today = local_today();
    match input {
        Some(raw) => parse_date(raw, today),
        None => Ok(today),
    }
}

fn run(cli: Cli, format: Format) -> Result<()> {
    let overrides = Overrides {
        tasks_file: cli.tasks_file,
        notified_file: cli.notified_file,
        notifier: cli.notifier,
    };
    let config = Config::load(&overrides)?;
    let today = resolve_today(cli.today.as_deref())?;
    let sink = config.notifier.sink();

    let (mut app, report) = Docket::load_all(&config, today, sink.as_ref())?;

    match cli.command {
        Commands::Add { text, due } => {
            let due = parse_date(&due, today)?;
            docket::commands::add::run(&mut app, &text, due, format)
        }
        Commands::Edit { index, text } => {
            docket::commands::edit::run(&mut app, handle_arg(index)?, &text, format)
        }
        Commands::Delete { index } => {
            docket::commands::delete::run(&mut app, handle_arg(index)?, format)
        }
        Commands::Done { index } => {
            docket::commands::complete::set(&mut app, handle_arg(index)?, true, format)
        }
        Commands::Undone { index } => {
            docket::commands::complete::set(&mut app, handle_arg(index)?, false, format)
        }
        Commands::DoneAll => docket::commands::complete::all(&mut app, true, format),
        Commands::UndoneAll => docket::commands::complete::all(&mut app, false, format),
        Commands::List { date, overdue } => {
            let date = date.map(|d| parse_date(&d, today)).transpose()?;
            docket::commands::list::run(&app, date, overdue, format)
        }
        Commands::Remind => docket::commands::remind::run(&report, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_zero_is_not_a_task() {
        let err = handle_arg(0).unwrap_err();
        assert!(matches!(err, DocketError::TaskNotFound(0)));
        assert_eq!(handle_arg(3).unwrap(), TaskHandle(2));
    }

    #[test]
    fn resolve_today_accepts_override() {
        let today = resolve_today(Some("2024-01-02")).unwrap();
        assert_eq!(today.to_string(), "2024-01-02");
        assert!(resolve_today(Some("someday")).is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docket",
            "list",
            "--date",
            "today",
            "--format",
            "json",
            "--notifier",
            "none",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.notifier, Some(Notifier::None));
        assert!(matches!(cli.command, Commands::List { overdue: false, .. }));
    }
}

fn main() {
    let cli = Cli::parse();
    let format = if cli.json { Format::Json } else { cli.format };
    if let Err(e) = docket::logging::init_logging(cli.verbose) {
        eprintln!("warning: {e}");
    }
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
