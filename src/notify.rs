//! Notification sinks: where reminders end up.
//!
//! Delivery is best-effort. A sink reports failure through its `Result`, but
//! the reminder evaluator only logs it and moves on.

use std::cell::RefCell;
use std::process::Command;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{DocketError, Result};

pub trait NotificationSink {
    fn notify(&self, title: &str, message: &str) -> Result<()>;
}

/// Which sink the shell should build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum Notifier {
    /// Native desktop notification (osascript on macOS, notify-send elsewhere)
    #[default]
    Desktop,
    /// Print reminders to stderr
    Stderr,
    /// Drop reminders
    None,
}

impl Notifier {
    pub fn parse(input: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(input.trim(), true)
            .map_err(|_| DocketError::Config(format!("unknown notifier '{input}'")))
    }

    pub fn sink(self) -> Box<dyn NotificationSink> {
        match self {
            Self::Desktop => Box::new(DesktopSink),
            Self::Stderr => Box::new(StderrSink),
            Self::None => Box::new(NullSink),
        }
    }
}

impl std::fmt::Display for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Stderr => write!(f, "stderr"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Shells out to the platform notifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopSink;

impl NotificationSink for DesktopSink {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        let mut cmd = desktop_command(title, message);
        let program = cmd.get_program().to_string_lossy().into_owned();
        let status = cmd
            .status()
            .map_err(|e| DocketError::Notification(format!("{program}: {e}")))?;
        if !status.success() {
            return Err(DocketError::Notification(format!(
                "{program} exited with {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn desktop_command(title: &str, message: &str) -> Command {
    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        applescript_escape(message),
        applescript_escape(title)
    );
    let mut cmd = Command::new("osascript");
    cmd.arg("-e").arg(script);
    cmd
}

#[cfg(not(target_os = "macos"))]
fn desktop_command(title: &str, message: &str) -> Command {
    let mut cmd = Command::new("notify-send");
    cmd.arg(title).arg(message);
    cmd
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl NotificationSink for StderrSink {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        eprintln!("{title}: {message}");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _title: &str, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Collects notifications in memory, for embedding shells and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: RefCell<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(title, message)` pairs in dispatch order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        self.sent
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &S {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        (**self).notify(title, message)
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        (**self).notify(title, message)
    }
}
