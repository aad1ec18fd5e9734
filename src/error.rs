use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocketError {
    #[error("task {0} not found")]
    TaskNotFound(usize),

    #[error("invalid date '{0}' (expected YYYY-MM-DD, today, tomorrow or yesterday)")]
    InvalidDate(String),

    #[error("malformed file '{}': {source}", .path.display())]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("notification failed: {0}")]
    Notification(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocketError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) => "task_not_found",
            Self::InvalidDate(_) => "invalid_date",
            Self::MalformedFile { .. } => "malformed_file",
            Self::Notification(_) => "notification_failed",
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, DocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(DocketError::TaskNotFound(3).code(), "task_not_found");
        assert_eq!(
            DocketError::InvalidDate("nope".into()).code(),
            "invalid_date"
        );
        assert_eq!(DocketError::Config("x".into()).code(), "config_error");
    }

    #[test]
    fn malformed_file_names_the_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DocketError::MalformedFile {
            path: PathBuf::from("tasks.json"),
            source,
        };
        assert!(err.to_string().starts_with("malformed file 'tasks.json'"));
    }
}
