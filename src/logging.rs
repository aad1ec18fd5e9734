//! Logger bootstrap for the command-line shell.
//!
//! The library only emits through the `log` facade. The binary calls
//! [`init_logging`] once to route records to stderr via `flexi_logger`.
//! `DOCKET_LOG` (a `flexi_logger` spec such as `debug` or `docket=info`)
//! takes precedence over the verbosity count.

use std::sync::OnceLock;

use flexi_logger::{Logger, LoggerHandle, WriteMode};

pub const LOG_ENV: &str = "DOCKET_LOG";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Map `-v` occurrences to a level spec.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Start stderr logging. Repeated calls are no-ops.
///
/// Returns a human-readable error when the spec is invalid or the backend
/// cannot start; callers report it and carry on without logging.
pub fn init_logging(verbose: u8) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let spec = std::env::var(LOG_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbose).to_string());

    let handle = Logger::try_with_str(&spec)
        .map_err(|e| format!("invalid log spec `{spec}`: {e}"))?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| format!("failed to start logger: {e}"))?;

    let _ = LOGGER.set(handle);
    log::debug!("logging initialized with spec `{spec}`");
    Ok(())
}
