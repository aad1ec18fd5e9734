//! Runtime configuration.
//!
//! Resolution order: **CLI flag > env var > `docket.json` > default**.
//!
//! ```text
//! Field           Env Var                Config Key      Default
//! ─────────────── ────────────────────── ─────────────── ─────────────────
//! tasks_file      DOCKET_TASKS_FILE      tasks_file      <dir>/tasks.json
//! notified_file   DOCKET_NOTIFIED_FILE   notified_file   <dir>/notified.json
//! notifier        DOCKET_NOTIFIER        notifier        desktop
//! ```
//!
//! `<dir>` is `DOCKET_DIR` when set, otherwise the working directory. Relative
//! paths from the config file resolve against `<dir>`.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DocketError, Result};
use crate::notify::Notifier;
use crate::store::read_json;

pub const CONFIG_FILE: &str = "docket.json";
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const DEFAULT_NOTIFIED_FILE: &str = "notified.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: PathBuf,
    pub tasks_file: PathBuf,
    pub notified_file: PathBuf,
    pub notifier: Notifier,
}

/// Shape of `docket.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    tasks_file: Option<PathBuf>,
    notified_file: Option<PathBuf>,
    notifier: Option<Notifier>,
}

/// Values supplied on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub tasks_file: Option<PathBuf>,
    pub notified_file: Option<PathBuf>,
    pub notifier: Option<Notifier>,
}

impl Config {
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::load_with_env(overrides, |k| env::var(k).ok())
    }

    pub fn load_with_env(
        overrides: &Overrides,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let dir = match non_empty(get_env("DOCKET_DIR")) {
            Some(d) => PathBuf::from(d),
            None => env::current_dir()?,
        };
        let mut cfg = Self::defaults(&dir);

        // 1. Config file
        let config_path = dir.join(CONFIG_FILE);
        let file: Option<FileConfig> = read_json(&config_path).map_err(|e| {
            DocketError::Config(format!("{}: {e}", config_path.display()))
        })?;
        if let Some(file) = file {
            cfg.apply_file(file);
        }

        // 2. Env vars
        cfg.apply_env(&get_env)?;

        // 3. CLI flags
        cfg.apply_overrides(overrides);

        Ok(cfg)
    }

    pub fn defaults(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            tasks_file: dir.join(DEFAULT_TASKS_FILE),
            notified_file: dir.join(DEFAULT_NOTIFIED_FILE),
            notifier: Notifier::default(),
        }
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(p) = file.tasks_file {
            self.tasks_file = self.dir.join(p);
        }
        if let Some(p) = file.notified_file {
            self.notified_file = self.dir.join(p);
        }
        if let Some(n) = file.notifier {
            self.notifier = n;
        }
    }

    fn apply_env(&mut self, get_env: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(p) = non_empty(get_env("DOCKET_TASKS_FILE")) {
            self.tasks_file = PathBuf::from(p);
        }
        if let Some(p) = non_empty(get_env("DOCKET_NOTIFIED_FILE")) {
            self.notified_file = PathBuf::from(p);
        }
        if let Some(n) = non_empty(get_env("DOCKET_NOTIFIER")) {
            self.notifier = Notifier::parse(&n)?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(ref p) = overrides.tasks_file {
            self.tasks_file = p.clone();
        }
        if let Some(ref p) = overrides.notified_file {
            self.notified_file = p.clone();
        }
        if let Some(n) = overrides.notifier {
            self.notifier = n;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_live_in_docket_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cfg =
            Config::load_with_env(&Overrides::default(), env_from(&[("DOCKET_DIR", root)]))
                .unwrap();
        assert_eq!(cfg.tasks_file, dir.path().join("tasks.json"));
        assert_eq!(cfg.notified_file, dir.path().join("notified.json"));
        assert_eq!(cfg.notifier, Notifier::Desktop);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"tasks_file": "data/todo.json", "notifier": "stderr"}"#,
        )
        .unwrap();
        let root = dir.path().to_str().unwrap();
        let cfg =
            Config::load_with_env(&Overrides::default(), env_from(&[("DOCKET_DIR", root)]))
                .unwrap();
        assert_eq!(cfg.tasks_file, dir.path().join("data").join("todo.json"));
        assert_eq!(cfg.notified_file, dir.path().join("notified.json"));
        assert_eq!(cfg.notifier, Notifier::Stderr);
    }

    #[test]
    fn env_wins_over_file_and_flags_win_over_env() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"notifier": "stderr"}"#).unwrap();
        let root = dir.path().to_str().unwrap();
        let env = env_from(&[
            ("DOCKET_DIR", root),
            ("DOCKET_NOTIFIER", "none"),
            ("DOCKET_TASKS_FILE", "/tmp/env-tasks.json"),
        ]);

        let cfg = Config::load_with_env(&Overrides::default(), &env).unwrap();
        assert_eq!(cfg.notifier, Notifier::None);
        assert_eq!(cfg.tasks_file, PathBuf::from("/tmp/env-tasks.json"));

        let flags = Overrides {
            tasks_file: Some(PathBuf::from("/tmp/flag-tasks.json")),
            notified_file: None,
            notifier: Some(Notifier::Desktop),
        };
        let cfg = Config::load_with_env(&flags, &env).unwrap();
        assert_eq!(cfg.notifier, Notifier::Desktop);
        assert_eq!(cfg.tasks_file, PathBuf::from("/tmp/flag-tasks.json"));
    }

    #[test]
    fn bad_notifier_env_is_config_error() {
        let dir = tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let err = Config::load_with_env(
            &Overrides::default(),
            env_from(&[("DOCKET_DIR", root), ("DOCKET_NOTIFIER", "carrier-pigeon")]),
        )
        .unwrap_err();
        assert!(matches!(err, DocketError::Config(_)));
    }

    #[test]
    fn malformed_config_file_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"colour": "red"}"#).unwrap();
        let root = dir.path().to_str().unwrap();
        let err = Config::load_with_env(&Overrides::default(), env_from(&[("DOCKET_DIR", root)]))
            .unwrap_err();
        assert!(matches!(err, DocketError::Config(_)));
    }
}
