//! Runtime configuration passed explicitly to transports.
//!
//! # Responsibility
//! - Describe logging and script-execution settings as plain values.
//! - Normalize user-supplied values once, at startup.
//!
//! # Invariants
//! - Core code never reads configuration variables itself; binaries resolve
//!   env/args into these structs and hand them down.

use std::path::{Path, PathBuf};

/// Default interpreter for generated scripts.
pub const DEFAULT_SCRIPT_PROGRAM: &str = "osascript";
const DEFAULT_LOG_DIR_NAME: &str = "notesy-logs";

/// Logging settings consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: crate::logging::default_log_level().to_string(),
            dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

/// Script execution settings consumed by [`crate::gateway::OsaScriptRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Interpreter invoked as `<program> <script file>`.
    pub program: PathBuf,
    /// Directory receiving short-lived script files.
    pub script_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_SCRIPT_PROGRAM),
            script_dir: std::env::temp_dir(),
        }
    }
}

impl RunnerConfig {
    /// Creates `script_dir` when missing.
    ///
    /// # Errors
    /// - Returns an error when the directory cannot be created.
    pub fn prepare(&self) -> Result<(), String> {
        std::fs::create_dir_all(&self.script_dir).map_err(|err| {
            format!(
                "failed to create script directory `{}`: {err}",
                self.script_dir.display()
            )
        })
    }
}

/// Full runtime configuration for one process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesyConfig {
    pub log: LogConfig,
    pub runner: RunnerConfig,
}

impl NotesyConfig {
    /// Builds a config from optional overrides, keeping defaults for `None`
    /// or blank values.
    pub fn from_overrides(
        log_level: Option<&str>,
        log_dir: Option<&Path>,
        program: Option<&Path>,
        script_dir: Option<&Path>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(level) = log_level.map(str::trim).filter(|value| !value.is_empty()) {
            config.log.level = level.to_string();
        }
        if let Some(dir) = non_empty_path(log_dir) {
            config.log.dir = dir;
        }
        if let Some(program) = non_empty_path(program) {
            config.runner.program = program;
        }
        if let Some(dir) = non_empty_path(script_dir) {
            config.runner.script_dir = dir;
        }
        config
    }
}

fn non_empty_path(value: Option<&Path>) -> Option<PathBuf> {
    value
        .filter(|path| !path.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
