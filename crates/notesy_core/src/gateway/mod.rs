//! Out-of-process script execution.
//!
//! # Responsibility
//! - Define the `ScriptRunner` seam between the pipeline and the OS.
//! - Provide the `osascript`-backed runner used in production.
//!
//! # Invariants
//! - Runners never retry; a failure carries the captured diagnostics.
//! - Runs block the calling thread and impose no timeout.

mod osascript;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

pub use osascript::OsaScriptRunner;

/// Result type for script execution.
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// Failure while handing a script to the automation host.
#[derive(Debug)]
pub enum ExecutionError {
    /// Script text could not be written to a temp file.
    WriteScript(std::io::Error),
    /// Interpreter process could not be started.
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    /// Interpreter exited unsuccessfully.
    Failed { status: Option<i32>, stderr: String },
}

impl Display for ExecutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteScript(err) => write!(f, "Error writing script: {err}"),
            Self::Spawn { program, source } => {
                write!(f, "failed to launch `{}`: {source}", program.display())
            }
            Self::Failed { stderr, .. } => write!(f, "AppleScript execution error: {stderr}"),
        }
    }
}

impl Error for ExecutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WriteScript(err) => Some(err),
            Self::Spawn { source, .. } => Some(source),
            Self::Failed { .. } => None,
        }
    }
}

/// Executes generated script text and returns captured stdout.
pub trait ScriptRunner: Send + Sync {
    fn run_script(&self, script: &str) -> ExecutionResult<String>;
}

impl<T: ScriptRunner + ?Sized> ScriptRunner for Box<T> {
    fn run_script(&self, script: &str) -> ExecutionResult<String> {
        (**self).run_script(script)
    }
}

impl<T: ScriptRunner + ?Sized> ScriptRunner for Arc<T> {
    fn run_script(&self, script: &str) -> ExecutionResult<String> {
        (**self).run_script(script)
    }
}
