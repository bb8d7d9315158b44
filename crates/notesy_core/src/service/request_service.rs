//! Note request use-case service.

use crate::gateway::{ExecutionError, ScriptRunner};
use crate::model::command::NoteCommand;
use crate::parser::parse_note_request;
use crate::script::generate_script;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Failure of one pipeline run.
#[derive(Debug)]
pub enum ServiceError {
    /// No rule matched, or a matched rule failed validation.
    Unrecognized,
    /// The generated script failed to run.
    Execution(ExecutionError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "could not understand the request"),
            Self::Execution(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unrecognized => None,
            Self::Execution(err) => Some(err),
        }
    }
}

impl From<ExecutionError> for ServiceError {
    fn from(value: ExecutionError) -> Self {
        Self::Execution(value)
    }
}

/// Successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteOutcome {
    pub command: NoteCommand,
    /// Script text handed to the runner.
    pub script: String,
    /// Raw runner stdout.
    pub output: String,
}

/// Pipeline facade over a script runner implementation.
pub struct NoteRequestService<R: ScriptRunner> {
    runner: R,
}

impl<R: ScriptRunner> NoteRequestService<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Parses text without executing anything.
    pub fn parse(&self, text: &str) -> Option<NoteCommand> {
        parse_note_request(text)
    }

    /// Parses, renders and runs one request.
    ///
    /// # Errors
    /// - `Unrecognized` when parsing yields no command.
    /// - `Execution` when the runner fails.
    pub fn process(&self, text: &str) -> Result<NoteOutcome, ServiceError> {
        let request_id = Uuid::new_v4();
        let Some(command) = self.parse(text) else {
            info!(
                "event=note_request module=service status=unrecognized request_id={} text_chars={}",
                request_id,
                text.chars().count()
            );
            return Err(ServiceError::Unrecognized);
        };

        let script = generate_script(&command);
        match self.runner.run_script(&script) {
            Ok(output) => {
                info!(
                    "event=note_request module=service status=ok request_id={} action={} title_chars={} output_len={}",
                    request_id,
                    command.action(),
                    command.title().chars().count(),
                    output.len()
                );
                Ok(NoteOutcome {
                    command,
                    script,
                    output,
                })
            }
            Err(err) => {
                warn!(
                    "event=note_request module=service status=error request_id={} action={} error_kind={}",
                    request_id,
                    command.action(),
                    execution_error_kind(&err)
                );
                Err(err.into())
            }
        }
    }
}

fn execution_error_kind(err: &ExecutionError) -> &'static str {
    match err {
        ExecutionError::WriteScript(_) => "write_script",
        ExecutionError::Spawn { .. } => "spawn",
        ExecutionError::Failed { .. } => "failed",
    }
}
