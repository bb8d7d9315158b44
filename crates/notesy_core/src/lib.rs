//! Core intent parsing and script generation for NotesY.
//! Transports stay thin; every decision about what a sentence means lives here.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod parser;
pub mod script;
pub mod service;

pub use config::{LogConfig, NotesyConfig, RunnerConfig};
pub use gateway::{ExecutionError, ExecutionResult, OsaScriptRunner, ScriptRunner};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::command::{Action, CommandDraft, CommandValidationError, NoteCommand};
pub use parser::{classify, parse_note_request, ParsedIntent, RuleFamily};
pub use script::{generate_script, generate_script_for};
pub use service::reply::{
    format_tool_reply, unwrap_tool_text, SUPPORTED_FORMATS, TOOL_GUIDANCE,
};
pub use service::request_service::{NoteOutcome, NoteRequestService, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
