//! HTTP and MCP transports over the NotesY request pipeline.
//!
//! # Responsibility
//! - Adapt caller payloads to `NoteRequestService::process` and back.
//! - Keep blocking script execution off the async reactor.
//!
//! # Invariants
//! - Transports hold no request state; the shared service is immutable.
//! - No throttling: concurrent requests run concurrent executions.

pub mod error;
pub mod mcp;
pub mod routes;

use notesy_core::{NoteRequestService, ScriptRunner};
use std::sync::Arc;

/// Pipeline shared by every transport task.
pub type SharedService = Arc<NoteRequestService<Box<dyn ScriptRunner>>>;

/// Wraps a runner into the shared pipeline.
pub fn shared_service(runner: Box<dyn ScriptRunner>) -> SharedService {
    Arc::new(NoteRequestService::new(runner))
}

/// Listen address for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
