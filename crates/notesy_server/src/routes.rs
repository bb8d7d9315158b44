//! `POST /process-note-request`.
//!
//! # Invariants
//! - Body validation happens before any parsing; bad bodies never reach the
//!   service.
//! - Script execution runs on the blocking pool.

use crate::error::{ApiError, FieldIssue};
use crate::{HttpConfig, SharedService};
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use log::{error, info, warn};
use notesy_core::Action;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone)]
pub struct AppState {
    pub service: SharedService,
}

impl AppState {
    pub fn new(service: SharedService) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessNoteResponse {
    pub success: bool,
    pub action: Action,
    pub title: String,
    pub result: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/process-note-request", post(process_note_request))
        .with_state(state)
}

/// Binds `config` and serves until the listener fails.
pub async fn serve_http(config: HttpConfig, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .inspect_err(|err| {
            error!(
                "event=http_bind module=routes status=error host={} port={} error={err}",
                config.host, config.port
            )
        })?;
    info!(
        "event=http_bind module=routes status=ok addr={}",
        listener.local_addr()?
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn process_note_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessNoteResponse>, ApiError> {
    let text = request_text(&body).inspect_err(|_| {
        warn!("event=http_request module=routes status=invalid_body body_len={}", body.len())
    })?;

    let service = state.service.clone();
    let outcome = tokio::task::spawn_blocking(move || service.process(&text))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))??;

    Ok(Json(ProcessNoteResponse {
        success: true,
        action: outcome.command.action(),
        title: outcome.command.title().to_string(),
        result: outcome.output,
    }))
}

fn request_text(body: &[u8]) -> Result<String, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        ApiError::Validation(vec![FieldIssue::new(
            "invalid_json",
            &[],
            format!("Malformed JSON body: {err}"),
        )])
    })?;

    let issue = match value.get("text") {
        Some(Value::String(text)) if !text.is_empty() => return Ok(text.clone()),
        Some(Value::String(_)) => FieldIssue::new(
            "too_small",
            &["text"],
            "String must contain at least 1 character(s)",
        ),
        Some(other) => FieldIssue::new(
            "invalid_type",
            &["text"],
            format!("Expected string, received {}", json_type_name(other)),
        ),
        None => FieldIssue::new("invalid_type", &["text"], "Required"),
    };
    Err(ApiError::Validation(vec![issue]))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
