use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notesy_core::{ExecutionError, ServiceError, SUPPORTED_FORMATS};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One rejected field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub code: &'static str,
    pub path: Vec<String>,
    pub message: String,
}

impl FieldIssue {
    pub fn new(code: &'static str, path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(Vec<FieldIssue>),
    #[error("Could not understand the request")]
    Unrecognized,
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Unrecognized => Self::Unrecognized,
            ServiceError::Execution(err) => Self::Execution(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "details": details }),
            ),
            ApiError::Unrecognized => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "supportedFormats": SUPPORTED_FORMATS }),
            ),
            ApiError::Execution(_) | ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
