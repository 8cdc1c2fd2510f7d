use std::fmt;

use doclens_core::{RequestPayload, ServiceFailure};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Substituted when an error response carries no `detail`.
pub(crate) const UNKNOWN_ERROR_DETAIL: &str = "Unknown error occurred";

/// Request body sent to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub documents: String,
    pub questions: Vec<String>,
}

impl From<&RequestPayload> for AnalysisRequest {
    fn from(payload: &RequestPayload) -> Self {
        Self {
            documents: payload.document.clone(),
            questions: payload.questions.clone(),
        }
    }
}

/// Success body. A missing or null `answers` field means no answers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub answers: Option<Vec<String>>,
}

impl AnalysisResponse {
    pub fn into_answers(self) -> Vec<String> {
        self.answers.unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Extracts the service's explanation from an error body.
    ///
    /// String details are returned as-is; structured ones (validation error
    /// lists) are rendered as compact JSON. A body that is not JSON at all is
    /// a `MalformedBody` failure.
    pub(crate) fn detail_from(bytes: &[u8]) -> Result<String, AnalysisError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|err| AnalysisError::new(FailureKind::MalformedBody, err.to_string()))?;
        let body: ErrorBody = serde_json::from_value(value).unwrap_or_default();
        Ok(match body.detail {
            Some(serde_json::Value::String(detail)) => detail,
            Some(serde_json::Value::Null) | None => UNKNOWN_ERROR_DETAIL.to_string(),
            Some(other) => other.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct AnalysisError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalysisError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    NotConfigured,
    InvalidEndpoint,
    HttpStatus { status: u16, detail: String },
    Timeout,
    Network,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NotConfigured => write!(f, "analysis service address is not configured"),
            FailureKind::InvalidEndpoint => write!(f, "invalid analysis service address"),
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}

impl From<AnalysisError> for ServiceFailure {
    fn from(err: AnalysisError) -> Self {
        match err.kind {
            FailureKind::HttpStatus { status, detail } => ServiceFailure::Rejected { status, detail },
            FailureKind::NotConfigured
            | FailureKind::InvalidEndpoint
            | FailureKind::Timeout
            | FailureKind::Network
            | FailureKind::MalformedBody => ServiceFailure::Transport(err.to_string()),
            FailureKind::TooLarge { .. } => ServiceFailure::Unexpected(err.to_string()),
        }
    }
}
