use std::fmt;

use thiserror::Error;

/// Why a submission produced no new answers.
///
/// The `Display` text is the message shown to the user. The first three
/// variants are raised locally before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a valid PDF URL")]
    EmptyDocument,
    #[error("Please enter at least one question")]
    NoQuestions,
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("Error processing document: {detail}")]
    Service { detail: String },
    #[error("Connection error: {message}")]
    Transport { message: String },
    #[error("An unexpected error occurred: {message}")]
    Unexpected { message: String },
}

impl SubmitError {
    /// Follow-up hint shown next to the error, if any.
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            SubmitError::Transport { .. } => Some(
                "Please ensure the analysis service is running and reachable at the configured address.",
            ),
            _ => None,
        }
    }
}

/// Non-blocking warning raised while preparing a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    NotLikelyPdf,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NotLikelyPdf => write!(
                f,
                "The URL doesn't appear to point to a PDF file. Please ensure it's a valid PDF URL."
            ),
        }
    }
}

/// Failure reported by an `AnalysisService` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceFailure {
    /// Non-success status with the service's own explanation.
    #[error("service rejected the request (status {status}): {detail}")]
    Rejected { status: u16, detail: String },
    /// Unreachable, connection dropped or timed out.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Anything else, e.g. an unreadable response body.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl From<ServiceFailure> for SubmitError {
    fn from(failure: ServiceFailure) -> Self {
        match failure {
            ServiceFailure::Rejected { detail, .. } => SubmitError::Service { detail },
            ServiceFailure::Transport(message) => SubmitError::Transport { message },
            ServiceFailure::Unexpected(message) => SubmitError::Unexpected { message },
        }
    }
}
