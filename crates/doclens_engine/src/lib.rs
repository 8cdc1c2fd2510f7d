//! DocLens engine: HTTP client for the remote analysis service.
mod client;
mod engine;
mod types;

pub use client::{AnalysisClient, ClientSettings, ReqwestAnalysisClient};
pub use engine::{EngineError, EngineHandle};
pub use types::{AnalysisError, AnalysisRequest, AnalysisResponse, FailureKind};
