use std::sync::Arc;

use doclens_core::{AnalysisService, RequestPayload, ServiceFailure};
use thiserror::Error;

use crate::client::{AnalysisClient, ClientSettings, ReqwestAnalysisClient};
use crate::{AnalysisError, AnalysisRequest, AnalysisResponse};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] AnalysisError),
}

/// Blocking front for an async `AnalysisClient`.
///
/// Owns its own runtime, so it must be called from outside any async context.
pub struct EngineHandle {
    runtime: tokio::runtime::Runtime,
    client: Arc<dyn AnalysisClient>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestAnalysisClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn AnalysisClient>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self { runtime, client })
    }
}

impl AnalysisService for EngineHandle {
    fn analyze(&self, payload: &RequestPayload) -> Result<Vec<String>, ServiceFailure> {
        let request = AnalysisRequest::from(payload);
        let client = self.client.clone();
        self.runtime
            .block_on(async move { client.analyze(&request).await })
            .map(AnalysisResponse::into_answers)
            .map_err(ServiceFailure::from)
    }
}
