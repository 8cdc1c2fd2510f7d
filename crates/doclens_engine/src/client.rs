use std::time::Duration;

use doclens_logging::{doclens_debug, doclens_trace, doclens_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::types::{ErrorBody, UNKNOWN_ERROR_DETAIL};
use crate::{AnalysisError, AnalysisRequest, AnalysisResponse, FailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Full address of the analysis endpoint. `None` until configured.
    pub endpoint: Option<String>,
    pub connect_timeout: Duration,
    /// Budget for the whole call, body included.
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_response_bytes: 4 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AnalysisError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> Result<reqwest::Url, AnalysisError> {
        let raw = self
            .settings
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| {
                AnalysisError::new(FailureKind::NotConfigured, "set BACKEND_DOCLENS_API_URL")
            })?;
        reqwest::Url::parse(raw)
            .map_err(|err| AnalysisError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, AnalysisError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        let endpoint = self.endpoint()?;
        let body = serde_json::to_vec(request)
            .map_err(|err| AnalysisError::new(FailureKind::MalformedBody, err.to_string()))?;

        doclens_debug!(
            "POST {} questions={} body_len={}",
            endpoint,
            request.questions.len(),
            body.len()
        );
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        doclens_debug!("Analysis service replied with {}", status);
        let body = self.read_body(response).await;

        // Only a plain 200 counts as success.
        if status != StatusCode::OK {
            let detail = match body {
                Ok(bytes) => ErrorBody::detail_from(&bytes)?,
                Err(AnalysisError {
                    kind: FailureKind::TooLarge { actual, .. },
                    ..
                }) => {
                    doclens_warn!("Ignoring oversized error body ({:?} bytes)", actual);
                    UNKNOWN_ERROR_DETAIL.to_string()
                }
                Err(err) => return Err(err),
            };
            doclens_warn!("Analysis service returned {}: {}", status, detail);
            return Err(AnalysisError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    detail: detail.clone(),
                },
                detail,
            ));
        }

        let bytes = body?;
        doclens_trace!("Response body is {} bytes", bytes.len());
        serde_json::from_slice(&bytes)
            .map_err(|err| AnalysisError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> AnalysisError {
    AnalysisError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisError {
    if err.is_timeout() {
        return AnalysisError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return AnalysisError::new(FailureKind::MalformedBody, err.to_string());
    }
    AnalysisError::new(FailureKind::Network, err.to_string())
}
