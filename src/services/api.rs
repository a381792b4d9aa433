//! HTTP client for the remote scanning service.
//!
//! The service is the only place files are hashed and compared; this module just
//! ships `{folder}` bodies and turns answers into domain results or `FimError`s.

use crate::domain::constants::{
    CHECK_FALLBACK_MESSAGE, CHECK_PATH, HEALTH_OK_STATUS, HEALTH_PATH, INIT_BASELINE_PATH,
    INIT_FALLBACK_MESSAGE, SUCCESS_STATUS,
};
use crate::domain::errors::FimError;
use crate::domain::models::{
    BaselineResult, CheckResponse, FolderRequest, HealthResponse, HealthStatus,
    InitBaselineResponse, IntegrityReport, ScanTarget,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Request/response contract of the scanning service.
///
/// Futures are not `Send`: workflows run on a single-threaded `LocalSet`.
#[async_trait(?Send)]
pub trait ScanService {
    async fn init_baseline(&self, target: &ScanTarget) -> Result<BaselineResult, FimError>;
    async fn check(&self, target: &ScanTarget) -> Result<IntegrityReport, FimError>;
    async fn health(&self) -> Result<HealthStatus, FimError>;
}

pub struct HttpScanService {
    client: reqwest::Client,
    base: String,
}

impl HttpScanService {
    pub fn new(api_base: &str) -> anyhow::Result<Self> {
        // No request timeout: calls wait on the transport's own behavior.
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    async fn post_folder(
        &self,
        path: &str,
        target: &ScanTarget,
        fallback: &str,
    ) -> Result<Value, FimError> {
        let url = self.endpoint(path);
        debug!(%url, folder = %target, "posting scan request");
        let resp = self
            .client
            .post(&url)
            .json(&FolderRequest {
                folder: target.as_str(),
            })
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_json(resp).await?;
        debug!(%url, status = status.as_u16(), "scan request answered");
        accept_payload(status, body, SUCCESS_STATUS, fallback)
    }
}

#[async_trait(?Send)]
impl ScanService for HttpScanService {
    async fn init_baseline(&self, target: &ScanTarget) -> Result<BaselineResult, FimError> {
        let body = self
            .post_folder(INIT_BASELINE_PATH, target, INIT_FALLBACK_MESSAGE)
            .await?;
        let parsed: InitBaselineResponse = decode(body)?;
        Ok(BaselineResult {
            folder: target.as_str().to_string(),
            files_scanned: parsed.files_scanned,
            message: parsed.message,
        })
    }

    async fn check(&self, target: &ScanTarget) -> Result<IntegrityReport, FimError> {
        let body = self
            .post_folder(CHECK_PATH, target, CHECK_FALLBACK_MESSAGE)
            .await?;
        let parsed: CheckResponse = decode(body)?;
        Ok(IntegrityReport {
            folder: target.as_str().to_string(),
            timestamp: parsed.timestamp,
            total_files: parsed.total_files,
            unchanged_count: parsed.unchanged_count,
            modified: parsed.modified,
            added: parsed.added,
            deleted: parsed.deleted,
        })
    }

    async fn health(&self) -> Result<HealthStatus, FimError> {
        let url = self.endpoint(HEALTH_PATH);
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        let (status, body) = read_json(resp).await?;
        let body = accept_payload(status, body, HEALTH_OK_STATUS, "unexpected health status")?;
        let parsed: HealthResponse = decode(body)?;
        Ok(HealthStatus {
            status: parsed.status,
            message: parsed.message,
        })
    }
}

async fn read_json(resp: reqwest::Response) -> Result<(StatusCode, Value), FimError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(transport)?;
    let body = serde_json::from_slice(&bytes).map_err(|e| {
        FimError::Transport(format!(
            "invalid JSON response (HTTP {}): {}",
            status.as_u16(),
            e
        ))
    })?;
    Ok((status, body))
}

/// A body is accepted only on a 2xx code with the expected `status` field.
/// Anything else fails with the server's `message`, or `fallback` when it is
/// missing or empty.
pub fn accept_payload(
    status: StatusCode,
    body: Value,
    expected: &str,
    fallback: &str,
) -> Result<Value, FimError> {
    if status.is_success() && body.get("status").and_then(Value::as_str) == Some(expected) {
        return Ok(body);
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback);
    Err(FimError::ServerReportedFailure(message.to_string()))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, FimError> {
    serde_json::from_value(body)
        .map_err(|e| FimError::Transport(format!("malformed response: {}", e)))
}

fn transport(err: reqwest::Error) -> FimError {
    FimError::Transport(err.to_string())
}
