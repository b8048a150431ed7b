use std::time::Duration;

use podsum_logging::podsum_info;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{extract_detail, ProcessPodcastRequest, SummaryListResponse, SummaryRecord};
use crate::{ApiError, FailureKind, SummaryId};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Covers the whole extract/transcribe/summarize pipeline on the server.
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// The backend that extracts, transcribes, summarizes, and keeps history.
#[async_trait::async_trait]
pub trait SummaryApi: Send + Sync {
    async fn submit_podcast(&self, url: &str) -> Result<SummaryRecord, ApiError>;

    /// Stored summaries in server order. Entries carry no transcript.
    async fn list_summaries(&self) -> Result<Vec<SummaryRecord>, ApiError>;

    async fn get_summary(&self, id: SummaryId) -> Result<SummaryRecord, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSummaryApi {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestSummaryApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidRequest, err.to_string()))?;
        // `join` replaces the last segment unless the path ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::InvalidRequest, err.to_string()))?;

        Ok(Self { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidRequest, err.to_string()))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    detail: extract_detail(&body),
                },
                status.to_string(),
            ));
        }

        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SummaryApi for ReqwestSummaryApi {
    async fn submit_podcast(&self, url: &str) -> Result<SummaryRecord, ApiError> {
        let endpoint = self.endpoint("process-podcast")?;
        let body = serde_json::to_vec(&ProcessPodcastRequest { url })
            .map_err(|err| ApiError::new(FailureKind::InvalidRequest, err.to_string()))?;
        podsum_info!("POST {} url_len={}", endpoint, url.len());

        let request = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send_json(request).await
    }

    async fn list_summaries(&self) -> Result<Vec<SummaryRecord>, ApiError> {
        let endpoint = self.endpoint("summaries")?;
        podsum_info!("GET {}", endpoint);
        let list: SummaryListResponse = self.send_json(self.client.get(endpoint)).await?;
        Ok(list.summaries)
    }

    async fn get_summary(&self, id: SummaryId) -> Result<SummaryRecord, ApiError> {
        let endpoint = self.endpoint(&format!("summaries/{id}"))?;
        podsum_info!("GET {}", endpoint);
        self.send_json(self.client.get(endpoint)).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidRequest, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
