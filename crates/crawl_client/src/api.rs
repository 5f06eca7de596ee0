use crawl_core::{CrawlRequest, StatusReport};
use reqwest::header::CONTENT_TYPE;

use crate::{ClientError, ClientSettings, PollError, StartAck, SubmitError};

pub const START_PATH: &str = "/api/crawl/start";
pub const STATUS_PATH: &str = "/api/crawl/status";

/// The two crawl-control endpoints. Implementations never retry.
#[async_trait::async_trait]
pub trait CrawlApi: Send + Sync {
    async fn start(&self, request: &CrawlRequest) -> Result<StartAck, SubmitError>;

    async fn status(&self) -> Result<StatusReport, PollError>;
}

#[derive(Debug, Clone)]
pub struct HttpCrawlApi {
    client: reqwest::Client,
    start_url: String,
    status_url: String,
}

impl HttpCrawlApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let base = reqwest::Url::parse(&settings.base_url).map_err(|err| {
            ClientError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: err.to_string(),
            }
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: "url cannot be a base".into(),
            });
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;

        let origin = base.as_str().trim_end_matches('/');
        Ok(Self {
            client,
            start_url: format!("{origin}{START_PATH}"),
            status_url: format!("{origin}{STATUS_PATH}"),
        })
    }
}

#[async_trait::async_trait]
impl CrawlApi for HttpCrawlApi {
    async fn start(&self, request: &CrawlRequest) -> Result<StartAck, SubmitError> {
        let body =
            serde_json::to_vec(request).map_err(|err| SubmitError::Body(err.to_string()))?;

        let response = self
            .client
            .post(&self.start_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_submit_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        let message = response.text().await.map_err(map_submit_error)?;
        Ok(StartAck { message })
    }

    async fn status(&self) -> Result<StatusReport, PollError> {
        let response = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .map_err(map_poll_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_poll_error)?;
        serde_json::from_slice(&bytes).map_err(|err| PollError::Decode(err.to_string()))
    }
}

fn map_submit_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::Timeout;
    }
    SubmitError::Transport(err.to_string())
}

fn map_poll_error(err: reqwest::Error) -> PollError {
    if err.is_timeout() {
        return PollError::Timeout;
    }
    PollError::Transport(err.to_string())
}
