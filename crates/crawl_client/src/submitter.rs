use std::sync::Arc;

use crawl_core::CrawlRequest;
use crawl_logging::{crawl_info, crawl_warn};

use crate::{CrawlApi, SubmitError};

/// Server acknowledgement of a start call; the body text as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartAck {
    pub message: String,
}

/// Validates a request and issues the single start call.
#[derive(Clone)]
pub struct JobSubmitter {
    api: Arc<dyn CrawlApi>,
}

impl JobSubmitter {
    pub fn new(api: Arc<dyn CrawlApi>) -> Self {
        Self { api }
    }

    /// Invalid requests fail with [`SubmitError::Validation`] before any network call.
    pub async fn submit(&self, request: &CrawlRequest) -> Result<StartAck, SubmitError> {
        request.validate()?;

        crawl_info!(
            "Submitting crawl url={} max_pages={} threads={} depth={}",
            request.start_url,
            request.max_pages,
            request.num_threads,
            request.max_depth
        );
        match self.api.start(request).await {
            Ok(ack) => {
                crawl_info!("Crawl accepted: {}", ack.message);
                Ok(ack)
            }
            Err(err) => {
                crawl_warn!("Crawl start failed: {}", err);
                Err(err)
            }
        }
    }
}
