use std::time::Duration;

use crawl_core::DEFAULT_POLL_INTERVAL;

use crate::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Origin of the crawl-control server, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub poll_interval: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientSettings {
    /// Rejects settings the monitor cannot run with.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.poll_interval.is_zero() {
            return Err(ClientError::ZeroPollInterval);
        }
        Ok(())
    }
}
