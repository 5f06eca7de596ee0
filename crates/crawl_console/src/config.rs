use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use crawl_client::{ClientError, ClientSettings};
use crawl_logging::crawl_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid settings: {0}")]
    Settings(#[from] ClientError),
}

/// Contents of `crawl_console.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub log: LogDestination,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let settings = ClientSettings::default();
        Self {
            base_url: settings.base_url,
            poll_interval_ms: millis(settings.poll_interval),
            connect_timeout_ms: millis(settings.connect_timeout),
            request_timeout_ms: millis(settings.request_timeout),
            log: LogDestination::File,
        }
    }
}

impl ConsoleConfig {
    /// Converts to client settings, rejecting values the monitor cannot run with.
    pub fn client_settings(&self) -> Result<ClientSettings, ConfigError> {
        let settings = ClientSettings {
            base_url: self.base_url.clone(),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Loads the config file; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(ConsoleConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    let config = ron::from_str(&content)?;
    crawl_info!("Loaded config from {:?}", path);
    Ok(config)
}
