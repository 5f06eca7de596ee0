use std::fmt;

use serde::Deserialize;

/// Client-side view of the remote job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CrawlStatus {
    #[default]
    Idle,
    /// Set as soon as a request is submitted, before the first poll returns.
    Starting,
    /// Any non-terminal status string reported by the server, kept verbatim.
    Running(String),
    Completed,
    Error(String),
}

impl CrawlStatus {
    pub(crate) fn from_remote(label: &str) -> Self {
        match label {
            "Idle" => CrawlStatus::Idle,
            "Completed" => CrawlStatus::Completed,
            other => CrawlStatus::Running(other.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CrawlStatus::Idle | CrawlStatus::Completed | CrawlStatus::Error(_)
        )
    }
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlStatus::Idle => write!(f, "Idle"),
            CrawlStatus::Starting => write!(f, "Starting crawl..."),
            CrawlStatus::Running(label) => write!(f, "{label}"),
            CrawlStatus::Completed => write!(f, "Completed"),
            CrawlStatus::Error(message) => write!(f, "{message}"),
        }
    }
}

/// Body of `GET /api/crawl/status`.
///
/// `results`, when present, is the full list so far, not a delta.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusReport {
    pub status: String,
    #[serde(default)]
    pub results: Option<Vec<String>>,
}

impl StatusReport {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            results: None,
        }
    }

    pub fn with_results<I, S>(mut self, results: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.results = Some(results.into_iter().map(Into::into).collect());
        self
    }
}

/// Value published to consumers after every observable change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusUpdate {
    pub status: CrawlStatus,
    pub results: Vec<String>,
}
