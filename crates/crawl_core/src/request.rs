use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Parameters for one server-side crawl run.
///
/// Serialized as `{ "url", "maxPages", "numThreads", "maxDepth" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRequest {
    #[serde(rename = "url")]
    pub start_url: String,
    pub max_pages: u32,
    pub num_threads: u32,
    pub max_depth: u32,
}

impl Default for CrawlRequest {
    fn default() -> Self {
        Self {
            start_url: String::new(),
            max_pages: 50,
            num_threads: 4,
            max_depth: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL.")]
    EmptyUrl,
    #[error("invalid start url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("max pages must be at least 1")]
    ZeroMaxPages,
    #[error("number of threads must be at least 1")]
    ZeroThreads,
}

impl CrawlRequest {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            ..Self::default()
        }
    }

    /// Checks the request locally. Nothing invalid ever reaches the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let raw = self.start_url.trim();
        if raw.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let parsed = Url::parse(raw).map_err(|err| ValidationError::InvalidUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;
        if !parsed.has_host() {
            return Err(ValidationError::InvalidUrl {
                url: raw.to_string(),
                reason: "url has no host".into(),
            });
        }
        if self.max_pages == 0 {
            return Err(ValidationError::ZeroMaxPages);
        }
        if self.num_threads == 0 {
            return Err(ValidationError::ZeroThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_url() {
        let request = CrawlRequest::new("https://example.com");
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_url() {
        assert_eq!(
            CrawlRequest::new("   ").validate(),
            Err(ValidationError::EmptyUrl)
        );
    }

    #[test]
    fn rejects_relative_and_hostless_urls() {
        assert!(matches!(
            CrawlRequest::new("example.com/about").validate(),
            Err(ValidationError::InvalidUrl { .. })
        ));
        assert!(matches!(
            CrawlRequest::new("mailto:someone@example.com").validate(),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_zero_counts_but_allows_zero_depth() {
        let request = CrawlRequest {
            max_pages: 0,
            ..CrawlRequest::new("https://example.com")
        };
        assert_eq!(request.validate(), Err(ValidationError::ZeroMaxPages));

        let request = CrawlRequest {
            num_threads: 0,
            ..CrawlRequest::new("https://example.com")
        };
        assert_eq!(request.validate(), Err(ValidationError::ZeroThreads));

        let request = CrawlRequest {
            max_depth: 0,
            ..CrawlRequest::new("https://example.com")
        };
        assert_eq!(request.validate(), Ok(()));
    }
}
