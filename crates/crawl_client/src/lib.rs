//! Crawl client: HTTP calls, job submission, and the polling runtime.
mod api;
mod error;
mod monitor;
mod settings;
mod sink;
mod submitter;

pub use api::{CrawlApi, HttpCrawlApi, START_PATH, STATUS_PATH};
pub use error::{ClientError, PollError, SubmitError};
pub use monitor::StatusMonitor;
pub use settings::ClientSettings;
pub use sink::{ChannelStatusSink, StatusSink};
pub use submitter::{JobSubmitter, StartAck};
