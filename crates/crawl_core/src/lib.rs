//! Crawl core: pure job-lifecycle state machine.
mod effect;
mod msg;
mod request;
mod state;
mod status;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use request::{CrawlRequest, ValidationError};
pub use state::{Generation, MonitorPhase, MonitorState, DEFAULT_POLL_INTERVAL};
pub use status::{CrawlStatus, StatusReport, StatusUpdate};
pub use update::update;
