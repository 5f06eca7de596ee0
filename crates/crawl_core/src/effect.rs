use std::time::Duration;

use crate::{CrawlRequest, Generation};

/// Side effects requested by [`crate::update`]; executed by the client runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `POST /api/crawl/start` once.
    Submit {
        generation: Generation,
        request: CrawlRequest,
    },
    /// Replace the poll timer with one ticking for `generation`.
    ArmTimer {
        generation: Generation,
        interval: Duration,
    },
    DisarmTimer,
    /// Issue one `GET /api/crawl/status`.
    Poll { generation: Generation },
}
