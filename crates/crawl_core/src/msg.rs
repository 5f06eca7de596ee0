use crate::{CrawlRequest, Generation, StatusReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked to start a crawl with these parameters.
    StartRequested(CrawlRequest),
    /// Start call returned 2xx.
    SubmitSucceeded {
        generation: Generation,
        message: String,
    },
    /// Start call failed (transport, non-2xx, unreadable body).
    SubmitFailed {
        generation: Generation,
        message: String,
    },
    /// Begin (or restart) tracking the ambient job.
    TrackRequested,
    /// Poll timer fired.
    PollTick { generation: Generation },
    /// Status call returned a report.
    PollSucceeded {
        generation: Generation,
        report: StatusReport,
    },
    /// Status call failed.
    PollFailed {
        generation: Generation,
        message: String,
    },
    /// Stop future ticks; keep the displayed status.
    CancelRequested,
    /// Stop future ticks and return to `Idle` with no results.
    ResetRequested,
    NoOp,
}

impl Msg {
    /// Session generation carried by timer ticks and response messages.
    /// User commands are untagged and return `None`.
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Msg::SubmitSucceeded { generation, .. }
            | Msg::SubmitFailed { generation, .. }
            | Msg::PollTick { generation }
            | Msg::PollSucceeded { generation, .. }
            | Msg::PollFailed { generation, .. } => Some(*generation),
            _ => None,
        }
    }
}
