use std::time::Duration;

use crate::{CrawlStatus, Msg, StatusReport, StatusUpdate};

/// Tracking epoch. Ticks and responses tagged with an older value are dropped.
pub type Generation = u64;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorPhase {
    #[default]
    Idle,
    /// Start call in flight.
    Submitting,
    Polling,
    Completed,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    status: CrawlStatus,
    results: Vec<String>,
    phase: MonitorPhase,
    generation: Generation,
    timer_armed: bool,
    poll_in_flight: bool,
    poll_interval: Duration,
    dirty: bool,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::with_poll_interval(DEFAULT_POLL_INTERVAL)
    }
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            status: CrawlStatus::Idle,
            results: Vec::new(),
            phase: MonitorPhase::Idle,
            generation: 0,
            timer_armed: false,
            poll_in_flight: false,
            poll_interval,
            dirty: false,
        }
    }

    pub fn snapshot(&self) -> StatusUpdate {
        StatusUpdate {
            status: self.status.clone(),
            results: self.results.clone(),
        }
    }

    pub fn status(&self) -> &CrawlStatus {
        &self.status
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn phase(&self) -> MonitorPhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer_armed
    }

    pub fn is_poll_in_flight(&self) -> bool {
        self.poll_in_flight
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns whether anything observable changed since the last call, then clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Whether `msg` belongs to a session that has since been replaced, cancelled, or
    /// reset. Untagged commands are never stale.
    pub fn is_stale(&self, msg: &Msg) -> bool {
        msg.generation()
            .is_some_and(|generation| generation != self.generation)
    }

    pub(crate) fn reject_request(&mut self, message: String) {
        self.set_status(CrawlStatus::Error(message));
    }

    /// Invalidates any running session and enters `Submitting`.
    /// Returns the new generation and whether a timer had to be disarmed.
    pub(crate) fn begin_submit(&mut self) -> (Generation, bool) {
        let was_armed = self.stop_session();
        self.phase = MonitorPhase::Submitting;
        self.set_status(CrawlStatus::Starting);
        self.set_results(Vec::new());
        (self.generation, was_armed)
    }

    pub(crate) fn fail_submit(&mut self, message: &str) {
        self.phase = MonitorPhase::Errored;
        self.set_status(CrawlStatus::Error(format!(
            "Error starting crawl: {message}"
        )));
    }

    /// Starts a fresh polling session. Results from any earlier job are dropped.
    pub(crate) fn begin_tracking(&mut self) -> Generation {
        self.stop_session();
        self.phase = MonitorPhase::Polling;
        self.timer_armed = true;
        self.set_results(Vec::new());
        self.generation
    }

    pub(crate) fn begin_poll(&mut self) {
        self.poll_in_flight = true;
    }

    /// Applies a status report. Returns `true` when the report is terminal.
    pub(crate) fn apply_report(&mut self, report: StatusReport) -> bool {
        self.poll_in_flight = false;
        let status = CrawlStatus::from_remote(&report.status);
        if let Some(results) = report.results {
            self.set_results(results);
        }
        let terminal = match status {
            CrawlStatus::Completed => Some(MonitorPhase::Completed),
            CrawlStatus::Idle => Some(MonitorPhase::Idle),
            _ => None,
        };
        self.set_status(status);
        if let Some(phase) = terminal {
            self.phase = phase;
            self.timer_armed = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn fail_poll(&mut self, message: &str) {
        self.poll_in_flight = false;
        self.phase = MonitorPhase::Errored;
        self.timer_armed = false;
        self.set_status(CrawlStatus::Error(format!(
            "Error fetching status: {message}"
        )));
    }

    /// Stops future ticks. Returns whether a timer was armed.
    ///
    /// A displayed poll result is kept. Cancelling while the start call is still in
    /// flight drops the `Starting` indicator back to `Idle`, since the late answer
    /// will be discarded and nothing else would ever replace it.
    pub(crate) fn cancel(&mut self) -> bool {
        let was_submitting = self.phase == MonitorPhase::Submitting;
        if !self.timer_armed && !was_submitting {
            return false;
        }
        let was_armed = self.stop_session();
        self.phase = MonitorPhase::Idle;
        if was_submitting {
            self.set_status(CrawlStatus::Idle);
        }
        self.dirty = true;
        was_armed
    }

    pub(crate) fn reset(&mut self) -> bool {
        let was_armed = self.cancel();
        self.phase = MonitorPhase::Idle;
        self.set_status(CrawlStatus::Idle);
        self.set_results(Vec::new());
        was_armed
    }

    /// Bumps the generation so every outstanding tick and response becomes stale.
    fn stop_session(&mut self) -> bool {
        let was_armed = self.timer_armed;
        self.generation += 1;
        self.timer_armed = false;
        self.poll_in_flight = false;
        was_armed
    }

    fn set_status(&mut self, status: CrawlStatus) {
        if self.status != status {
            self.status = status;
            self.dirty = true;
        }
    }

    fn set_results(&mut self, results: Vec<String>) {
        if self.results != results {
            self.results = results;
            self.dirty = true;
        }
    }
}
