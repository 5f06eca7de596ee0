use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crawl_core::{update, CrawlRequest, Effect, Generation, MonitorState, Msg};
use crawl_logging::{crawl_debug, crawl_info, crawl_trace, crawl_warn};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientSettings, CrawlApi, JobSubmitter, StatusSink};

/// Handle to the monitor task that owns the job lifecycle.
///
/// All state lives in one task fed by a single message queue, so ticks, poll
/// answers, and user commands are applied strictly one at a time. Dropping the
/// handle cancels polling and stops the task.
pub struct StatusMonitor {
    cmd_tx: mpsc::UnboundedSender<Msg>,
    live_timers: Arc<AtomicUsize>,
}

impl StatusMonitor {
    /// Spawns the monitor task. Must be called inside a tokio runtime.
    ///
    /// Fails without spawning anything when `settings` is invalid, e.g. a zero poll
    /// interval.
    pub fn spawn(
        api: Arc<dyn CrawlApi>,
        settings: &ClientSettings,
        sink: Arc<dyn StatusSink>,
    ) -> Result<Self, ClientError> {
        settings.validate()?;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let live_timers = Arc::new(AtomicUsize::new(0));

        let driver = MonitorDriver {
            state: MonitorState::with_poll_interval(settings.poll_interval),
            submitter: JobSubmitter::new(api.clone()),
            api,
            sink,
            session: None,
            event_tx,
            live_timers: live_timers.clone(),
        };
        tokio::spawn(driver.run(cmd_rx, event_rx));

        Ok(Self {
            cmd_tx,
            live_timers,
        })
    }

    /// Submits `request`; tracking starts once the server accepts it.
    pub fn start(&self, request: CrawlRequest) {
        self.send(Msg::StartRequested(request));
    }

    /// Starts polling the ambient job, replacing any earlier poll session.
    pub fn track(&self) {
        self.send(Msg::TrackRequested);
    }

    /// Stops future polls. Responses already in flight are discarded.
    pub fn cancel(&self) {
        self.send(Msg::CancelRequested);
    }

    /// Cancels and returns the displayed state to `Idle` with no results.
    pub fn reset(&self) {
        self.send(Msg::ResetRequested);
    }

    /// Number of poll timers currently alive. Never exceeds one.
    pub fn live_timers(&self) -> usize {
        self.live_timers.load(Ordering::SeqCst)
    }

    fn send(&self, msg: Msg) {
        if self.cmd_tx.send(msg).is_err() {
            crawl_warn!("Status monitor task is gone; command dropped");
        }
    }
}

struct MonitorDriver {
    state: MonitorState,
    api: Arc<dyn CrawlApi>,
    submitter: JobSubmitter,
    sink: Arc<dyn StatusSink>,
    session: Option<PollSession>,
    event_tx: mpsc::UnboundedSender<Msg>,
    live_timers: Arc<AtomicUsize>,
}

impl MonitorDriver {
    async fn run(
        mut self,
        mut cmd_rx: mpsc::UnboundedReceiver<Msg>,
        mut event_rx: mpsc::UnboundedReceiver<Msg>,
    ) {
        loop {
            let msg = tokio::select! {
                biased;
                cmd = cmd_rx.recv() => match cmd {
                    Some(msg) => msg,
                    None => break,
                },
                Some(event) = event_rx.recv() => event,
            };
            self.dispatch(msg);
        }

        crawl_debug!("Status monitor handle dropped; shutting down");
        self.disarm();
    }

    fn dispatch(&mut self, msg: Msg) {
        if self.state.is_stale(&msg) {
            self.log_stale(&msg);
        } else {
            match &msg {
                Msg::CancelRequested => crawl_info!("Cancel requested"),
                Msg::ResetRequested => crawl_info!("Reset requested"),
                Msg::PollFailed { message, .. } => crawl_warn!("Status poll failed: {}", message),
                Msg::SubmitFailed { message, .. } => {
                    crawl_warn!("Crawl submit failed: {}", message)
                }
                _ => {}
            }
        }

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for effect in effects {
            self.execute(effect);
        }

        if self.state.consume_dirty() {
            let snapshot = self.state.snapshot();
            crawl_info!(
                "Status: {} | URLs: {}",
                snapshot.status,
                snapshot.results.len()
            );
            self.sink.publish(snapshot);
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Submit {
                generation,
                request,
            } => {
                let submitter = self.submitter.clone();
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let msg = match submitter.submit(&request).await {
                        Ok(ack) => Msg::SubmitSucceeded {
                            generation,
                            message: ack.message,
                        },
                        Err(err) => Msg::SubmitFailed {
                            generation,
                            message: err.to_string(),
                        },
                    };
                    let _ = event_tx.send(msg);
                });
            }
            Effect::ArmTimer {
                generation,
                interval,
            } => {
                // Clear before set: the old session must be gone before a new one exists.
                self.disarm();
                crawl_info!(
                    "Polling started generation={} interval_ms={}",
                    generation,
                    interval.as_millis()
                );
                self.session = Some(PollSession::arm(
                    generation,
                    interval,
                    self.event_tx.clone(),
                    self.live_timers.clone(),
                ));
            }
            Effect::DisarmTimer => self.disarm(),
            Effect::Poll { generation } => {
                crawl_debug!("Polling status generation={}", generation);
                let api = self.api.clone();
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let msg = match api.status().await {
                        Ok(report) => Msg::PollSucceeded { generation, report },
                        Err(err) => Msg::PollFailed {
                            generation,
                            message: err.to_string(),
                        },
                    };
                    let _ = event_tx.send(msg);
                });
            }
        }
    }

    fn log_stale(&self, msg: &Msg) {
        let generation = msg.generation().unwrap_or_default();
        let current = self.state.generation();
        match msg {
            // A tick from the session just replaced; the ticker is already cancelled.
            Msg::PollTick { .. } => crawl_debug!(
                "Dropping stale tick generation={} current={}",
                generation,
                current
            ),
            _ => crawl_warn!(
                "Discarding stale response generation={} current={}",
                generation,
                current
            ),
        }
    }

    fn disarm(&mut self) {
        if let Some(session) = self.session.take() {
            crawl_info!("Polling stopped generation={}", session.generation);
        }
    }
}

/// The one repeating timer. Dropping it stops the ticker task.
struct PollSession {
    generation: Generation,
    cancel: CancellationToken,
    live_timers: Arc<AtomicUsize>,
}

impl PollSession {
    fn arm(
        generation: Generation,
        interval: Duration,
        event_tx: mpsc::UnboundedSender<Msg>,
        live_timers: Arc<AtomicUsize>,
    ) -> Self {
        debug_assert!(!interval.is_zero(), "settings are validated on spawn");
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        live_timers.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            // First tick completes immediately.
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        crawl_trace!("Poll tick generation={}", generation);
                        if event_tx.send(Msg::PollTick { generation }).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            generation,
            cancel,
            live_timers,
        }
    }
}

impl Drop for PollSession {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.live_timers.fetch_sub(1, Ordering::SeqCst);
    }
}
