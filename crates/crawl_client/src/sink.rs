use crawl_core::StatusUpdate;
use tokio::sync::mpsc;

/// Consumer of status updates. Called from the monitor task; must not block.
pub trait StatusSink: Send + Sync {
    fn publish(&self, update: StatusUpdate);
}

impl<F> StatusSink for F
where
    F: Fn(StatusUpdate) + Send + Sync,
{
    fn publish(&self, update: StatusUpdate) {
        self(update)
    }
}

pub struct ChannelStatusSink {
    tx: mpsc::UnboundedSender<StatusUpdate>,
}

impl ChannelStatusSink {
    pub fn new(tx: mpsc::UnboundedSender<StatusUpdate>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StatusUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl StatusSink for ChannelStatusSink {
    fn publish(&self, update: StatusUpdate) {
        let _ = self.tx.send(update);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crawl_core::CrawlStatus;

    use super::*;

    #[test]
    fn closures_are_sinks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let sink: Arc<dyn StatusSink> = Arc::new(move |update: StatusUpdate| {
            recorder.lock().unwrap().push(update.status);
        });

        sink.publish(StatusUpdate {
            status: CrawlStatus::Completed,
            results: Vec::new(),
        });
        assert_eq!(*seen.lock().unwrap(), vec![CrawlStatus::Completed]);
    }

    #[test]
    fn channel_sink_forwards_updates() {
        let (sink, mut rx) = ChannelStatusSink::channel();
        sink.publish(StatusUpdate::default());
        assert_eq!(rx.try_recv().ok(), Some(StatusUpdate::default()));
    }
}
