use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;
use tracing::warn;

use crate::data_provider::FeedProvider;
use crate::tui::action::Action;

/// Poll the feed provider on a fixed interval and push the result into the
/// action channel. Runs until the receiving side (the dashboard) goes away.
/// Fetch failures become `FeedError` actions; the loop itself never dies
/// on a bad poll.
pub async fn poll_feed(
    provider: Arc<dyn FeedProvider>,
    tx: mpsc::UnboundedSender<Action>,
    interval_secs: u32,
) {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1) as u64));
    loop {
        ticker.tick().await;
        let action = match provider.snapshot().await {
            Ok(snapshot) => Action::SnapshotUpdated {
                snapshot: Arc::new(snapshot),
                fetched_at: SystemTime::now(),
            },
            Err(e) => {
                warn!("feed poll failed: {:#}", e);
                Action::FeedError(format!("{:#}", e))
            }
        };
        if tx.send(action).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::{FileFeed, MockFeed};

    #[tokio::test]
    async fn test_poll_feed_delivers_snapshots() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let poller = tokio::spawn(poll_feed(Arc::new(MockFeed::new()), tx, 1));

        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::SnapshotUpdated { .. }));
        poller.abort();
    }

    #[tokio::test]
    async fn test_poll_feed_reports_errors_and_keeps_going() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let provider = Arc::new(FileFeed::new("/nonexistent/feed.json"));
        let poller = tokio::spawn(poll_feed(provider, tx, 1));

        assert!(matches!(rx.recv().await.unwrap(), Action::FeedError(_)));
        // A second error arrives: the loop survived the first failure.
        assert!(matches!(rx.recv().await.unwrap(), Action::FeedError(_)));
        poller.abort();
    }

    #[tokio::test]
    async fn test_poll_feed_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        // Returns instead of spinning forever once the channel is closed.
        poll_feed(Arc::new(MockFeed::new()), tx, 1).await;
    }
}
