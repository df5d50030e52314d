//! Feed snapshot providers, abstracting over file-backed sources and the
//! scripted demo implementation.

use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::feed::Snapshot;
use crate::fixtures;

/// Source of live-game snapshots. Each poll returns the full document;
/// the dashboard never patches, it replaces.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    async fn snapshot(&self) -> anyhow::Result<Snapshot>;
}

/// Reads the snapshot document from a JSON file on every poll.
///
/// This is the transport boundary: anything that can keep a file up to date
/// (a curl cron job, a streaming sidecar) can drive the dashboard.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedProvider for FileFeed {
    async fn snapshot(&self) -> anyhow::Result<Snapshot> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read feed file {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse feed file {}", self.path.display()))?;
        Ok(snapshot)
    }
}

/// Deterministic scripted game used by demo mode. Each poll advances one
/// step through a fixed sequence of game states.
pub struct MockFeed {
    tick: Mutex<u32>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self {
            tick: Mutex::new(0),
        }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedProvider for MockFeed {
    async fn snapshot(&self) -> anyhow::Result<Snapshot> {
        let tick = {
            let mut guard = self.tick.lock().unwrap_or_else(|e| e.into_inner());
            let current = *guard;
            *guard += 1;
            current
        };
        Ok(fixtures::scripted_snapshot(tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_feed_advances_per_poll() {
        let feed = MockFeed::new();
        let first = feed.snapshot().await.unwrap();
        let second = feed.snapshot().await.unwrap();
        let first_inning = first.linescore.as_ref().and_then(|l| l.current_inning);
        let second_inning = second.linescore.as_ref().and_then(|l| l.current_inning);
        // The scripted game moves forward, never backward.
        assert!(second_inning >= first_inning);
    }

    #[tokio::test]
    async fn test_mock_feed_eventually_goes_final() {
        let feed = MockFeed::new();
        let mut last = feed.snapshot().await.unwrap();
        for _ in 0..40 {
            last = feed.snapshot().await.unwrap();
        }
        assert_eq!(
            last.status.as_ref().map(|s| s.detailed_state.as_str()),
            Some("Final")
        );
    }

    #[tokio::test]
    async fn test_file_feed_missing_file_is_error() {
        let feed = FileFeed::new("/nonexistent/feed.json");
        assert!(feed.snapshot().await.is_err());
    }

    #[tokio::test]
    async fn test_file_feed_reads_document() {
        let dir = std::env::temp_dir().join("mlb-file-feed-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feed.json");
        std::fs::write(&path, r#"{"status": {"detailedState": "Warmup"}}"#).unwrap();

        let feed = FileFeed::new(&path);
        let snapshot = feed.snapshot().await.unwrap();
        assert_eq!(snapshot.status.unwrap().detailed_state, "Warmup");
    }
}
