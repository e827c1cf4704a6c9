// ── Replace-on-refresh entity collection ──
//
// Holds the last-fetched snapshot of one entity type. Refresh replaces the
// whole collection atomically — no incremental merge, no diffing. Reads are
// cheap Arc clones; subscribers get new snapshots via `watch`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

/// The last-fetched collection for a single entity type.
///
/// Concurrent refreshes are tolerated, not prevented: whichever `replace`
/// lands last chronologically is the visible state. There is no request
/// de-duplication and no merge.
pub struct Collection<T: Clone + Send + Sync + 'static> {
    snapshot: watch::Sender<Arc<Vec<T>>>,
    refreshed_at: watch::Sender<Option<DateTime<Utc>>>,
}

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (refreshed_at, _) = watch::channel(None);
        Self {
            snapshot,
            refreshed_at,
        }
    }

    /// Atomically replace the whole collection with a fresh list result.
    pub fn replace(&self, items: Vec<T>) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(items));
        self.refreshed_at.send_modify(|t| *t = Some(Utc::now()));
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.snapshot.subscribe()
    }

    /// When the collection was last replaced, `None` before the first load.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        *self.refreshed_at.borrow()
    }

    pub fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_never_refreshed() {
        let col: Collection<String> = Collection::new();
        assert!(col.is_empty());
        assert!(col.refreshed_at().is_none());
    }

    #[test]
    fn replace_swaps_the_entire_snapshot() {
        let col: Collection<String> = Collection::new();
        col.replace(vec!["a".into(), "b".into()]);
        assert_eq!(col.len(), 2);

        col.replace(vec!["c".into()]);
        let snap = col.snapshot();
        assert_eq!(snap.as_slice(), ["c".to_owned()]);
        assert!(col.refreshed_at().is_some());
    }

    #[test]
    fn last_replace_wins() {
        let col: Collection<u32> = Collection::new();
        col.replace(vec![1, 2, 3]);
        col.replace(vec![9]);
        assert_eq!(col.snapshot().as_slice(), [9]);
    }

    #[tokio::test]
    async fn subscribers_see_new_snapshots() {
        let col: Collection<u32> = Collection::new();
        let mut rx = col.subscribe();

        col.replace(vec![7]);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_slice(), [7]);
    }

    #[test]
    fn old_snapshots_stay_valid_after_replace() {
        let col: Collection<u32> = Collection::new();
        col.replace(vec![1, 2]);
        let old = col.snapshot();
        col.replace(vec![3]);
        assert_eq!(old.as_slice(), [1, 2]);
    }
}
