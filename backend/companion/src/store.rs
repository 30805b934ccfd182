//! Observable container for the companion's live state.
//!
//! Wraps a `tokio::sync::watch` channel so any front end can subscribe to
//! state changes without being tied to a particular rendering runtime.

use tokio::sync::watch;

use crate::state::{CompanionMode, CompanionState};

/// Everything a front end needs to render the companion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub state: CompanionState,
    pub mode: CompanionMode,
    /// Last human-readable announcement (status banner).
    pub status: String,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            state: CompanionState::default(),
            mode: CompanionMode::Awake,
            status: "Welcome! Aria is happy to see you.".to_string(),
        }
    }
}

/// Read access plus a mutation/subscription contract over the snapshot.
pub struct CompanionStore {
    tx: watch::Sender<StoreSnapshot>,
}

impl CompanionStore {
    pub fn new(snapshot: StoreSnapshot) -> Self {
        let (tx, _rx) = watch::channel(snapshot);
        Self { tx }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    /// Mutate the snapshot and notify subscribers.
    pub fn update(&self, mutate: impl FnOnce(&mut StoreSnapshot)) {
        self.tx.send_modify(mutate);
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for CompanionStore {
    fn default() -> Self {
        Self::new(StoreSnapshot::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_visible_in_next_snapshot() {
        let store = CompanionStore::default();
        store.update(|snap| {
            snap.state.happiness = 100;
            snap.status = "over the moon".to_string();
        });
        let snap = store.snapshot();
        assert_eq!(snap.state.happiness, 100);
        assert_eq!(snap.status, "over the moon");
    }

    #[tokio::test]
    async fn subscribers_observe_updates() {
        let store = CompanionStore::default();
        let mut rx = store.subscribe();
        store.update(|snap| snap.mode = CompanionMode::Resting);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().mode, CompanionMode::Resting);
    }
}
