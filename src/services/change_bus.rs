//! Change notifications for storage keys.
//!
//! Stores publish a [`StorageChange`] after writing; components subscribe to
//! the one key they render. Delivery is best effort: a subscriber that falls
//! behind loses the payloads but is told to refresh.

use serde_json::Value;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// A notification that the value under `key` changed.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageChange {
    pub key: String,
    /// The changed item only, not the full stored value.
    pub new_value: Option<Value>,
}

/// Cloneable publish handle shared by every store and component.
#[derive(Clone)]
pub struct ChangeBus {
    sender: broadcast::Sender<StorageChange>,
}

impl ChangeBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publishes a change. Returns how many subscriptions received it.
    pub fn publish(&self, change: StorageChange) -> usize {
        tracing::debug!(key = %change.key, "publishing storage change");
        self.sender.send(change).unwrap_or(0)
    }

    /// Subscribes to changes for `key`. Only changes published after this call are seen.
    pub fn subscribe(&self, key: &str) -> Subscription {
        Subscription {
            key: key.to_string(),
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending-change cursor for one key.
pub struct Subscription {
    key: String,
    receiver: broadcast::Receiver<StorageChange>,
}

impl Subscription {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns every pending change for this key without waiting.
    ///
    /// If the subscription lagged, a payload-less change for the key is
    /// included so the caller still re-renders.
    pub fn drain(&mut self) -> Vec<StorageChange> {
        let mut changes = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(change) if change.key == self.key => changes.push(change),
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(key = %self.key, skipped, "storage change subscription lagged");
                    changes.push(StorageChange {
                        key: self.key.clone(),
                        new_value: None,
                    });
                }
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => break,
            }
        }
        changes
    }

    /// Waits for the next change on this key. Returns `None` once every
    /// publisher is gone.
    pub async fn next(&mut self) -> Option<StorageChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) if change.key == self.key => return Some(change),
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(_)) => {
                    return Some(StorageChange {
                        key: self.key.clone(),
                        new_value: None,
                    })
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
