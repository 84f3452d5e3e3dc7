//! Shutdown coordination.

use tokio::sync::broadcast;

/// Graceful-shutdown coordinator.
///
/// The signal listener owns one of these; the monitor loop holds a
/// receiver and abandons whatever it is awaiting when the channel
/// fires.
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // Capacity 1: a trigger that lands between the loop's await
        // points stays buffered until the loop next listens.
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    /// Hand out a receiver for a long-running task.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notify.subscribe()
    }

    /// Fire the shutdown signal. Safe to call with no subscribers.
    pub fn trigger(&self) {
        let _ = self.notify.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
