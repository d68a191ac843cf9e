//! Feedback auto-dismiss timer.
//!
//! At most one timer is armed at a time. When it fires it sends the feedback
//! sequence number it was armed for back to the command loop, which hands it
//! to the session; a sequence that is no longer current is ignored there.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub struct DismissTimer {
    tx: UnboundedSender<u64>,
    handle: Option<JoinHandle<()>>,
}

impl DismissTimer {
    pub fn new(tx: UnboundedSender<u64>) -> Self {
        Self { tx, handle: None }
    }

    /// Replace any pending timer with one firing `seq` after `delay`.
    pub fn arm(&mut self, delay: Duration, seq: u64) {
        self.cancel();
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // the receiver is gone once the loop has exited
            let _ = tx.send(seq);
        }));
        tracing::debug!(seq, delay_ms = delay.as_millis() as u64, "dismiss timer armed");
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().map_or(false, |h| !h.is_finished())
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
