//! One-shot UI events
//!
//! Messages and navigation signals are delivered through a single-consumer
//! queue per screen, so an event is observed exactly once. There is no
//! "already shown" bookkeeping for the UI to get wrong: receiving the
//! event consumes it.

use std::sync::Mutex;
use tokio::sync::mpsc;

/// Events a screen model emits for its screen to act on once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Show a dismissible snackbar message
    ShowSnackbar(String),

    /// Show a short toast message
    ShowToast(String),

    /// Pop back to the previous screen
    NavigateBack,
}

/// Single-consumer event queue owned by a screen model
pub struct ScreenEvents {
    tx: mpsc::UnboundedSender<ScreenEvent>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<ScreenEvent>>>,
}

impl ScreenEvents {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Enqueue an event. Events pushed before the screen attaches are
    /// buffered, not lost.
    pub fn push(&self, event: ScreenEvent) {
        let _ = self.tx.send(event);
    }

    /// Take the receiving end. The screen calls this once when it binds.
    pub fn take_receiver(&self) -> mpsc::UnboundedReceiver<ScreenEvent> {
        self.rx
            .lock()
            .unwrap()
            .take()
            .expect("take_receiver() can only be called once")
    }
}

impl Default for ScreenEvents {
    fn default() -> Self {
        Self::new()
    }
}
