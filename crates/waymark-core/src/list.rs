//! Reminder-list screen model

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::{ReminderItem, ReminderRepository, ScreenEvent, ScreenEvents};

/// Observable state of the reminder-list screen
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub reminders: Vec<ReminderItem>,

    /// A load is in flight
    pub show_loading: bool,

    /// The last load completed with nothing to show
    pub show_no_data: bool,
}

/// Drives the reminder-list screen from repository data
pub struct ReminderListModel {
    repository: ReminderRepository,
    state_tx: watch::Sender<ListState>,
    state_rx: watch::Receiver<ListState>,
    events: ScreenEvents,
}

impl ReminderListModel {
    pub fn new(repository: ReminderRepository) -> Self {
        let (state_tx, state_rx) = watch::channel(ListState::default());
        Self {
            repository,
            state_tx,
            state_rx,
            events: ScreenEvents::new(),
        }
    }

    /// Get the current screen state
    pub fn state(&self) -> ListState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to screen state changes
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state_rx.clone()
    }

    /// Take the screen's one-shot event receiver (once, on bind)
    pub fn take_events(&self) -> mpsc::UnboundedReceiver<ScreenEvent> {
        self.events.take_receiver()
    }

    /// Reload the list from the repository.
    ///
    /// A failed load is reported once through the event queue and leaves
    /// the screen idle with an empty list; it is never fatal.
    pub async fn load_reminders(&self) {
        self.state_tx.send_modify(|state| state.show_loading = true);

        match self.repository.get_reminders().await {
            Ok(reminders) => {
                debug!(count = reminders.len(), "Reminder list loaded");
                self.state_tx.send_modify(|state| {
                    state.show_no_data = reminders.is_empty();
                    state.reminders = reminders;
                    state.show_loading = false;
                });
            }
            Err(err) => {
                warn!(error = %err, "Failed to load reminder list");
                self.events.push(ScreenEvent::ShowSnackbar(err.to_string()));
                self.state_tx.send_modify(|state| {
                    state.reminders.clear();
                    state.show_no_data = true;
                    state.show_loading = false;
                });
            }
        }
    }
}
