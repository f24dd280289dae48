//! Save-reminder screen model
//!
//! One model instance backs the whole save flow: the list screen creates
//! it and hands clones to the save and select-location screens (clones
//! share one inner state). There is no ambient singleton; the flow that
//! created the model drops it, and `on_clear` resets the draft when the
//! screens tear down.

use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};
use waymark_config::GeofenceSettings;
use waymark_geofence::{GeofenceRequest, GeofencingClient};

use crate::{MapPoint, ReminderItem, ReminderRepository, ScreenEvent, ScreenEvents};

const MSG_ENTER_TITLE: &str = "Please enter title";
const MSG_REMINDER_SAVED: &str = "Reminder saved";
const MSG_GEOFENCE_FAILED: &str = "Failed to add geofence";

/// Observable state of the save-reminder screen: the in-progress form
#[derive(Debug, Clone, Default)]
pub struct SaveState {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable name of the selected location
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// The map point the select-location screen handed over
    pub selected_point: Option<MapPoint>,

    /// A save is in flight
    pub show_loading: bool,
}

/// Holds the save form and gates persistence on validation.
///
/// Per submission: Editing -> Validating -> Rejected (stay, message) or
/// Saving -> Saved (navigate back) / WriteFailed (stay, message). The
/// model keeps no persistent "saved" state; submissions are independent.
#[derive(Clone)]
pub struct SaveReminderModel {
    inner: Arc<SaveInner>,
}

struct SaveInner {
    repository: ReminderRepository,
    geofencer: Arc<dyn GeofencingClient>,
    geofence: GeofenceSettings,
    state_tx: watch::Sender<SaveState>,
    state_rx: watch::Receiver<SaveState>,
    events: ScreenEvents,
}

impl SaveReminderModel {
    pub fn new(
        repository: ReminderRepository,
        geofencer: Arc<dyn GeofencingClient>,
        geofence: GeofenceSettings,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(SaveState::default());
        Self {
            inner: Arc::new(SaveInner {
                repository,
                geofencer,
                geofence,
                state_tx,
                state_rx,
                events: ScreenEvents::new(),
            }),
        }
    }

    /// Get the current form state
    pub fn state(&self) -> SaveState {
        self.inner.state_rx.borrow().clone()
    }

    /// Subscribe to form state changes
    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.inner.state_rx.clone()
    }

    /// Take the screen's one-shot event receiver (once, on bind)
    pub fn take_events(&self) -> mpsc::UnboundedReceiver<ScreenEvent> {
        self.inner.events.take_receiver()
    }

    pub fn set_title(&self, title: Option<String>) {
        self.inner.state_tx.send_modify(|state| state.title = title);
    }

    pub fn set_description(&self, description: Option<String>) {
        self.inner
            .state_tx
            .send_modify(|state| state.description = description);
    }

    /// Entry point for the select-location screen: adopt the picked point
    /// as the reminder's location.
    pub fn select_location(&self, point: MapPoint) {
        self.inner.state_tx.send_modify(|state| {
            state.location = Some(point.name.clone());
            state.latitude = Some(point.latitude);
            state.longitude = Some(point.longitude);
            state.selected_point = Some(point);
        });
    }

    /// Build a fresh reminder item from the current form fields
    pub fn draft_item(&self) -> ReminderItem {
        let state = self.inner.state_rx.borrow();
        ReminderItem::new(
            state.title.clone(),
            state.description.clone(),
            state.location.clone(),
            state.latitude,
            state.longitude,
        )
    }

    /// Check that the item can be persisted: the title must be non-empty.
    /// A rejected item is reported through the event queue; nothing else
    /// happens.
    pub fn validate_entered_data(&self, item: &ReminderItem) -> bool {
        let has_title = item
            .title
            .as_deref()
            .is_some_and(|title| !title.trim().is_empty());

        if !has_title {
            self.inner
                .events
                .push(ScreenEvent::ShowSnackbar(MSG_ENTER_TITLE.into()));
        }
        has_title
    }

    /// Validate and persist the item, then register its geofence.
    ///
    /// Returns true iff the record was persisted. On success a saved
    /// message and a navigate-back signal are queued; a write failure is
    /// reported instead and the screen stays put. The geofence outcome is
    /// independent of the save: a registration failure is reported but the
    /// persisted record stands.
    pub async fn validate_and_save_reminder(&self, item: ReminderItem) -> bool {
        if !self.validate_entered_data(&item) {
            return false;
        }

        self.inner
            .state_tx
            .send_modify(|state| state.show_loading = true);

        let saved = self.inner.repository.save_reminder(item.clone()).await;

        let persisted = match saved {
            Ok(()) => {
                debug!(id = %item.id, "Reminder persisted");
                self.inner
                    .events
                    .push(ScreenEvent::ShowToast(MSG_REMINDER_SAVED.into()));
                self.inner.events.push(ScreenEvent::NavigateBack);
                self.register_geofence(&item).await;
                true
            }
            Err(err) => {
                warn!(id = %item.id, error = %err, "Failed to persist reminder");
                self.inner
                    .events
                    .push(ScreenEvent::ShowSnackbar(err.to_string()));
                false
            }
        };

        self.inner
            .state_tx
            .send_modify(|state| state.show_loading = false);
        persisted
    }

    /// Reset every form field; called when the screens tear down so the
    /// next entry starts from a clean draft.
    pub fn on_clear(&self) {
        self.inner.state_tx.send_modify(|state| {
            state.title = None;
            state.description = None;
            state.location = None;
            state.latitude = None;
            state.longitude = None;
            state.selected_point = None;
        });
    }

    async fn register_geofence(&self, item: &ReminderItem) {
        let (Some(latitude), Some(longitude)) = (item.latitude, item.longitude) else {
            debug!(id = %item.id, "Reminder has no coordinates, skipping geofence");
            return;
        };

        let request = GeofenceRequest::new(
            item.id.clone(),
            latitude,
            longitude,
            self.inner.geofence.radius_meters,
        )
        .with_expiration(self.inner.geofence.expiration);

        match self.inner.geofencer.register(request).await {
            Ok(()) => debug!(id = %item.id, "Geofence registered"),
            Err(err) => {
                warn!(id = %item.id, error = %err, "Failed to register geofence");
                self.inner
                    .events
                    .push(ScreenEvent::ShowSnackbar(MSG_GEOFENCE_FAILED.into()));
            }
        }
    }
}
