//! Store trait definitions

use serde::{Deserialize, Serialize};
use waymark_util::ReminderId;

use crate::StoreResult;

/// A stored reminder: a named location plus the user-entered text that
/// should trigger a notification when the device enters its vicinity.
///
/// Only the id is mandatory at this layer; the save flow validates the
/// title before a record reaches the store, and the geofence derivation
/// checks the coordinates. Records are never updated in place, only
/// inserted (or replaced by id) or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRecord {
    /// Stable unique id
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable place name
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderRecord {
    /// Create a record with a freshly generated id
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: ReminderId::generate(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }
}

/// Main store trait
///
/// Operations are synchronous; the repository layer owns the async
/// boundary and hops store calls onto a blocking context. Concurrent
/// callers writing the same id are serialized only by the underlying
/// storage engine.
pub trait ReminderStore: Send + Sync {
    /// Insert or replace a record keyed by its id
    fn save_reminder(&self, record: &ReminderRecord) -> StoreResult<()>;

    /// Get every stored record, in insertion order
    fn get_reminders(&self) -> StoreResult<Vec<ReminderRecord>>;

    /// Get one record by id; absence is `Ok(None)`, not an error
    fn get_reminder_by_id(&self, id: &ReminderId) -> StoreResult<Option<ReminderRecord>>;

    /// Remove every record; idempotent, safe on an empty store
    fn delete_all_reminders(&self) -> StoreResult<()>;
}
