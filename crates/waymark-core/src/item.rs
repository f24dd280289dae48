//! Screen-layer reminder shapes

use waymark_store::ReminderRecord;
use waymark_util::ReminderId;

/// A point picked on the map, as handed over by the select-location screen
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    /// Display name of the picked place
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A reminder as the screens edit and display it.
///
/// Same fields as [`ReminderRecord`]; the two convert losslessly. The
/// record is what the store persists, the item is what the form holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderItem {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderItem {
    /// Create an item with a freshly generated id
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

    /// Whether a geofence can be derived from this item
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

impl From<ReminderRecord> for ReminderItem {
    fn from(record: ReminderRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            location: record.location,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

impl From<ReminderItem> for ReminderRecord {
    fn from(item: ReminderItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            location: item.location,
            latitude: item.latitude,
            longitude: item.longitude,
        }
    }
}
