//! Reminder repository: the sole gateway between screen models and the store
//!
//! Every operation is async and runs the store call on the blocking pool,
//! so callers on the UI task suspend instead of blocking. Every outcome —
//! reads and writes alike — comes back as a [`DataResult`]; no store fault
//! ever crosses this boundary as a panic or a raised error of another type.

use std::sync::Arc;
use tracing::{debug, warn};
use waymark_store::{ReminderStore, StoreError};
use waymark_util::ReminderId;

use crate::ReminderItem;

/// Failure of a repository operation, as reported to screen models
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// The requested id has no matching record
    #[error("reminder not found")]
    NotFound,

    /// The underlying store failed; carries the failure's message
    #[error("{0}")]
    Storage(String),
}

impl From<StoreError> for DataError {
    fn from(e: StoreError) -> Self {
        match e {
            // Unwrap the store's message so callers see the original fault text
            StoreError::Database(message) => DataError::Storage(message),
            StoreError::Io(io) => DataError::Storage(io.to_string()),
        }
    }
}

pub type DataResult<T> = Result<T, DataError>;

/// Async gateway over a [`ReminderStore`].
///
/// Cheap to clone; clones share the same store. This is the single seam
/// for introducing an alternate data source without touching the screens.
#[derive(Clone)]
pub struct ReminderRepository {
    store: Arc<dyn ReminderStore>,
}

impl ReminderRepository {
    pub fn new(store: Arc<dyn ReminderStore>) -> Self {
        Self { store }
    }

    /// Fetch every stored reminder
    pub async fn get_reminders(&self) -> DataResult<Vec<ReminderItem>> {
        let store = self.store.clone();
        let records = run_blocking(move || store.get_reminders()).await?;

        debug!(count = records.len(), "Reminders loaded");
        Ok(records.into_iter().map(ReminderItem::from).collect())
    }

    /// Fetch one reminder by id
    pub async fn get_reminder(&self, id: &ReminderId) -> DataResult<ReminderItem> {
        let store = self.store.clone();
        let id = id.clone();
        let record = run_blocking(move || store.get_reminder_by_id(&id)).await?;

        match record {
            Some(record) => Ok(record.into()),
            None => Err(DataError::NotFound),
        }
    }

    /// Persist a reminder, keyed by its id
    pub async fn save_reminder(&self, item: ReminderItem) -> DataResult<()> {
        let store = self.store.clone();
        let record = item.into();
        run_blocking(move || store.save_reminder(&record)).await
    }

    /// Remove every stored reminder
    pub async fn delete_all_reminders(&self) -> DataResult<()> {
        let store = self.store.clone();
        run_blocking(move || store.delete_all_reminders()).await
    }
}

/// Hop a store call onto the blocking pool and fold both failure layers
/// (task join, store fault) into a `DataError`.
async fn run_blocking<T, F>(call: F) -> DataResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(result) => result.map_err(DataError::from),
        Err(join) => {
            warn!(error = %join, "Store task failed to complete");
            Err(DataError::Storage(join.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_store::InMemoryReminderStore;

    fn repository_with_store() -> (ReminderRepository, Arc<InMemoryReminderStore>) {
        let store = Arc::new(InMemoryReminderStore::new());
        (ReminderRepository::new(store.clone()), store)
    }

    fn sample(title: &str) -> ReminderItem {
        ReminderItem::new(Some(title.into()), Some("test".into()), None, None, None)
    }

    #[tokio::test]
    async fn empty_store_reads_succeed() {
        let (repository, _) = repository_with_store();

        let reminders = repository.get_reminders().await.unwrap();
        assert!(reminders.is_empty());
    }

    #[tokio::test]
    async fn saved_item_comes_back_by_id() {
        let (repository, _) = repository_with_store();

        let item = sample("pick up keys");
        repository.save_reminder(item.clone()).await.unwrap();

        let fetched = repository.get_reminder(&item.id).await.unwrap();
        assert_eq!(fetched.id, item.id);
        assert_eq!(fetched.title, item.title);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let (repository, _) = repository_with_store();

        let result = repository.get_reminder(&ReminderId::new("random-id")).await;
        assert_eq!(result, Err(DataError::NotFound));
        assert_eq!(result.unwrap_err().to_string(), "reminder not found");
    }

    #[tokio::test]
    async fn store_fault_surfaces_configured_message() {
        let (repository, store) = repository_with_store();
        store.fail_with("Couldn't load reminders");

        let result = repository.get_reminders().await;
        assert_eq!(
            result,
            Err(DataError::Storage("Couldn't load reminders".into()))
        );
        assert_eq!(result.unwrap_err().to_string(), "Couldn't load reminders");
    }

    #[tokio::test]
    async fn write_fault_is_reported_too() {
        let (repository, store) = repository_with_store();
        store.fail_with("disk full");

        let result = repository.save_reminder(sample("doomed")).await;
        assert_eq!(result, Err(DataError::Storage("disk full".into())));
    }

    #[tokio::test]
    async fn delete_all_then_read_is_empty() {
        let (repository, _) = repository_with_store();

        for i in 0..5 {
            repository.save_reminder(sample(&format!("reminder {i}"))).await.unwrap();
        }
        assert_eq!(repository.get_reminders().await.unwrap().len(), 5);

        repository.delete_all_reminders().await.unwrap();
        assert!(repository.get_reminders().await.unwrap().is_empty());
    }
}
