//! In-memory store for testing
//!
//! Keeps records in a `Vec` in insertion order and supports simulating a
//! storage fault: once a fault message is set, every operation fails with
//! it until the fault is cleared.

use std::sync::Mutex;
use waymark_util::ReminderId;

use crate::{ReminderRecord, ReminderStore, StoreError, StoreResult};

/// In-memory reminder store for unit/integration testing
#[derive(Default)]
pub struct InMemoryReminderStore {
    reminders: Mutex<Vec<ReminderRecord>>,
    fail_message: Mutex<Option<String>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_message.lock().unwrap() = Some(message.into());
    }

    /// Stop simulating faults
    pub fn clear_failure(&self) {
        *self.fail_message.lock().unwrap() = None;
    }

    fn check_fault(&self) -> StoreResult<()> {
        match self.fail_message.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

impl ReminderStore for InMemoryReminderStore {
    fn save_reminder(&self, record: &ReminderRecord) -> StoreResult<()> {
        self.check_fault()?;

        let mut reminders = self.reminders.lock().unwrap();
        match reminders.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => reminders.push(record.clone()),
        }
        Ok(())
    }

    fn get_reminders(&self) -> StoreResult<Vec<ReminderRecord>> {
        self.check_fault()?;
        Ok(self.reminders.lock().unwrap().clone())
    }

    fn get_reminder_by_id(&self, id: &ReminderId) -> StoreResult<Option<ReminderRecord>> {
        self.check_fault()?;

        let reminders = self.reminders.lock().unwrap();
        Ok(reminders.iter().find(|r| &r.id == id).cloned())
    }

    fn delete_all_reminders(&self) -> StoreResult<()> {
        self.check_fault()?;
        self.reminders.lock().unwrap().clear();
        Ok(())
    }
}
