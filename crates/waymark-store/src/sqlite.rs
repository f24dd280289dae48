//! SQLite-based store implementation

use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use waymark_util::ReminderId;

use crate::{ReminderRecord, ReminderStore, StoreResult};

/// SQLite-based reminder store
pub struct SqliteReminderStore {
    conn: Mutex<Connection>,
}

impl SqliteReminderStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            -- Reminder records, keyed by id
            CREATE TABLE IF NOT EXISTS reminders (
                id TEXT PRIMARY KEY,
                title TEXT,
                description TEXT,
                location TEXT,
                latitude REAL,
                longitude REAL
            );
            "#,
        )?;

        debug!("Store schema initialized");
        Ok(())
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ReminderRecord> {
    let id: String = row.get(0)?;
    Ok(ReminderRecord {
        id: ReminderId::new(id),
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
    })
}

impl ReminderStore for SqliteReminderStore {
    fn save_reminder(&self, record: &ReminderRecord) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        // Upsert keeps the original rowid, so insertion order survives a
        // retried save for the same id.
        conn.execute(
            r#"
            INSERT INTO reminders (id, title, description, location, latitude, longitude)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id)
            DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                location = excluded.location,
                latitude = excluded.latitude,
                longitude = excluded.longitude
            "#,
            params![
                record.id.as_str(),
                record.title,
                record.description,
                record.location,
                record.latitude,
                record.longitude,
            ],
        )?;

        debug!(id = %record.id, "Reminder saved");
        Ok(())
    }

    fn get_reminders(&self) -> StoreResult<Vec<ReminderRecord>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, title, description, location, latitude, longitude
             FROM reminders ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], record_from_row)?;

        let mut reminders = Vec::new();
        for row in rows {
            reminders.push(row?);
        }

        Ok(reminders)
    }

    fn get_reminder_by_id(&self, id: &ReminderId) -> StoreResult<Option<ReminderRecord>> {
        let conn = self.conn.lock().unwrap();

        let record = conn
            .query_row(
                "SELECT id, title, description, location, latitude, longitude
                 FROM reminders WHERE id = ?",
                [id.as_str()],
                record_from_row,
            )
            .optional()?;

        Ok(record)
    }

    fn delete_all_reminders(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute("DELETE FROM reminders", [])?;
        debug!(deleted, "All reminders deleted");
        Ok(())
    }
}
