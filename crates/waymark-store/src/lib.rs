//! Persistence layer for waymark
//!
//! Provides:
//! - The `ReminderStore` trait (insert-or-replace, select-all, select-by-id,
//!   delete-all)
//! - A SQLite implementation for durable storage
//! - An in-memory implementation with fault injection for tests

mod memory;
mod sqlite;
mod traits;

pub use memory::*;
pub use sqlite::*;
pub use traits::*;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
