//! Reminder repository and screen models for waymark
//!
//! This crate is the app's internal core, containing:
//! - The repository: the sole async gateway between screen models and the
//!   store, with a uniform success/error result contract
//! - The two screen models (reminder list, save reminder) with observable
//!   state and single-consumer event queues
//! - Geofence derivation from saved reminders

mod events;
mod item;
mod list;
mod repository;
mod save;

pub use events::*;
pub use item::*;
pub use list::*;
pub use repository::*;
pub use save::*;
