//! Shared utilities for waymark
//!
//! This crate provides:
//! - ID types (ReminderId)
//! - Default paths for the data and log directories

mod ids;
mod paths;

pub use ids::*;
pub use paths::*;
