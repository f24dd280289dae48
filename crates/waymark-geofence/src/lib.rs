//! Geofencing seam for waymark
//!
//! The platform location service that actually watches fences and fires
//! entry callbacks lives outside this codebase. This crate defines the
//! boundary: the request shape derived from a reminder, the
//! `GeofencingClient` trait the app calls, and a mock client for tests.

mod mock;
mod traits;

pub use mock::*;
pub use traits::*;
