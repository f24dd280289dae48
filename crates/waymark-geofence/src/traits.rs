//! Geofencing client traits

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use waymark_util::ReminderId;

/// Errors from geofencing operations
#[derive(Debug, Error)]
pub enum GeofenceError {
    #[error("Registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Removal failed: {0}")]
    RemovalFailed(String),

    #[error("Location permission denied: {0}")]
    PermissionDenied(String),
}

pub type GeofenceResult<T> = Result<T, GeofenceError>;

/// Transition that arms the fence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionKind {
    /// Fire when the device enters the region
    #[default]
    Enter,
    /// Fire when the device leaves the region
    Exit,
}

/// A circular fence around a reminder's coordinates.
///
/// The fence is keyed by the reminder id, so removing a reminder can
/// remove its fence without extra bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceRequest {
    pub id: ReminderId,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f32,
    /// Fence lifetime; `None` means the fence never expires
    pub expiration: Option<Duration>,
    pub transition: TransitionKind,
}

impl GeofenceRequest {
    pub fn new(id: ReminderId, latitude: f64, longitude: f64, radius_meters: f32) -> Self {
        Self {
            id,
            latitude,
            longitude,
            radius_meters,
            expiration: None,
            transition: TransitionKind::Enter,
        }
    }

    pub fn with_expiration(mut self, expiration: Option<Duration>) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_transition(mut self, transition: TransitionKind) -> Self {
        self.transition = transition;
        self
    }
}

/// Geofencing client trait - implemented by platform-specific adapters
#[async_trait]
pub trait GeofencingClient: Send + Sync {
    /// Register a fence; replaces any fence already keyed by the same id
    async fn register(&self, request: GeofenceRequest) -> GeofenceResult<()>;

    /// Remove the fence keyed by the given reminder id
    async fn remove(&self, id: &ReminderId) -> GeofenceResult<()>;

    /// Remove every registered fence
    async fn remove_all(&self) -> GeofenceResult<()>;
}
