//! Mock geofencing client for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use waymark_util::ReminderId;

use crate::{GeofenceError, GeofenceRequest, GeofenceResult, GeofencingClient};

/// Mock geofencing client for unit/integration testing
pub struct MockGeofencer {
    fences: Arc<Mutex<Vec<GeofenceRequest>>>,

    /// Configure register to fail
    pub fail_register: Arc<Mutex<bool>>,
}

impl MockGeofencer {
    pub fn new() -> Self {
        Self {
            fences: Arc::new(Mutex::new(Vec::new())),
            fail_register: Arc::new(Mutex::new(false)),
        }
    }

    /// Get the currently registered fences
    pub fn registered(&self) -> Vec<GeofenceRequest> {
        self.fences.lock().unwrap().clone()
    }

    pub fn is_registered(&self, id: &ReminderId) -> bool {
        self.fences.lock().unwrap().iter().any(|f| &f.id == id)
    }
}

impl Default for MockGeofencer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeofencingClient for MockGeofencer {
    async fn register(&self, request: GeofenceRequest) -> GeofenceResult<()> {
        if *self.fail_register.lock().unwrap() {
            return Err(GeofenceError::RegistrationFailed("Mock register failure".into()));
        }

        let mut fences = self.fences.lock().unwrap();
        fences.retain(|f| f.id != request.id);
        fences.push(request);
        Ok(())
    }

    async fn remove(&self, id: &ReminderId) -> GeofenceResult<()> {
        let mut fences = self.fences.lock().unwrap();
        let before = fences.len();
        fences.retain(|f| &f.id != id);
        if fences.len() == before {
            return Err(GeofenceError::RemovalFailed(format!("no fence for id {id}")));
        }
        Ok(())
    }

    async fn remove_all(&self) -> GeofenceResult<()> {
        self.fences.lock().unwrap().clear();
        Ok(())
    }
}
