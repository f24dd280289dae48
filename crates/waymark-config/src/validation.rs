//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;

/// Largest accepted geofence radius, in meters. Platform location services
/// degrade sharply past this.
pub const MAX_RADIUS_METERS: f32 = 10_000.0;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Geofence radius {0} m is not a positive finite number")]
    InvalidRadius(f32),

    #[error("Geofence radius {0} m exceeds the maximum of {max} m", max = MAX_RADIUS_METERS)]
    RadiusTooLarge(f32),

    #[error("Geofence expiration must be greater than zero seconds")]
    ZeroExpiration,
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(radius) = config.geofence.radius_meters {
        if !radius.is_finite() || radius <= 0.0 {
            errors.push(ValidationError::InvalidRadius(radius));
        } else if radius > MAX_RADIUS_METERS {
            errors.push(ValidationError::RadiusTooLarge(radius));
        }
    }

    if config.geofence.expiration_secs == Some(0) {
        errors.push(ValidationError::ZeroExpiration);
    }

    errors
}
