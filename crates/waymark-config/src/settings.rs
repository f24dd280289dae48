//! Typed settings (converted from the raw schema after validation)

use crate::schema::RawConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Default geofence radius in meters
pub const DEFAULT_RADIUS_METERS: f32 = 150.0;

/// Validated, typed configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub service: ServiceSettings,
    pub geofence: GeofenceSettings,
}

/// Service paths
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            data_dir: waymark_util::default_data_dir(),
            log_dir: waymark_util::default_log_dir(),
        }
    }
}

/// Defaults applied when deriving a geofence from a reminder
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceSettings {
    /// Radius of the circular region in meters
    pub radius_meters: f32,

    /// Fence lifetime; `None` means the fence never expires
    pub expiration: Option<Duration>,
}

impl Default for GeofenceSettings {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            expiration: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            geofence: GeofenceSettings::default(),
        }
    }
}

impl Settings {
    /// Convert a validated raw config into typed settings
    pub fn from_raw(raw: RawConfig) -> Self {
        let service = ServiceSettings {
            data_dir: raw
                .service
                .data_dir
                .unwrap_or_else(waymark_util::default_data_dir),
            log_dir: raw
                .service
                .log_dir
                .unwrap_or_else(waymark_util::default_log_dir),
        };

        let geofence = GeofenceSettings {
            radius_meters: raw
                .geofence
                .radius_meters
                .unwrap_or(DEFAULT_RADIUS_METERS),
            expiration: raw.geofence.expiration_secs.map(Duration::from_secs),
        };

        debug!(
            data_dir = %service.data_dir.display(),
            radius_meters = geofence.radius_meters,
            "Settings resolved"
        );

        Self { service, geofence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawGeofenceConfig, RawServiceConfig};

    #[test]
    fn from_raw_applies_defaults() {
        let raw = RawConfig {
            config_version: 1,
            service: RawServiceConfig::default(),
            geofence: RawGeofenceConfig::default(),
        };

        let settings = Settings::from_raw(raw);
        assert_eq!(settings.geofence.radius_meters, DEFAULT_RADIUS_METERS);
        assert!(settings.geofence.expiration.is_none());
        assert!(settings.service.data_dir.to_string_lossy().contains("waymark"));
    }

    #[test]
    fn from_raw_keeps_explicit_values() {
        let raw = RawConfig {
            config_version: 1,
            service: RawServiceConfig {
                data_dir: Some(PathBuf::from("/srv/waymark")),
                log_dir: None,
            },
            geofence: RawGeofenceConfig {
                radius_meters: Some(42.0),
                expiration_secs: Some(600),
            },
        };

        let settings = Settings::from_raw(raw);
        assert_eq!(settings.service.data_dir, PathBuf::from("/srv/waymark"));
        assert_eq!(settings.geofence.radius_meters, 42.0);
        assert_eq!(settings.geofence.expiration, Some(Duration::from_secs(600)));
    }
}
