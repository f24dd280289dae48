//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Service-level settings
    #[serde(default)]
    pub service: RawServiceConfig,

    /// Geofence defaults
    #[serde(default)]
    pub geofence: RawGeofenceConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawServiceConfig {
    /// Data directory for the reminder store
    pub data_dir: Option<PathBuf>,

    /// Log directory
    pub log_dir: Option<PathBuf>,
}

/// Geofence defaults applied when deriving a fence from a reminder
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawGeofenceConfig {
    /// Radius of the circular region in meters (default: 150)
    pub radius_meters: Option<f32>,

    /// Fence lifetime in seconds; absent means the fence never expires
    pub expiration_secs: Option<u64>,
}
