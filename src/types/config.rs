//! Configuration structures.
//!
//! Configuration is built from defaults and can be overridden from a JSON
//! document; every section falls back to its default when omitted.

use serde::{Deserialize, Serialize};

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Data object mapping behaviour.
    #[serde(default)]
    pub dataobjects: DataObjectsConfig,
}

impl Config {
    /// Load configuration from JSON text. Missing sections keep their defaults.
    pub fn from_json(json: &str) -> crate::types::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Data object (de)serialization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataObjectsConfig {
    /// Promote timestamp-looking strings inside arrays without declared
    /// metadata to dates.
    pub detect_array_dates: bool,

    /// Pretty-print JSON produced by `stringify`.
    pub pretty_json: bool,
}

impl Default for DataObjectsConfig {
    fn default() -> Self {
        Self {
            detect_array_dates: true,
            pretty_json: false,
        }
    }
}
