//! Grid index configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Configuration for creating a grid index.
///
/// ```
/// use cellgrid::GridConfig;
///
/// let config = GridConfig::new(16).with_capacity(1024);
/// assert!(config.validate().is_ok());
/// assert!(GridConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cell edge length in world units. Must be strictly positive.
    /// Default: 1
    pub resolution: i32,

    /// Number of objects to preallocate membership storage for.
    /// Default: 0
    pub capacity: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: 1,
            capacity: 0,
        }
    }
}

impl GridConfig {
    /// Create a config with the given resolution.
    pub fn new(resolution: i32) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Set the preallocated object capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check that the configuration describes a usable grid.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] if `resolution <= 0`.
    pub fn validate(&self) -> Result<()> {
        if self.resolution <= 0 {
            return Err(GridError::InvalidArgument(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.resolution, 1, "Default resolution should be 1");
        assert_eq!(config.capacity, 0, "Default capacity should be 0");
        assert!(config.validate().is_ok(), "Default config should validate");
    }

    #[test]
    fn test_non_positive_resolution_rejected() {
        for resolution in [0, -1, i32::MIN] {
            let err = GridConfig::new(resolution).validate().unwrap_err();
            assert!(
                matches!(err, GridError::InvalidArgument(_)),
                "Resolution {resolution} should be an invalid argument"
            );
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = GridConfig::new(32).with_capacity(500);
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config, "Config should survive a JSON round trip");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"resolution": 8}"#).unwrap();
        assert_eq!(config.resolution, 8, "Resolution should be read from JSON");
        assert_eq!(config.capacity, 0, "Missing capacity should default to 0");
    }
}
