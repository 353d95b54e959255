//! Tunable parameters for gestures, energy and card motion.

use super::dataset::STARTING_ENERGY;
use super::errors::{ConfigError, ConfigResult};
use super::gesture::{HORIZONTAL_THRESHOLD, RotationCurve, Thresholds, VERTICAL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration. Every field has a default, so a partial
/// config file only overrides what it names.
///
/// # Examples
///
/// ```
/// use snackswipe::domain::SwipeConfig;
///
/// let config = SwipeConfig::default();
/// assert_eq!(config.thresholds().horizontal, 120.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub horizontal_threshold: f64,
    pub vertical_threshold: f64,
    pub starting_energy: u32,
    pub rotation_input_range: f64,
    pub max_rotation_degrees: f64,
    /// Logical units per terminal column when translating mouse drags
    pub cell_width_units: f64,
    /// Logical units per terminal row when translating mouse drags
    pub cell_height_units: f64,
    pub swipe_duration_ms: u64,
    pub spring_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            horizontal_threshold: HORIZONTAL_THRESHOLD,
            vertical_threshold: VERTICAL_THRESHOLD,
            starting_energy: STARTING_ENERGY,
            rotation_input_range: 200.0,
            max_rotation_degrees: 10.0,
            cell_width_units: 10.0,
            cell_height_units: 20.0,
            swipe_duration_ms: 220,
            spring_duration_ms: 250,
        }
    }
}

impl SwipeConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("horizontal_threshold", self.horizontal_threshold),
            ("vertical_threshold", self.vertical_threshold),
            ("rotation_input_range", self.rotation_input_range),
            ("cell_width_units", self.cell_width_units),
            ("cell_height_units", self.cell_height_units),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !self.max_rotation_degrees.is_finite() {
            return Err(ConfigError::InvalidRotation(self.max_rotation_degrees));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            horizontal: self.horizontal_threshold,
            vertical: self.vertical_threshold,
        }
    }

    pub fn rotation(&self) -> RotationCurve {
        RotationCurve {
            input_range: self.rotation_input_range,
            max_degrees: self.max_rotation_degrees,
        }
    }

    pub fn swipe_duration(&self) -> Duration {
        Duration::from_millis(self.swipe_duration_ms)
    }

    pub fn spring_duration(&self) -> Duration {
        Duration::from_millis(self.spring_duration_ms)
    }
}
