// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! World-wide simulation constants.

use thiserror::Error;

/// Error type for [`SpaceConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A constant was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// The per-axis speed limit was zero or negative.
    #[error("axis_speed_limit must be positive, got {0}")]
    NonPositiveSpeedLimit(f32),
    /// A coefficient that scales a restoring force was negative.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
}

/// Constants shared by every object in a [`crate::Space`].
///
/// All values are per tick; the timestep is implicit.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpaceConfig {
    /// Subtracted from every entity's vertical velocity each tick.
    pub gravity: f32,
    /// Scales each entity's drag coefficient.
    pub air_resistance: f32,
    /// Bound on `|vel|` per axis after force resolution.
    ///
    /// Keep it below the smallest hitbox extent or fast bodies tunnel.
    pub axis_speed_limit: f32,
    /// Force per unit of overlap pushing overlapping entities apart.
    pub collision_coefficient: f32,
}

impl SpaceConfig {
    /// Default gravity.
    pub const DEFAULT_GRAVITY: f32 = 0.3;
    /// Default air resistance.
    pub const DEFAULT_AIR_RESISTANCE: f32 = 0.3;
    /// Default per-axis speed limit.
    pub const DEFAULT_AXIS_SPEED_LIMIT: f32 = 100.0;
    /// Default entity push stiffness.
    pub const DEFAULT_COLLISION_COEFFICIENT: f32 = 3.0;

    /// Checks that every constant is usable by the solver.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("air_resistance", self.air_resistance),
            ("axis_speed_limit", self.axis_speed_limit),
            ("collision_coefficient", self.collision_coefficient),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if self.axis_speed_limit <= 0.0 {
            return Err(ConfigError::NonPositiveSpeedLimit(self.axis_speed_limit));
        }
        for (name, value) in [
            ("air_resistance", self.air_resistance),
            ("collision_coefficient", self.collision_coefficient),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            gravity: Self::DEFAULT_GRAVITY,
            air_resistance: Self::DEFAULT_AIR_RESISTANCE,
            axis_speed_limit: Self::DEFAULT_AXIS_SPEED_LIMIT,
            collision_coefficient: Self::DEFAULT_COLLISION_COEFFICIENT,
        }
    }
}
