// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use boxphys_geom::GeomError;
use thiserror::Error;

/// Errors raised when building physics objects from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectError {
    /// Mass was zero, negative, or not finite.
    #[error("mass must be finite and positive, got {0}")]
    InvalidMass(f32),
    /// Hitbox extents were rejected by the geometry layer.
    #[error(transparent)]
    Hitbox(#[from] GeomError),
    /// Position or velocity had a non-finite component.
    #[error("{0} must be finite")]
    NotFinite(&'static str),
    /// A material coefficient fell outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    CoefficientOutOfRange {
        /// Coefficient name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
}

pub(crate) fn check_unit(name: &'static str, value: f32) -> Result<(), ObjectError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ObjectError::CoefficientOutOfRange { name, value })
    }
}
