use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit geometry used when constructing an
/// [`OrbitCamera`](crate::camera::OrbitCamera).
pub struct CameraOptions {
    /// Distance from target to eye.
    #[schemars(title = "Radius")]
    pub radius: f32,
    /// Smallest allowed radius.
    #[schemars(title = "Min Radius")]
    pub min_radius: f32,
    /// Largest allowed radius.
    #[schemars(title = "Max Radius")]
    pub max_radius: f32,
    /// Point the camera orbits around.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Starting up direction (normalized on construction).
    #[schemars(skip)]
    pub initial_up: [f32; 3],
    /// Starting forward direction (normalized on construction).
    #[schemars(skip)]
    pub initial_forward: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            radius: 16.0,
            min_radius: 0.1,
            max_radius: 1000.0,
            target: [0.0, 0.0, 0.0],
            initial_up: [0.0, 1.0, 0.0],
            initial_forward: [0.0, 0.0, -1.0],
        }
    }
}

impl CameraOptions {
    /// Check radius bounds, that the target is finite, and that both
    /// initial directions can be normalized.
    pub fn validate(&self) -> Result<(), CameraError> {
        let bounds_ok = self.min_radius.is_finite()
            && self.max_radius.is_finite()
            && self.min_radius > 0.0
            && self.min_radius <= self.max_radius;
        if !bounds_ok {
            return Err(CameraError::InvalidRadiusBounds {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !Vec3::from(self.target).is_finite() {
            return Err(CameraError::NonFiniteTarget {
                target: self.target,
            });
        }
        let _up = direction("initial_up", self.initial_up)?;
        let _forward = direction("initial_forward", self.initial_forward)?;
        Ok(())
    }
}

/// Normalize a direction, rejecting zero-length or non-finite input.
pub(crate) fn direction(
    name: &'static str,
    v: impl Into<Vec3>,
) -> Result<Vec3, CameraError> {
    v.into()
        .try_normalize()
        .ok_or(CameraError::DegenerateVector { name })
}
