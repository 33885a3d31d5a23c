//! Orbit camera for 3D scene viewing.
//!
//! Provides a target-centered camera with zoom, horizontal/vertical orbit
//! rotation, a cached view matrix, and eased re-centering of the target.

/// Time-driven target transition state machine.
pub mod animation;
/// Orbit camera state, mutators and derived view data.
pub mod orbit;
/// GPU uniform layout for the view data.
pub mod uniform;

pub use animation::{AnimationState, TargetAnimation};
pub use orbit::OrbitCamera;
pub use uniform::ViewUniform;
