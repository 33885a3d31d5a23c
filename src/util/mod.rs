//! Shared utilities for the camera.
//!
//! Currently just the easing curves used by target animation.

pub mod easing;
