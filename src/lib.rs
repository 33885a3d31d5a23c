// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test code may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Orbit camera controller for real-time 3D rendering.
//!
//! The camera is parameterized by a target point, a clamped distance and an
//! orthonormal `forward`/`left`/`up` basis. Callers feed it zoom and
//! rotation deltas plus a per-frame time step, and read back a view matrix
//! and eye position.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - the camera itself
//! - [`options::Options`] - TOML-backed configuration (geometry, animation)
//! - [`util::easing`] - easing curves for target re-centering
//!
//! Projection, input mapping and rendering stay with the host application.

pub mod camera;
pub mod error;
pub mod options;
pub mod util;

pub use camera::OrbitCamera;
pub use error::CameraError;
pub use options::{AnimationOptions, CameraOptions, Options};
