//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbit-camera crate.
#[derive(Debug)]
pub enum CameraError {
    /// A direction vector had zero length or non-finite components and
    /// could not be normalized.
    DegenerateVector {
        /// Which direction was rejected (`"forward"`, `"left"`, `"up"`, ...).
        name: &'static str,
    },
    /// Radius bounds violate `0 < min_radius <= max_radius`.
    InvalidRadiusBounds {
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },
    /// The orbit target had NaN or infinite components.
    NonFiniteTarget {
        /// Rejected target.
        target: [f32; 3],
    },
    /// Generic I/O failure while reading or writing options.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateVector { name } => {
                write!(f, "{name} vector cannot be normalized")
            }
            Self::InvalidRadiusBounds { min, max } => {
                write!(f, "invalid radius bounds: min {min}, max {max}")
            }
            Self::NonFiniteTarget { target } => {
                write!(f, "camera target {target:?} is not finite")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
