use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing of animated target re-centering.
pub struct AnimationOptions {
    /// Transition length in seconds. Zero or negative completes on the next
    /// tick.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub duration: f32,
    /// Curve applied to raw progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            easing: EasingFunction::default(),
        }
    }
}
