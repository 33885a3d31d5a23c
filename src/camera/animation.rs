use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Lifecycle of a single target transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// No transition in flight.
    Idle,
    /// Moving from `start` toward `end`.
    Animating {
        /// Target at the moment the transition (re)started.
        start: Vec3,
        /// Final target.
        end: Vec3,
        /// Seconds since start, capped at the duration.
        elapsed: f32,
    },
}

/// Eased interpolation of the orbit target between two points.
///
/// Driven once per frame by [`TargetAnimation::advance`]. A new
/// [`TargetAnimation::start`] while a transition is running restarts from
/// the caller's current target, so the motion never jumps.
#[derive(Debug, Clone)]
pub struct TargetAnimation {
    state: AnimationState,
    duration: f32,
    easing: EasingFunction,
}

impl Default for TargetAnimation {
    fn default() -> Self {
        Self::new(1.0, EasingFunction::default())
    }
}

impl TargetAnimation {
    /// Create an idle animation with the given duration (seconds) and curve.
    #[must_use]
    pub fn new(duration: f32, easing: EasingFunction) -> Self {
        Self {
            state: AnimationState::Idle,
            duration: sanitize_duration(duration),
            easing,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Transition length in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Set the transition length. Negative or non-finite values become 0,
    /// which completes the transition on the next tick.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = sanitize_duration(duration);
    }

    /// Curve applied to raw progress.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Replace the easing curve. Takes effect on the next tick.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Destination of the running transition.
    #[must_use]
    pub fn end_target(&self) -> Option<Vec3> {
        match self.state {
            AnimationState::Animating { end, .. } => Some(end),
            AnimationState::Idle => None,
        }
    }

    /// Raw (un-eased) progress in `[0, 1]`; 1.0 when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.state {
            AnimationState::Animating { elapsed, .. } if self.duration > 0.0 => {
                (elapsed / self.duration).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Begin a transition from `current` to `end`, resetting elapsed time.
    ///
    /// `current` must be the target as it is right now, which during a
    /// running transition is the interpolated point.
    pub fn start(&mut self, current: Vec3, end: Vec3) {
        if self.is_animating() {
            log::debug!("restarting target animation from {current} toward {end}");
        } else {
            log::debug!("starting target animation from {current} toward {end}");
        }
        self.state = AnimationState::Animating {
            start: current,
            end,
            elapsed: 0.0,
        };
    }

    /// Advance by `delta_time` seconds and return the new target, or `None`
    /// when idle.
    ///
    /// On the final tick the end point is returned exactly and the state
    /// drops back to [`AnimationState::Idle`].
    pub fn advance(&mut self, delta_time: f32) -> Option<Vec3> {
        let AnimationState::Animating {
            start,
            end,
            elapsed,
        } = &mut self.state
        else {
            return None;
        };

        let step = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };
        *elapsed = (*elapsed + step).min(self.duration);

        if *elapsed >= self.duration {
            let end = *end;
            self.state = AnimationState::Idle;
            log::debug!("target animation finished at {end}");
            return Some(end);
        }

        let t = *elapsed / self.duration;
        let eased = self.easing.evaluate(t);
        log::trace!("target animation t={t:.3} eased={eased:.3}");
        Some(start.lerp(*end, eased))
    }
}

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() {
        duration.max(0.0)
    } else {
        0.0
    }
}
