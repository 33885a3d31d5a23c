use std::cell::Cell;

use glam::{Mat4, Quat, Vec3};

use crate::camera::animation::TargetAnimation;
use crate::camera::uniform::ViewUniform;
use crate::error::CameraError;
use crate::options::{direction, AnimationOptions, CameraOptions, Options};
use crate::util::easing::EasingFunction;

/// Camera orbiting a target point at a clamped distance.
///
/// Orientation is an explicit `forward`/`left`/`up` basis. Rotations keep the
/// basis orthonormal; the direct setters only normalize, so callers feeding
/// non-orthogonal vectors get a skewed basis back in the view matrix.
///
/// The view matrix is cached and rebuilt on the first read after any
/// mutation.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    radius: f32,
    min_radius: f32,
    max_radius: f32,

    target: Vec3,
    forward: Vec3,
    left: Vec3,
    up: Vec3,

    view_matrix: Cell<Option<Mat4>>,
    animation: TargetAnimation,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let defaults = CameraOptions::default();
        let forward = Vec3::from(defaults.initial_forward).normalize();
        let up = Vec3::from(defaults.initial_up).normalize();
        Self {
            radius: defaults.radius,
            min_radius: defaults.min_radius,
            max_radius: defaults.max_radius,
            target: Vec3::from(defaults.target),
            forward,
            left: up.cross(forward).normalize(),
            up,
            view_matrix: Cell::new(None),
            animation: TargetAnimation::default(),
        }
    }
}

impl OrbitCamera {
    /// Build a camera from orbit geometry.
    ///
    /// The radius is clamped into the configured bounds and both initial
    /// directions are normalized; `left` is derived as `up × forward`.
    pub fn new(options: &CameraOptions) -> Result<Self, CameraError> {
        options.validate()?;
        let forward = direction("initial_forward", options.initial_forward)?;
        let up = direction("initial_up", options.initial_up)?;
        let left = direction("left", up.cross(forward))?;

        let requested = if options.radius.is_nan() {
            CameraOptions::default().radius
        } else {
            options.radius
        };
        let radius = requested.clamp(options.min_radius, options.max_radius);
        if radius != options.radius {
            log::warn!(
                "camera radius {} outside [{}, {}], clamped to {radius}",
                options.radius,
                options.min_radius,
                options.max_radius
            );
        }

        Ok(Self {
            radius,
            min_radius: options.min_radius,
            max_radius: options.max_radius,
            target: Vec3::from(options.target),
            forward,
            left,
            up,
            view_matrix: Cell::new(None),
            animation: TargetAnimation::default(),
        })
    }

    /// Build a camera from a full options set (geometry plus animation).
    pub fn from_options(options: &Options) -> Result<Self, CameraError> {
        let mut camera = Self::new(&options.camera)?;
        camera.apply_animation_options(&options.animation);
        Ok(camera)
    }

    /// Update animation timing and easing. A running transition keeps its
    /// start and end points.
    pub fn apply_animation_options(&mut self, options: &AnimationOptions) {
        self.animation.set_duration(options.duration);
        self.animation.set_easing(options.easing);
    }

    fn invalidate(&mut self) {
        self.view_matrix.set(None);
    }

    fn clamp_radius(&self, radius: f32) -> f32 {
        if radius.is_nan() {
            self.radius
        } else {
            radius.clamp(self.min_radius, self.max_radius)
        }
    }

    // -- Radius ------------------------------------------------------------

    /// Distance from target to eye.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the distance, saturating into `[min_radius, max_radius]`.
    /// NaN leaves the radius unchanged.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = self.clamp_radius(radius);
        self.invalidate();
    }

    /// Lower radius bound.
    #[must_use]
    pub fn min_radius(&self) -> f32 {
        self.min_radius
    }

    /// Upper radius bound.
    #[must_use]
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Add `delta` to the radius and clamp. Positive moves the eye away
    /// from the target.
    pub fn change_zoom(&mut self, delta: f32) {
        self.radius = self.clamp_radius(self.radius + delta);
        self.invalidate();
    }

    // -- Target ------------------------------------------------------------

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the target instantly.
    ///
    /// Does not cancel a running animation; its next tick overrides this
    /// value. A non-finite target is ignored.
    pub fn set_target(&mut self, target: Vec3) {
        if !finite_target(target) {
            return;
        }
        self.target = target;
        self.invalidate();
    }

    /// Glide the target to `target` over the configured duration.
    ///
    /// Calling this mid-flight restarts from the current interpolated
    /// target with elapsed time reset. A non-finite target is ignored and
    /// any running transition continues.
    pub fn set_target_animated(&mut self, target: Vec3) {
        if !finite_target(target) {
            return;
        }
        self.animation.start(self.target, target);
    }

    /// Like [`Self::set_target_animated`] with a new duration in seconds,
    /// which also applies to later transitions.
    pub fn set_target_animated_with_duration(
        &mut self,
        target: Vec3,
        duration: f32,
    ) {
        self.animation.set_duration(duration);
        self.set_target_animated(target);
    }

    /// Advance the target animation by one frame of `delta_time` seconds.
    pub fn advance_animation(&mut self, delta_time: f32) {
        if let Some(target) = self.animation.advance(delta_time) {
            self.target = target;
            self.invalidate();
        }
    }

    /// Whether a target transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Raw progress of the current transition in `[0, 1]`; 1.0 when idle.
    #[must_use]
    pub fn animation_progress(&self) -> f32 {
        self.animation.progress()
    }

    /// Destination of the current transition, if any.
    #[must_use]
    pub fn animation_end_target(&self) -> Option<Vec3> {
        self.animation.end_target()
    }

    /// Transition length in seconds.
    #[must_use]
    pub fn animation_duration(&self) -> f32 {
        self.animation.duration()
    }

    /// Set the transition length. Negative values are stored as 0.
    pub fn set_animation_duration(&mut self, duration: f32) {
        self.animation.set_duration(duration);
    }

    /// Curve used for target transitions.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.animation.easing()
    }

    /// Replace the curve used for target transitions.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.animation.set_easing(easing);
    }

    // -- Orientation -------------------------------------------------------

    /// Unit view direction (eye toward target).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Normalize and store the forward direction. The other axes are left
    /// untouched.
    pub fn set_forward(&mut self, forward: Vec3) -> Result<(), CameraError> {
        self.forward = checked_direction("forward", forward)?;
        self.invalidate();
        Ok(())
    }

    /// Unit left direction.
    #[must_use]
    pub fn left(&self) -> Vec3 {
        self.left
    }

    /// Normalize and store the left direction. The other axes are left
    /// untouched, so the next non-zero rotation re-derives the dependent
    /// axis from `forward` and may override a left that is not
    /// consistent with them.
    pub fn set_left(&mut self, left: Vec3) -> Result<(), CameraError> {
        self.left = checked_direction("left", left)?;
        self.invalidate();
        Ok(())
    }

    /// Unit up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Normalize and store the up direction. The other axes are left
    /// untouched, so the next non-zero rotation re-derives the dependent
    /// axis from `forward` and may override an up that is not
    /// consistent with them.
    pub fn set_up(&mut self, up: Vec3) -> Result<(), CameraError> {
        self.up = checked_direction("up", up)?;
        self.invalidate();
        Ok(())
    }

    /// Rotate `forward` and `left` about `up` by `delta` radians.
    /// A zero or non-finite angle leaves the basis untouched.
    pub fn rotate_horizontally(&mut self, delta: f32) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let rotation = Quat::from_axis_angle(self.up, delta);
        let forward = (rotation * self.forward)
            .try_normalize()
            .unwrap_or(self.forward);
        let left = self
            .up
            .cross(forward)
            .try_normalize()
            .unwrap_or_else(|| (rotation * self.left).normalize_or_zero());

        self.forward = forward;
        self.left = left;
        self.invalidate();
    }

    /// Rotate `forward` and `up` about `left` by `delta` radians.
    ///
    /// There is no pole clamp: the basis carries `up` along, so the camera
    /// can roll over the top freely. A zero or non-finite angle leaves the
    /// basis untouched.
    pub fn rotate_vertically(&mut self, delta: f32) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let rotation = Quat::from_axis_angle(self.left, delta);
        let forward = (rotation * self.forward)
            .try_normalize()
            .unwrap_or(self.forward);
        let up = forward
            .cross(self.left)
            .try_normalize()
            .unwrap_or_else(|| (rotation * self.up).normalize_or_zero());

        self.forward = forward;
        self.up = up;
        self.invalidate();
    }

    // -- Derived -----------------------------------------------------------

    /// Eye position: `target - forward * radius`.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.target - self.forward * self.radius
    }

    /// Right-handed look-at matrix from the eye toward the target.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        if let Some(view) = self.view_matrix.get() {
            return view;
        }
        let view = Mat4::look_at_rh(self.position(), self.target, self.up);
        self.view_matrix.set(Some(view));
        view
    }

    /// GPU-ready snapshot of the view matrix and eye data.
    #[must_use]
    pub fn uniform(&self) -> ViewUniform {
        ViewUniform::new(self.view_matrix(), self.position(), self.forward)
    }
}

fn finite_target(target: Vec3) -> bool {
    let finite = target.is_finite();
    if !finite {
        log::warn!("ignored non-finite camera target {target}");
    }
    finite
}

fn checked_direction(
    name: &'static str,
    v: Vec3,
) -> Result<Vec3, CameraError> {
    direction(name, v).inspect_err(|_| {
        log::warn!("rejected degenerate {name} vector {v}");
    })
}
