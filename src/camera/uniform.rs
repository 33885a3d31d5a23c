use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer layout holding the view matrix and eye data.
pub struct ViewUniform {
    /// World-to-view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Unit forward direction (eye toward target).
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Vec3::ZERO, Vec3::NEG_Z)
    }
}

impl ViewUniform {
    /// Pack a view matrix, eye position and forward direction.
    #[must_use]
    pub fn new(view: Mat4, position: Vec3, forward: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            position: position.to_array(),
            _pad0: 0.0,
            forward: forward.to_array(),
            _pad1: 0.0,
        }
    }
}
