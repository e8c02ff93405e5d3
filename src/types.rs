use glam::{DMat4, DVec3};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl ViewUniform {
    pub fn new(view: DMat4, projection: DMat4, position: DVec3) -> Self {
        Self {
            view: view.as_mat4().to_cols_array_2d(),
            projection: projection.as_mat4().to_cols_array_2d(),
            position: position.as_vec3().to_array(),
            _pad: 0.0,
        }
    }
}
