use glam::{Mat4, Vec3};

pub const MAX_POINT_LIGHTS: usize = 14;

/// Interleaved scene vertex: position, normal, texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];
    const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Same stride, position only (lamps ignore normals and UVs)
    pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::POSITION_ATTRIBUTES,
        }
    }
}

/// Per-instance model matrix for lamp cubes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LampInstance {
    pub model: [[f32; 4]; 4],
}

impl LampInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4
    ];

    pub fn new(position: Vec3, scale: f32) -> Self {
        let model = Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(scale));
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LampInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame transforms for both pipelines
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub _pad: f32,
}

// Light blocks mirror the WGSL structs in shaders/lighting.wgsl: every vec3 is
// padded to 16 bytes, scalars fill the padding slot where one follows.

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    pub direction: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub _pad3: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub constant: f32,
    pub ambient: [f32; 3],
    pub linear: f32,
    pub diffuse: [f32; 3],
    pub quadratic: f32,
    pub specular: [f32; 3],
    pub _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    pub position: [f32; 3],
    pub constant: f32,
    pub direction: [f32; 3],
    pub linear: f32,
    pub ambient: [f32; 3],
    pub quadratic: f32,
    pub diffuse: [f32; 3],
    pub cut_off: f32,
    pub specular: [f32; 3],
    pub outer_cut_off: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub directional: DirectionalLightUniform,
    pub spot: SpotLightUniform,
    pub points: [PointLightUniform; MAX_POINT_LIGHTS],
    pub point_count: u32,
    pub shininess: f32,
    pub _pad: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex_stride() {
        assert_eq!(size_of::<Vertex>(), 32);
        assert_eq!(Vertex::layout().array_stride, 32);
        assert_eq!(Vertex::position_layout().array_stride, 32);
    }

    #[test]
    fn test_uniform_sizes_match_wgsl_layout() {
        assert_eq!(size_of::<FrameUniforms>(), 208);
        assert_eq!(size_of::<DirectionalLightUniform>(), 64);
        assert_eq!(size_of::<PointLightUniform>(), 64);
        assert_eq!(size_of::<SpotLightUniform>(), 80);
        assert_eq!(size_of::<LightingUniform>(), 1056);
        assert_eq!(size_of::<LightingUniform>() % 16, 0);
    }

    #[test]
    fn test_lamp_instance_translates_and_scales() {
        let instance = LampInstance::new(Vec3::new(1.0, 2.0, 3.0), 0.2);
        let model = Mat4::from_cols_array_2d(&instance.model);

        let corner = model.transform_point3(Vec3::splat(0.5));
        assert!(corner.abs_diff_eq(Vec3::new(1.1, 2.1, 3.1), 1e-5));
    }
}
