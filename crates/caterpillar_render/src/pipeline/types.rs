//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use caterpillar_math::{mat4, Mat4};

/// Maps GL clip space (z in [-1, 1]) to wgpu clip space (z in [0, 1])
///
/// The figure is authored directly in clip space, with no projection, so
/// the depth range has to be remapped before it reaches the rasterizer.
#[rustfmt::skip]
pub const GL_TO_WGPU_CLIP: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.5, 0.0],
    [0.0, 0.0, 0.5, 1.0],
];

/// A world-space vertex with a flat color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position after the shape's model matrix
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the shape pass
/// Layout: 64 bytes (must match shape.wgsl ShapeUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShapeUniforms {
    /// Clip-space matrix applied to every vertex on the GPU
    pub view_matrix: [[f32; 4]; 4],
}

impl ShapeUniforms {
    /// Uniforms with only the clip-space depth remap
    pub fn clip_remap() -> Self {
        Self {
            view_matrix: GL_TO_WGPU_CLIP,
        }
    }
}

impl Default for ShapeUniforms {
    fn default() -> Self {
        Self::clip_remap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caterpillar_math::Vec3;
    use std::mem::size_of;

    #[test]
    fn test_vertex_size() {
        // 3 floats position + 4 floats color = 28 bytes
        assert_eq!(size_of::<Vertex>(), 28);
    }

    #[test]
    fn test_uniforms_size() {
        assert_eq!(size_of::<ShapeUniforms>(), 64);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
        assert_eq!(std::mem::align_of::<ShapeUniforms>(), 4);
    }

    #[test]
    fn test_clip_remap_depth_range() {
        let near = mat4::transform_point(GL_TO_WGPU_CLIP, Vec3::new(0.0, 0.0, -1.0));
        let far = mat4::transform_point(GL_TO_WGPU_CLIP, Vec3::new(0.0, 0.0, 1.0));
        assert!((near.z - 0.0).abs() < 1e-6);
        assert!((far.z - 1.0).abs() < 1e-6);

        // x and y pass through
        let p = mat4::transform_point(GL_TO_WGPU_CLIP, Vec3::new(0.3, -0.7, 0.0));
        assert!((p.x - 0.3).abs() < 1e-6 && (p.y + 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_default_uniforms_keep_xy() {
        let u = ShapeUniforms::default();
        let p = mat4::transform_point(u.view_matrix, Vec3::new(0.5, 0.5, 0.0));
        assert!((p.x - 0.5).abs() < 1e-6 && (p.y - 0.5).abs() < 1e-6);
        assert!((p.z - 0.5).abs() < 1e-6);
    }
}
