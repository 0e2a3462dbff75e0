//! Model transform built from translate / rotate / scale calls
//!
//! Each call right-multiplies the current matrix, so calls read outermost
//! first: `identity().translate(p).rotate(a, axis).scale(s)` places the
//! scaled, rotated unit cube at `p`.

use caterpillar_math::{mat4, Mat4, Vec3};

/// A 4x4 model matrix with a chaining builder
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self { matrix: mat4::IDENTITY }
    }

    /// Start from an existing matrix (copied)
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// The composed model matrix
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Append a translation
    #[must_use]
    pub fn translate(self, offset: Vec3) -> Self {
        self.then(mat4::translation(offset))
    }

    /// Append a rotation of `angle_degrees` about `axis`
    #[must_use]
    pub fn rotate(self, angle_degrees: f32, axis: Vec3) -> Self {
        self.then(mat4::rotation(angle_degrees, axis))
    }

    /// Append a non-uniform scale
    #[must_use]
    pub fn scale(self, factors: Vec3) -> Self {
        self.then(mat4::scaling(factors))
    }

    /// Append a uniform scale
    #[must_use]
    pub fn scale_uniform(self, factor: f32) -> Self {
        self.scale(Vec3::splat(factor))
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(self.matrix, p)
    }

    fn then(self, local: Mat4) -> Self {
        Self { matrix: mat4::mul(self.matrix, local) }
    }
}
