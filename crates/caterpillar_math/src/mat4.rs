//! 4x4 Matrix utilities for model transforms
//!
//! Matrices are column-major (`m[column][row]`), the layout WGSL expects for
//! `mat4x4<f32>` uniforms. Rotation angles are in degrees, because every
//! animation formula in the figure is written in degrees.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a translation matrix
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
}

/// Create a non-uniform scale matrix
pub fn scaling(factors: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = factors.x;
    m[1][1] = factors.y;
    m[2][2] = factors.z;
    m
}

/// Create a rotation of `angle_degrees` about `axis`.
///
/// Right-handed: a positive angle turns counter-clockwise when looking from
/// the tip of the axis towards the origin. The axis does not need to be unit
/// length. A zero axis yields the identity.
///
/// # Example
/// ```
/// use caterpillar_math::{mat4, Vec3};
/// // Spin the whole scene 30 degrees about +Y
/// let spin = mat4::rotation(30.0, Vec3::Y);
/// ```
pub fn rotation(angle_degrees: f32, axis: Vec3) -> Mat4 {
    let radians = angle_degrees.to_radians();
    let (s, c) = radians.sin_cos();

    // Axis-aligned rotations are written out so their entries are exact
    if axis.x != 0.0 && axis.y == 0.0 && axis.z == 0.0 {
        let s = if axis.x < 0.0 { -s } else { s };
        return [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
    }
    if axis.x == 0.0 && axis.y != 0.0 && axis.z == 0.0 {
        let s = if axis.y < 0.0 { -s } else { s };
        return [
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
    }
    if axis.x == 0.0 && axis.y == 0.0 && axis.z != 0.0 {
        let s = if axis.z < 0.0 { -s } else { s };
        return [
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
    }

    let len = axis.length();
    if len == 0.0 {
        return IDENTITY;
    }
    let Vec3 { x, y, z } = axis * (1.0 / len);
    let nc = 1.0 - c;

    [
        [x * x * nc + c, x * y * nc + z * s, z * x * nc - y * s, 0.0],
        [x * y * nc - z * s, y * y * nc + c, y * z * nc + x * s, 0.0],
        [z * x * nc + y * s, y * z * nc - x * s, z * z * nc + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (implicit w = 1)
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (implicit w = 0, translation ignored)
pub fn transform_direction(m: Mat4, d: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * d.x + m[1][0] * d.y + m[2][0] * d.z,
        m[0][1] * d.x + m[1][1] * d.y + m[2][1] * d.z,
        m[0][2] * d.x + m[1][2] * d.y + m[2][2] * d.z,
    )
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}
