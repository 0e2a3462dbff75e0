//! Caterpillar Mathematics Library
//!
//! Vector, matrix and mesh helpers for the caterpillar renderer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - column-major 4x4 matrix, built with [`mat4::translation`],
//!   [`mat4::rotation`] and [`mat4::scaling`]
//!
//! ## Meshes
//!
//! - [`mesh::UNIT_CUBE_TRIANGLES`] - the cube every figure part is drawn from
//! - [`mesh::triangle_vertices`], [`mesh::circle_fan`], [`mesh::point_quad`] -
//!   flat canvas primitives

mod vec3;
pub mod mat4;
pub mod mesh;

pub use vec3::Vec3;
pub use mat4::Mat4;
