//! Core types for the caterpillar renderer
//!
//! This crate provides everything that decides *what* is drawn:
//!
//! - [`Transform`] - Model matrix built from translate / rotate / scale calls
//! - [`Shape`] - A primitive with a flat color and a transform
//! - [`build_caterpillar`] - The animated figure as a cube list
//! - [`AnimationClock`] - The single clock driving the animation
//! - [`GlobalRotation`] - Scene rotation about +Y
//! - [`Brush`] / [`Canvas`] - Click-placed points, triangles and circles

mod transform;
mod shape;
mod caterpillar;
mod animation;
mod brush;

pub use transform::Transform;
pub use shape::{Color, Primitive, Shape, ShapeKind};
pub use caterpillar::{
    build_caterpillar, cube_count, CaterpillarParams, MAX_SEGMENT_COUNT,
    BODY_COLOR, PATTERN_COLOR, FACE_COLOR, EYE_COLOR,
};
pub use animation::{AnimationClock, GlobalRotation, DEFAULT_ROTATION_DEGREES};
pub use brush::{Brush, Canvas, COLOR_PRESETS};

// Re-export commonly used types from caterpillar_math for convenience
pub use caterpillar_math::{Mat4, Vec3};
