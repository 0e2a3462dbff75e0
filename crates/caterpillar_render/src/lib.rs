//! Caterpillar Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the figure and the
//! placed canvas shapes.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Flat-colored triangle pass with depth test
//! - [`renderable::FrameGeometry`] - Converts shapes to one frame of vertices

pub mod context;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use caterpillar_core::{Shape, Primitive, Transform, Color};

pub use renderable::{FrameGeometry, vertex_count_of};
