//! Rendering pipeline components

pub mod types;
pub mod shape_pipeline;

pub use types::{Vertex, ShapeUniforms, GL_TO_WGPU_CLIP};
pub use shape_pipeline::{ShapePipeline, DEPTH_FORMAT, INITIAL_VERTEX_CAPACITY};
