//! Canvas Input Handling
//!
//! This crate turns winit keyboard and mouse events into brush edits,
//! scene rotation and click-to-place positions.

mod canvas_controller;

pub use canvas_controller::{cursor_to_ndc, CanvasController};
