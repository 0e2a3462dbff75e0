//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod frame_timer;
mod render;
mod window;

pub use frame_timer::{FrameStats, FrameTimer};
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
