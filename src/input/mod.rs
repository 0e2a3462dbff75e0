//! Input handling module
//!
//! Maps window-level keys to application actions. Canvas and rotation input
//! goes to `caterpillar_input::CanvasController`.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
