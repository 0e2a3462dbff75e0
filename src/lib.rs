//! Caterpillar - an animated figure built from unit cubes
//!
//! Library half of the binary: configuration, input mapping and the window,
//! render and frame timing systems.

pub mod config;
pub mod input;
pub mod systems;
