//! Canvas controller for the click-to-place toy
//!
//! Controls:
//! - Left click: place the current brush shape under the cursor
//! - 1/2/3: select point / triangle / circle
//! - [ / ]: shrink / grow the brush
//! - - / =: fewer / more circle segments
//! - C: cycle brush color
//! - Left/Right arrows (held) or mouse wheel: spin the scene about +Y

use caterpillar_core::{Brush, GlobalRotation, ShapeKind};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Convert a cursor position in physical pixels to normalized device
/// coordinates (`[-1, 1]`, +y up)
///
/// A zero-sized surface maps every position to the origin.
pub fn cursor_to_ndc(x: f64, y: f64, width: u32, height: u32) -> [f32; 2] {
    if width == 0 || height == 0 {
        return [0.0, 0.0];
    }
    let half_w = width as f64 / 2.0;
    let half_h = height as f64 / 2.0;
    [((x - half_w) / half_w) as f32, ((half_h - y) / half_h) as f32]
}

/// Canvas controller for handling input
pub struct CanvasController {
    // Cursor state
    cursor: Option<(f64, f64)>,
    viewport: (u32, u32),

    // Rotation state
    rotate_left: bool,
    rotate_right: bool,
    pending_rotation: f32,

    // Brush edits queued until the next update
    pending_kind: Option<ShapeKind>,
    pending_size: f32,
    pending_segments: i32,
    pending_color_cycles: u32,

    // Configuration
    pub rotation_speed: f32,  // Degrees per second while an arrow is held
    pub scroll_step: f32,     // Degrees per wheel line
    pub size_step: f32,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    pub fn new() -> Self {
        Self {
            cursor: None,
            viewport: (0, 0),

            rotate_left: false,
            rotate_right: false,
            pending_rotation: 0.0,

            pending_kind: None,
            pending_size: 0.0,
            pending_segments: 0,
            pending_color_cycles: 0,

            rotation_speed: 90.0,
            scroll_step: 5.0,
            size_step: 1.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true when the key is one this controller handles.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowLeft => { self.rotate_left = pressed; true }
            KeyCode::ArrowRight => { self.rotate_right = pressed; true }
            // Everything below acts once per press
            _ if !pressed => matches!(
                key,
                KeyCode::Digit1 | KeyCode::Digit2 | KeyCode::Digit3
                    | KeyCode::BracketLeft | KeyCode::BracketRight
                    | KeyCode::Minus | KeyCode::Equal | KeyCode::KeyC
            ),
            KeyCode::Digit1 => { self.pending_kind = Some(ShapeKind::Point); true }
            KeyCode::Digit2 => { self.pending_kind = Some(ShapeKind::Triangle); true }
            KeyCode::Digit3 => { self.pending_kind = Some(ShapeKind::Circle); true }
            KeyCode::BracketLeft => { self.pending_size -= self.size_step; true }
            KeyCode::BracketRight => { self.pending_size += self.size_step; true }
            KeyCode::Minus => { self.pending_segments -= 1; true }
            KeyCode::Equal => { self.pending_segments += 1; true }
            KeyCode::KeyC => { self.pending_color_cycles += 1; true }
            _ => false,
        }
    }

    /// Track the cursor (physical pixels)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    /// Forget the cursor when it leaves the window
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Record the surface size used for coordinate conversion
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Process mouse button input
    ///
    /// Returns the NDC position to place a shape at on a left press with the
    /// cursor inside the window.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> Option<[f32; 2]> {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        let (x, y) = self.cursor?;
        Some(cursor_to_ndc(x, y, self.viewport.0, self.viewport.1))
    }

    /// Process mouse wheel input (in lines)
    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_rotation += lines * self.scroll_step;
    }

    /// Apply queued input to the brush and the scene rotation
    pub fn update(&mut self, brush: &mut Brush, rotation: &mut GlobalRotation, dt: f32) {
        // Held arrows spin continuously, the wheel in steps
        let spin = (self.rotate_right as i32 - self.rotate_left as i32) as f32;
        let delta = spin * self.rotation_speed * dt + self.pending_rotation;
        if delta != 0.0 {
            rotation.adjust(delta);
        }

        if let Some(kind) = self.pending_kind.take() {
            brush.kind = kind;
            log::info!("Brush: {}", kind);
        }
        if self.pending_size != 0.0 {
            brush.adjust_size(self.pending_size);
        }
        if self.pending_segments != 0 {
            brush.adjust_segments(self.pending_segments);
        }
        for _ in 0..self.pending_color_cycles {
            brush.cycle_color();
        }

        // Reset pending input
        self.pending_rotation = 0.0;
        self.pending_size = 0.0;
        self.pending_segments = 0;
        self.pending_color_cycles = 0;
    }

    /// Builder: set held-arrow rotation speed (degrees per second)
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Builder: set rotation per wheel line (degrees)
    pub fn with_scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    /// Builder: set brush size change per key press
    pub fn with_size_step(mut self, step: f32) -> Self {
        self.size_step = step;
        self
    }
}
