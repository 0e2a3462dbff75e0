//! Brush and canvas for click-placed primitives
//!
//! The brush holds the currently selected primitive type, color, size and
//! circle resolution. Stamping it at a canvas position produces a flat
//! shape; the canvas keeps every stamped shape until cleared.

use crate::shape::{Color, Shape, ShapeKind};

/// Smallest and largest brush size
pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 100.0;

/// Circle resolution bounds
pub const MIN_SEGMENTS: u32 = 3;
pub const MAX_SEGMENTS: u32 = 100;

/// Colors the brush cycles through
pub const COLOR_PRESETS: [Color; 6] = [
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

/// Current primitive settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub kind: ShapeKind,
    pub color: Color,
    /// Pixel size for points, `size / 200` NDC for triangles and circles
    pub size: f32,
    /// Circle segment count
    pub segments: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Point,
            color: COLOR_PRESETS[0],
            size: 5.0,
            segments: 5,
        }
    }
}

impl Brush {
    /// Create a brush with out-of-range values clamped
    pub fn new(kind: ShapeKind, color: Color, size: f32, segments: u32) -> Self {
        Self {
            kind,
            color,
            size: clamp_size(size),
            segments: segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS),
        }
    }

    /// Produce a shape at `position` (NDC)
    ///
    /// Only points, triangles and circles can be stamped; any other kind
    /// stamps a triangle.
    pub fn stamp(&self, position: [f32; 2]) -> Shape {
        match self.kind {
            ShapeKind::Point => Shape::point(position, self.size, self.color),
            ShapeKind::Circle => Shape::circle(position, self.size, self.segments, self.color),
            ShapeKind::Triangle | ShapeKind::Cube => {
                Shape::triangle(position, self.size, self.color)
            }
        }
    }

    /// Grow or shrink the brush
    pub fn adjust_size(&mut self, delta: f32) {
        self.size = clamp_size(self.size + delta);
    }

    /// Add or remove circle segments
    pub fn adjust_segments(&mut self, delta: i32) {
        let segments = (self.segments as i64 + delta as i64)
            .clamp(MIN_SEGMENTS as i64, MAX_SEGMENTS as i64);
        self.segments = segments as u32;
    }

    /// Switch to the next preset color; returns it
    ///
    /// A color outside the presets moves to the first preset.
    pub fn cycle_color(&mut self) -> Color {
        let next = COLOR_PRESETS
            .iter()
            .position(|c| *c == self.color)
            .map(|i| (i + 1) % COLOR_PRESETS.len())
            .unwrap_or(0);
        self.color = COLOR_PRESETS[next];
        self.color
    }
}

fn clamp_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_SIZE, MAX_SIZE)
    } else {
        MIN_SIZE
    }
}

/// Shapes placed by the user, kept across frames
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `brush` at `position` and keep the result
    pub fn place(&mut self, brush: &Brush, position: [f32; 2]) -> &Shape {
        let shape = brush.stamp(position);
        log::debug!(
            "Placed {} at ({:.3}, {:.3}), size {}",
            shape.kind(), position[0], position[1], brush.size
        );
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    /// All placed shapes, oldest first
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Remove every placed shape
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Primitive;

    #[test]
    fn test_default_brush() {
        let b = Brush::default();
        assert_eq!(b.kind, ShapeKind::Point);
        assert_eq!(b.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(b.size, 5.0);
        assert_eq!(b.segments, 5);
    }

    #[test]
    fn test_stamp_each_kind() {
        let mut b = Brush::default();
        let pos = [0.25, -0.5];

        match b.stamp(pos).primitive {
            Primitive::Point { position, size } => {
                assert_eq!(position, pos);
                assert_eq!(size, 5.0);
            }
            other => panic!("Expected point, got {:?}", other),
        }

        b.kind = ShapeKind::Circle;
        b.segments = 12;
        match b.stamp(pos).primitive {
            Primitive::Circle { segments, .. } => assert_eq!(segments, 12),
            other => panic!("Expected circle, got {:?}", other),
        }

        b.kind = ShapeKind::Triangle;
        assert_eq!(b.stamp(pos).kind(), ShapeKind::Triangle);
    }

    #[test]
    fn test_cube_brush_stamps_triangle() {
        let b = Brush { kind: ShapeKind::Cube, ..Default::default() };
        assert_eq!(b.stamp([0.0, 0.0]).kind(), ShapeKind::Triangle);
    }

    #[test]
    fn test_stamp_copies_color() {
        let mut b = Brush::default();
        let first = b.stamp([0.0, 0.0]);
        b.cycle_color();
        assert_eq!(first.color, COLOR_PRESETS[0]);
        assert_eq!(b.stamp([0.0, 0.0]).color, COLOR_PRESETS[1]);
    }

    #[test]
    fn test_size_and_segment_limits() {
        let mut b = Brush::default();
        b.adjust_size(-100.0);
        assert_eq!(b.size, MIN_SIZE);
        b.adjust_size(1000.0);
        assert_eq!(b.size, MAX_SIZE);

        b.adjust_segments(-50);
        assert_eq!(b.segments, MIN_SEGMENTS);
        b.adjust_segments(500);
        assert_eq!(b.segments, MAX_SEGMENTS);
    }

    #[test]
    fn test_new_clamps() {
        let b = Brush::new(ShapeKind::Circle, [0.0; 4], 0.0, 1);
        assert_eq!(b.size, MIN_SIZE);
        assert_eq!(b.segments, MIN_SEGMENTS);
    }

    #[test]
    fn test_cycle_color_wraps() {
        let mut b = Brush::default();
        for _ in 0..COLOR_PRESETS.len() {
            b.cycle_color();
        }
        assert_eq!(b.color, COLOR_PRESETS[0]);

        b.color = [0.1, 0.2, 0.3, 1.0];
        assert_eq!(b.cycle_color(), COLOR_PRESETS[0]);
    }

    #[test]
    fn test_canvas_keeps_shapes() {
        let mut canvas = Canvas::new();
        let brush = Brush::default();
        assert!(canvas.is_empty());

        canvas.place(&brush, [0.0, 0.0]);
        canvas.place(&brush, [0.5, 0.5]);
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.shapes()[1].kind(), ShapeKind::Point);

        canvas.clear();
        assert!(canvas.is_empty());
    }
}
