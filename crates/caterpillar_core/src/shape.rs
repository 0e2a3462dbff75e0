//! Drawable shapes
//!
//! A shape is a primitive, a flat RGBA color and a model transform. Cubes
//! are the unit cube moved into place by the transform; the flat primitives
//! carry their own canvas position and usually keep an identity transform.

use serde::{Serialize, Deserialize};

use crate::Transform;

/// RGBA color, each channel in `[0, 1]`
pub type Color = [f32; 4];

/// Type tag of a shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Point,
    Triangle,
    Circle,
    Cube,
}

impl ShapeKind {
    /// Lowercase name, as used in config files
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Cube => "cube",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry of a shape, with its per-kind data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Screen-aligned square `size` pixels wide
    Point { position: [f32; 2], size: f32 },
    /// Right triangle with legs `size / 200` long
    Triangle { position: [f32; 2], size: f32 },
    /// Triangle-fan circle of radius `size / 200`
    Circle { position: [f32; 2], size: f32, segments: u32 },
    /// The unit cube
    Cube,
}

/// A primitive with color and transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub primitive: Primitive,
    pub color: Color,
    pub transform: Transform,
}

impl Shape {
    /// A unit cube placed by `transform`
    pub fn cube(color: Color, transform: Transform) -> Self {
        Self { primitive: Primitive::Cube, color, transform }
    }

    /// A point at `position` (NDC)
    pub fn point(position: [f32; 2], size: f32, color: Color) -> Self {
        Self::flat(Primitive::Point { position, size }, color)
    }

    /// A triangle anchored at `position` (NDC)
    pub fn triangle(position: [f32; 2], size: f32, color: Color) -> Self {
        Self::flat(Primitive::Triangle { position, size }, color)
    }

    /// A circle centred on `position` (NDC)
    pub fn circle(position: [f32; 2], size: f32, segments: u32, color: Color) -> Self {
        Self::flat(Primitive::Circle { position, size, segments }, color)
    }

    fn flat(primitive: Primitive, color: Color) -> Self {
        Self { primitive, color, transform: Transform::identity() }
    }

    /// The type tag of this shape
    pub fn kind(&self) -> ShapeKind {
        match self.primitive {
            Primitive::Point { .. } => ShapeKind::Point,
            Primitive::Triangle { .. } => ShapeKind::Triangle,
            Primitive::Circle { .. } => ShapeKind::Circle,
            Primitive::Cube => ShapeKind::Cube,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let white = [1.0; 4];
        assert_eq!(Shape::point([0.0, 0.0], 5.0, white).kind(), ShapeKind::Point);
        assert_eq!(Shape::triangle([0.0, 0.0], 5.0, white).kind(), ShapeKind::Triangle);
        assert_eq!(Shape::circle([0.0, 0.0], 5.0, 8, white).kind(), ShapeKind::Circle);
        assert_eq!(Shape::cube(white, Transform::identity()).kind(), ShapeKind::Cube);
    }

    #[test]
    fn test_flat_shapes_use_identity_transform() {
        let s = Shape::circle([0.5, 0.5], 10.0, 6, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(s.transform, Transform::identity());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ShapeKind::Circle.to_string(), "circle");
        assert_eq!(format!("{}", ShapeKind::Cube), "cube");
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            kind: ShapeKind,
        }
        let h: Holder = toml::from_str("kind = \"triangle\"").unwrap();
        assert_eq!(h.kind, ShapeKind::Triangle);
    }
}
