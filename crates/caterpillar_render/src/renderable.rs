//! Renderable geometry - bridges shapes to GPU vertices
//!
//! Each shape is tessellated on the CPU and its vertices are moved into clip
//! space by the layer's view matrix times the shape's model matrix, so the
//! whole frame becomes one flat vertex list and one draw call. The figure is
//! added with the scene rotation as its view; canvas shapes are added with
//! the identity view so they stay screen-aligned.

use caterpillar_core::{Primitive, Shape};
use caterpillar_math::mesh::{self, Triangle2, UNIT_CUBE_TRIANGLES, UNIT_CUBE_VERTEX_COUNT};
use caterpillar_math::{mat4, Mat4, Vec3};

use crate::pipeline::Vertex;

/// GPU-ready vertices for one frame
pub struct FrameGeometry {
    /// Vertices with view-space positions and flat colors, three per triangle
    pub vertices: Vec<Vertex>,
    /// Surface size in pixels, used to size points
    viewport: [f32; 2],
}

impl FrameGeometry {
    /// Create empty geometry for a surface of `viewport` pixels
    pub fn new(viewport: [f32; 2]) -> Self {
        Self {
            vertices: Vec::new(),
            viewport,
        }
    }

    /// Create geometry with pre-allocated capacity
    pub fn with_capacity(viewport: [f32; 2], vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            viewport,
        }
    }

    /// Collect geometry from a list of shapes
    pub fn from_shapes(shapes: &[Shape], viewport: [f32; 2]) -> Self {
        let capacity = shapes.iter().map(vertex_count_of).sum();
        let mut result = Self::with_capacity(viewport, capacity);
        result.add_shapes(shapes);
        result
    }

    /// Add several shapes in order
    pub fn add_shapes(&mut self, shapes: &[Shape]) {
        self.add_shapes_with_view(shapes, mat4::IDENTITY);
    }

    /// Add several shapes, each seen through `view`
    pub fn add_shapes_with_view(&mut self, shapes: &[Shape], view: Mat4) {
        for shape in shapes {
            self.add_shape_with_view(shape, view);
        }
    }

    /// Add a shape's geometry to this collection
    pub fn add_shape(&mut self, shape: &Shape) {
        self.add_shape_with_view(shape, mat4::IDENTITY);
    }

    /// Add a shape with `view` applied after its model matrix
    pub fn add_shape_with_view(&mut self, shape: &Shape, view: Mat4) {
        let model = mat4::mul(view, shape.transform.matrix());

        match shape.primitive {
            Primitive::Cube => {
                for tri in &UNIT_CUBE_TRIANGLES {
                    for corner in tri {
                        self.push(model, Vec3::from(*corner), shape.color);
                    }
                }
            }
            Primitive::Point { position, size } => {
                for tri in &mesh::point_quad(position, size, self.viewport) {
                    self.push_flat(model, tri, shape.color);
                }
            }
            Primitive::Triangle { position, size } => {
                self.push_flat(model, &mesh::triangle_vertices(position, size), shape.color);
            }
            Primitive::Circle { position, size, segments } => {
                for tri in &mesh::circle_fan(position, size, segments) {
                    self.push_flat(model, tri, shape.color);
                }
            }
        }
    }

    fn push_flat(&mut self, model: Mat4, tri: &Triangle2, color: [f32; 4]) {
        for [x, y] in tri {
            self.push(model, Vec3::new(*x, *y, 0.0), color);
        }
    }

    fn push(&mut self, model: Mat4, local: Vec3, color: [f32; 4]) {
        let world = mat4::transform_point(model, local);
        self.vertices.push(Vertex::new(world.to_array(), color));
    }

    /// Change the surface size used for subsequent points
    pub fn set_viewport(&mut self, viewport: [f32; 2]) {
        self.viewport = viewport;
    }

    /// Clear all geometry, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Vertices a shape tessellates into
pub fn vertex_count_of(shape: &Shape) -> usize {
    match shape.primitive {
        Primitive::Cube => UNIT_CUBE_VERTEX_COUNT,
        Primitive::Point { .. } => 6,
        Primitive::Triangle { .. } => 3,
        Primitive::Circle { segments, .. } => segments.max(mesh::MIN_CIRCLE_SEGMENTS) as usize * 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caterpillar_core::{build_caterpillar, CaterpillarParams, Transform};

    const VIEWPORT: [f32; 2] = [800.0, 600.0];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_frame_geometry_new() {
        let geom = FrameGeometry::new(VIEWPORT);
        assert_eq!(geom.vertex_count(), 0);
        assert_eq!(geom.triangle_count(), 0);
    }

    #[test]
    fn test_cube_is_36_vertices() {
        let mut geom = FrameGeometry::new(VIEWPORT);
        geom.add_shape(&Shape::cube(RED, Transform::identity()));
        assert_eq!(geom.vertex_count(), 36);
        assert_eq!(geom.triangle_count(), 12);
        assert!(geom.vertices.iter().all(|v| v.color == RED));
    }

    #[test]
    fn test_cube_transform_applied() {
        let t = Transform::identity()
            .translate(Vec3::new(10.0, 0.0, 0.0))
            .scale_uniform(0.5);
        let geom = FrameGeometry::from_shapes(&[Shape::cube(RED, t)], VIEWPORT);

        for v in &geom.vertices {
            assert!(v.position[0] >= 10.0 && v.position[0] <= 10.5,
                "Vertex x should be within [10, 10.5], got {}", v.position[0]);
            assert!(v.position[1] >= 0.0 && v.position[1] <= 0.5);
        }
    }

    #[test]
    fn test_flat_shapes_lie_in_z_zero() {
        let shapes = [
            Shape::point([0.1, 0.1], 10.0, RED),
            Shape::triangle([0.2, 0.2], 10.0, RED),
            Shape::circle([0.3, 0.3], 10.0, 8, RED),
        ];
        let geom = FrameGeometry::from_shapes(&shapes, VIEWPORT);

        assert_eq!(geom.vertex_count(), 6 + 3 + 24);
        assert!(geom.vertices.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn test_vertex_count_of_matches_tessellation() {
        let shapes = [
            Shape::cube(RED, Transform::identity()),
            Shape::point([0.0, 0.0], 5.0, RED),
            Shape::triangle([0.0, 0.0], 5.0, RED),
            Shape::circle([0.0, 0.0], 5.0, 1, RED),
        ];
        for shape in &shapes {
            let geom = FrameGeometry::from_shapes(std::slice::from_ref(shape), VIEWPORT);
            assert_eq!(geom.vertex_count(), vertex_count_of(shape), "{:?}", shape.kind());
        }
    }

    #[test]
    fn test_default_figure_vertex_count() {
        let shapes = build_caterpillar(0.0, &CaterpillarParams::default());
        let geom = FrameGeometry::from_shapes(&shapes, VIEWPORT);
        assert_eq!(geom.vertex_count(), 39 * 36);
    }

    #[test]
    fn test_clear_keeps_viewport() {
        let mut geom = FrameGeometry::from_shapes(&[Shape::point([0.0, 0.0], 8.0, RED)], VIEWPORT);
        let before = geom.vertices.clone();
        geom.clear();
        assert_eq!(geom.vertex_count(), 0);

        geom.add_shape(&Shape::point([0.0, 0.0], 8.0, RED));
        assert_eq!(geom.vertices, before);
    }

    #[test]
    fn test_view_applies_after_model() {
        let cube = Shape::cube(RED, Transform::identity().translate(Vec3::new(0.5, 0.0, 0.0)));
        let mut geom = FrameGeometry::new(VIEWPORT);
        geom.add_shape_with_view(&cube, mat4::rotation(90.0, Vec3::Y));

        // The cube's x range [0.5, 1.5] turns into z range [-1.5, -0.5]
        for v in &geom.vertices {
            assert!(v.position[2] <= -0.5 + 1e-5 && v.position[2] >= -1.5 - 1e-5,
                "got {:?}", v.position);
        }
    }

    #[test]
    fn test_canvas_layer_ignores_scene_rotation() {
        let rotation = mat4::rotation(30.0, Vec3::Y);
        let stamp = Shape::triangle([0.5, 0.5], 20.0, RED);

        let mut geom = FrameGeometry::new(VIEWPORT);
        geom.add_shapes_with_view(&build_caterpillar(0.0, &CaterpillarParams::default()), rotation);
        let overlay_start = geom.vertex_count();
        geom.add_shapes(&[stamp]);

        // Anchor stays at the click position and the width stays size / 200
        let tri = &geom.vertices[overlay_start..];
        assert_eq!(tri[0].position, [0.5, 0.5, 0.0]);
        assert!((tri[1].position[0] - tri[0].position[0] - 0.1).abs() < 1e-6);
        assert!((tri[2].position[1] - tri[0].position[1] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_canvas_point_keeps_pixel_width_at_right_angle() {
        let mut geom = FrameGeometry::new([800.0, 800.0]);
        geom.add_shapes_with_view(
            &[Shape::cube(RED, Transform::identity())],
            mat4::rotation(90.0, Vec3::Y),
        );
        let overlay_start = geom.vertex_count();
        geom.add_shapes(&[Shape::point([-0.25, 0.5], 8.0, RED)]);

        // 8 px on an 800 px surface spans 0.02 NDC, centered on the click
        let quad = &geom.vertices[overlay_start..];
        assert!((quad[1].position[0] - quad[0].position[0] - 0.02).abs() < 1e-6);
        assert!((quad[0].position[0] + 0.26).abs() < 1e-6);
    }

    #[test]
    fn test_point_size_follows_viewport() {
        let point = Shape::point([0.0, 0.0], 10.0, RED);
        let mut geom = FrameGeometry::new([1000.0, 1000.0]);
        geom.add_shape(&point);
        let small = geom.vertices[2].position[0] - geom.vertices[0].position[0];

        geom.clear();
        geom.set_viewport([500.0, 500.0]);
        geom.add_shape(&point);
        let large = geom.vertices[2].position[0] - geom.vertices[0].position[0];

        assert!((large - small * 2.0).abs() < 1e-6);
    }
}
