//! Primitive meshes
//!
//! The unit cube every figure part is drawn from, and the flat 2D shapes the
//! brush stamps onto the canvas. 2D positions are normalized device
//! coordinates; sizes follow the canvas convention where a size of 200 spans
//! one NDC unit.

/// One triangle as three xyz corners
pub type Triangle3 = [[f32; 3]; 3];

/// One flat triangle as three xy corners
pub type Triangle2 = [[f32; 2]; 3];

/// The unit cube `[0, 1]^3` as 12 triangles, two per face
pub const UNIT_CUBE_TRIANGLES: [Triangle3; 12] = [
    // front (z = 0)
    [[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
    // back (z = 1)
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]],
    [[0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
    // top (y = 1)
    [[0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]],
    [[0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
    // bottom (y = 0)
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]],
    [[0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
    // left (x = 0)
    [[0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]],
    [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 1.0]],
    // right (x = 1)
    [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]],
    [[1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
];

/// Number of vertices in the unit cube mesh
pub const UNIT_CUBE_VERTEX_COUNT: usize = UNIT_CUBE_TRIANGLES.len() * 3;

/// Canvas size units per NDC unit
pub const SIZE_PER_NDC_UNIT: f32 = 200.0;

/// Fewest segments a circle can be drawn with
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;

/// Right triangle with its right angle at `origin`, legs along +x and +y
pub fn triangle_vertices(origin: [f32; 2], size: f32) -> Triangle2 {
    let d = size / SIZE_PER_NDC_UNIT;
    let [x, y] = origin;
    [[x, y], [x + d, y], [x, y + d]]
}

/// Triangle fan approximating a circle of radius `size / 200`
///
/// Produces exactly `segments` triangles (at least [`MIN_CIRCLE_SEGMENTS`]),
/// each `[center, rim(a), rim(a + step)]`.
pub fn circle_fan(center: [f32; 2], size: f32, segments: u32) -> Vec<Triangle2> {
    let segments = segments.max(MIN_CIRCLE_SEGMENTS);
    let radius = size / SIZE_PER_NDC_UNIT;
    let step = 360.0 / segments as f32;
    let rim = |degrees: f32| {
        let (s, c) = degrees.to_radians().sin_cos();
        [center[0] + c * radius, center[1] + s * radius]
    };

    (0..segments)
        .map(|i| {
            let a = i as f32 * step;
            [center, rim(a), rim(a + step)]
        })
        .collect()
}

/// Square `size_px` pixels wide centred on `center`, as two triangles
///
/// `viewport` is the surface size in pixels. A degenerate viewport yields a
/// zero-area quad.
pub fn point_quad(center: [f32; 2], size_px: f32, viewport: [f32; 2]) -> [Triangle2; 2] {
    let hx = if viewport[0] > 0.0 { size_px / viewport[0] } else { 0.0 };
    let hy = if viewport[1] > 0.0 { size_px / viewport[1] } else { 0.0 };
    let [x, y] = center;

    let bl = [x - hx, y - hy];
    let br = [x + hx, y - hy];
    let tr = [x + hx, y + hy];
    let tl = [x - hx, y + hy];

    [[bl, br, tr], [bl, tr, tl]]
}
