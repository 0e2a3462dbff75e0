//! The animated caterpillar figure
//!
//! The figure is a pure function of the animation clock: every frame the
//! whole cube list is rebuilt from closed-form offsets and sine waves. There
//! is no state carried between frames and no parent/child hierarchy; parts
//! that move together (a segment, its spot and its legs) share the same
//! phase instead.
//!
//! Layout, head at -x:
//!
//! ```text
//!   antennae  spots
//!      \/   ▪ ▪ ▪ ▪ ▪ ▪ ▪ ▪
//!     [H]  [■][■][■][■][■][■][■][■]
//!           ╵ ╵ ╵ ╵ ╵ ╵ ╵ ╵   legs
//! ```

use std::f32::consts::PI;

use caterpillar_math::Vec3;

use crate::shape::{Color, Shape};
use crate::Transform;

/// Light green
pub const BODY_COLOR: Color = [0.4, 0.8, 0.2, 1.0];
/// Dark green spots and antennae
pub const PATTERN_COLOR: Color = [0.3, 0.6, 0.1, 1.0];
/// Orange/brown head
pub const FACE_COLOR: Color = [0.8, 0.5, 0.2, 1.0];
pub const EYE_COLOR: Color = [0.0, 0.0, 0.0, 1.0];

/// x of the first body segment
const SEGMENT_ORIGIN_X: f32 = -0.4;
/// Distance between neighbouring segments along x
const SEGMENT_SPACING: f32 = 0.12;
/// Resting height of the body segments
const BODY_Y: f32 = 0.1;
/// Vertical bob amplitude
const BOB_AMPLITUDE: f32 = 0.05;
/// Body wave frequency (rad/s) and per-segment phase lag (rad)
const WAVE_SPEED: f32 = 4.0;
const WAVE_LAG: f32 = 0.5;
/// Segment roll amplitude in degrees
const ROLL_DEGREES: f32 = 10.0;
/// Legs swing twice as fast as the body wave
const LEG_SPEED: f32 = 8.0;
const LEG_SWING_DEGREES: f32 = 20.0;
const LEG_Z: f32 = 0.06;

/// Appearance parameters of the figure
#[derive(Debug, Clone, PartialEq)]
pub struct CaterpillarParams {
    /// Number of body segments (each with a spot and a pair of legs)
    pub segment_count: usize,
    pub body_color: Color,
    pub pattern_color: Color,
    pub face_color: Color,
    pub eye_color: Color,
}

impl Default for CaterpillarParams {
    fn default() -> Self {
        Self {
            segment_count: 8,
            body_color: BODY_COLOR,
            pattern_color: PATTERN_COLOR,
            face_color: FACE_COLOR,
            eye_color: EYE_COLOR,
        }
    }
}

/// Largest segment count accepted from configuration
pub const MAX_SEGMENT_COUNT: usize = 64;

/// Number of cubes [`build_caterpillar`] emits for `segment_count` segments
///
/// Per segment: body, spot and two legs. Fixed: head, two eyes and two
/// antennae of two cubes each.
pub const fn cube_count(segment_count: usize) -> usize {
    segment_count * 4 + 7
}

/// Build the figure's cube list at `clock` seconds
///
/// Order: body/spot pairs, head, eyes, antennae (right then left, base then
/// tip), leg pairs.
pub fn build_caterpillar(clock: f32, params: &CaterpillarParams) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(cube_count(params.segment_count));

    for i in 0..params.segment_count {
        push_segment(&mut shapes, clock, i, params);
    }
    push_head(&mut shapes, clock, params.face_color);
    push_eyes(&mut shapes, params.eye_color);

    // Right antenna, then left; mirrored by the sign of the tilt
    push_antenna(&mut shapes, clock, Vec3::new(-0.52, 0.18, 0.03), 1.0, params.pattern_color);
    push_antenna(&mut shapes, clock, Vec3::new(-0.52, 0.18, -0.03), -1.0, params.pattern_color);

    for i in 0..params.segment_count {
        push_legs(&mut shapes, clock, i, params.body_color);
    }

    shapes
}

/// Phase of segment `index` (index -1 is the head)
fn wave_phase(clock: f32, index: f32) -> f32 {
    clock * WAVE_SPEED + index * WAVE_LAG
}

fn segment_x(index: f32) -> f32 {
    SEGMENT_ORIGIN_X + index * SEGMENT_SPACING
}

fn push_segment(shapes: &mut Vec<Shape>, clock: f32, i: usize, params: &CaterpillarParams) {
    let index = i as f32;
    let phase = wave_phase(clock, index);
    let bob = BOB_AMPLITUDE * phase.sin();
    let roll = ROLL_DEGREES * phase.sin();
    let x = segment_x(index);

    shapes.push(Shape::cube(
        params.body_color,
        Transform::identity()
            .translate(Vec3::new(x, bob + BODY_Y, 0.0))
            .rotate(roll, Vec3::Z)
            .scale_uniform(0.1),
    ));

    shapes.push(Shape::cube(
        params.pattern_color,
        Transform::identity()
            .translate(Vec3::new(x, bob + 0.15, 0.0))
            .rotate(roll, Vec3::Z)
            .scale_uniform(0.04),
    ));
}

fn push_head(shapes: &mut Vec<Shape>, clock: f32, color: Color) {
    // The head rides the wave one step ahead of the first segment
    let phase = wave_phase(clock, -1.0);

    shapes.push(Shape::cube(
        color,
        Transform::identity()
            .translate(Vec3::new(
                segment_x(-1.0),
                BODY_Y + BOB_AMPLITUDE * phase.sin(),
                0.0,
            ))
            .rotate(ROLL_DEGREES * phase.sin(), Vec3::Z)
            .scale_uniform(0.12),
    ));
}

fn push_eyes(shapes: &mut Vec<Shape>, color: Color) {
    for z in [0.05, -0.05] {
        shapes.push(Shape::cube(
            color,
            Transform::identity()
                .translate(Vec3::new(-0.53, 0.13, z))
                .scale_uniform(0.02),
        ));
    }
}

fn push_antenna(shapes: &mut Vec<Shape>, clock: f32, root: Vec3, side: f32, color: Color) {
    let base = Transform::identity()
        .translate(root)
        .rotate(side * (30.0 + 10.0 * (clock * 3.0).sin()), Vec3::Z)
        .scale(Vec3::new(0.01, 0.08, 0.01));

    // The tip sits on top of the base in the base's own (scaled) space
    let tip = Transform::from_matrix(base.matrix())
        .translate(Vec3::Y)
        .scale(Vec3::new(2.0, 0.1, 2.0));

    shapes.push(Shape::cube(color, base));
    shapes.push(Shape::cube(color, tip));
}

fn push_legs(shapes: &mut Vec<Shape>, clock: f32, i: usize, color: Color) {
    let index = i as f32;
    let bob = BOB_AMPLITUDE * wave_phase(clock, index).sin();
    let x = segment_x(index);
    let swing = clock * LEG_SPEED + index * WAVE_LAG;
    let leg_scale = Vec3::new(0.02, 0.06, 0.02);

    // Left and right legs swing in opposition
    for (z, offset) in [(LEG_Z, 0.0), (-LEG_Z, PI)] {
        shapes.push(Shape::cube(
            color,
            Transform::identity()
                .translate(Vec3::new(x, bob + 0.05, z))
                .rotate(LEG_SWING_DEGREES * (swing + offset).sin(), Vec3::X)
                .scale(leg_scale),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Primitive, ShapeKind};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// World position of a shape's local origin
    fn origin(shape: &Shape) -> Vec3 {
        shape.transform.transform_point(Vec3::ZERO)
    }

    #[test]
    fn test_default_figure_has_39_cubes() {
        let shapes = build_caterpillar(0.0, &CaterpillarParams::default());
        assert_eq!(shapes.len(), 39);
        assert_eq!(shapes.len(), cube_count(8));
        assert!(shapes.iter().all(|s| s.kind() == ShapeKind::Cube));
        assert!(shapes.iter().all(|s| s.primitive == Primitive::Cube));
    }

    #[test]
    fn test_segment_count_is_configurable() {
        let params = CaterpillarParams { segment_count: 3, ..Default::default() };
        assert_eq!(build_caterpillar(1.0, &params).len(), cube_count(3));

        let params = CaterpillarParams { segment_count: 0, ..Default::default() };
        assert_eq!(build_caterpillar(1.0, &params).len(), 7);
    }

    #[test]
    fn test_emission_order_and_colors() {
        let shapes = build_caterpillar(0.0, &CaterpillarParams::default());

        // Body/spot pairs
        for i in 0..8 {
            assert_eq!(shapes[i * 2].color, BODY_COLOR);
            assert_eq!(shapes[i * 2 + 1].color, PATTERN_COLOR);
        }
        assert_eq!(shapes[16].color, FACE_COLOR);
        assert_eq!(shapes[17].color, EYE_COLOR);
        assert_eq!(shapes[18].color, EYE_COLOR);
        for s in &shapes[19..23] {
            assert_eq!(s.color, PATTERN_COLOR);
        }
        for s in &shapes[23..] {
            assert_eq!(s.color, BODY_COLOR);
        }
    }

    #[test]
    fn test_body_at_rest_clock_zero() {
        let shapes = build_caterpillar(0.0, &CaterpillarParams::default());

        // First segment: phase 0 -> no bob, no roll
        let p = origin(&shapes[0]);
        assert!(approx_eq(p.x, -0.4) && approx_eq(p.y, 0.1) && approx_eq(p.z, 0.0),
            "got {:?}", p);

        // Its far corner is exactly one body-size away
        let corner = shapes[0].transform.transform_point(Vec3::ONE);
        assert!(approx_eq(corner.x, -0.3) && approx_eq(corner.y, 0.2) && approx_eq(corner.z, 0.1));
    }

    #[test]
    fn test_segment_bob_follows_wave() {
        let clock = 0.37;
        let shapes = build_caterpillar(clock, &CaterpillarParams::default());

        for i in 0..8 {
            let expected_y = 0.05 * (clock * 4.0 + i as f32 * 0.5).sin() + 0.1;
            let p = origin(&shapes[i * 2]);
            assert!(approx_eq(p.x, -0.4 + i as f32 * 0.12));
            assert!(approx_eq(p.y, expected_y), "segment {}: {} vs {}", i, p.y, expected_y);

            let spot = origin(&shapes[i * 2 + 1]);
            assert!(approx_eq(spot.y, expected_y + 0.05));
        }
    }

    #[test]
    fn test_head_placement() {
        let clock = 1.25;
        let shapes = build_caterpillar(clock, &CaterpillarParams::default());
        let head = origin(&shapes[16]);

        assert!(approx_eq(head.x, -0.52));
        assert!(approx_eq(head.y, 0.1 + 0.05 * (clock * 4.0 - 0.5).sin()));
    }

    #[test]
    fn test_eyes_are_static() {
        let a = build_caterpillar(0.0, &CaterpillarParams::default());
        let b = build_caterpillar(3.3, &CaterpillarParams::default());

        assert_eq!(a[17].transform, b[17].transform);
        assert_eq!(a[18].transform, b[18].transform);

        let left = origin(&a[17]);
        let right = origin(&a[18]);
        assert!(approx_eq(left.z, 0.05));
        assert!(approx_eq(right.z, -0.05));
        assert!(approx_eq(left.x, -0.53) && approx_eq(left.y, 0.13));
    }

    #[test]
    fn test_antennae_mirror() {
        let shapes = build_caterpillar(0.0, &CaterpillarParams::default());
        let right_base = &shapes[19];
        let left_base = &shapes[21];

        // At clock 0 the tilt is +/-30 degrees about Z
        let right_top = right_base.transform.transform_point(Vec3::Y);
        let left_top = left_base.transform.transform_point(Vec3::Y);
        let dx_right = right_top.x - (-0.52);
        let dx_left = left_top.x - (-0.52);

        // +30 about Z tips +Y towards -X
        assert!(approx_eq(dx_right, -0.08 * 30f32.to_radians().sin()));
        assert!(approx_eq(dx_left, -dx_right));
    }

    #[test]
    fn test_antenna_tip_sits_on_base() {
        let shapes = build_caterpillar(0.8, &CaterpillarParams::default());

        for (base, tip) in [(&shapes[19], &shapes[20]), (&shapes[21], &shapes[22])] {
            let base_top = base.transform.transform_point(Vec3::Y);
            let tip_origin = origin(tip);
            assert!((base_top - tip_origin).length() < EPSILON,
                "tip {:?} should start at base top {:?}", tip_origin, base_top);
        }
    }

    #[test]
    fn test_legs_swing_in_opposition() {
        let clock = 0.1;
        let shapes = build_caterpillar(clock, &CaterpillarParams::default());

        for i in 0..8 {
            let left = &shapes[23 + i * 2];
            let right = &shapes[23 + i * 2 + 1];

            let left_origin = origin(left);
            let right_origin = origin(right);
            assert!(approx_eq(left_origin.z, 0.06));
            assert!(approx_eq(right_origin.z, -0.06));
            assert!(approx_eq(left_origin.x, right_origin.x));

            // Leg tips swing about X: z offsets mirror each other
            let left_tip = left.transform.transform_point(Vec3::Y) - left_origin;
            let right_tip = right.transform.transform_point(Vec3::Y) - right_origin;
            assert!(approx_eq(left_tip.z, -right_tip.z));
            assert!(approx_eq(left_tip.y, right_tip.y));
        }
    }

    #[test]
    fn test_custom_colors() {
        let params = CaterpillarParams {
            body_color: [1.0, 0.0, 0.0, 1.0],
            ..Default::default()
        };
        let shapes = build_caterpillar(0.0, &params);
        assert_eq!(shapes[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(shapes.last().unwrap().color, [1.0, 0.0, 0.0, 1.0]);
    }
}
