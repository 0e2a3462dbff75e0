//! Animation clock and global rotation
//!
//! The whole figure is driven by one clock value in seconds. Pausing the
//! animation stops the clock, so the figure freezes in place and resumes
//! from the same pose.

use caterpillar_math::{mat4, Mat4, Vec3};

/// Default global rotation about +Y, in degrees
pub const DEFAULT_ROTATION_DEGREES: f32 = 30.0;

/// Seconds since the animation started, minus any time spent paused
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    seconds: f32,
    enabled: bool,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AnimationClock {
    /// Create a clock at zero
    pub fn new(enabled: bool) -> Self {
        Self { seconds: 0.0, enabled }
    }

    /// Current clock value in seconds
    #[inline]
    pub fn seconds(&self) -> f32 {
        self.seconds
    }

    /// Whether the clock is running
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance by `dt` seconds if running; returns the new clock value
    ///
    /// Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.enabled && dt.is_finite() && dt > 0.0 {
            self.seconds += dt;
        }
        self.seconds
    }

    /// Start or stop the clock
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Animation {}", if enabled { "on" } else { "off" });
        }
        self.enabled = enabled;
    }

    /// Flip the running state; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }
}

/// Rotation of the whole scene about +Y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalRotation {
    angle_degrees: f32,
}

impl Default for GlobalRotation {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_DEGREES)
    }
}

impl GlobalRotation {
    /// Create a rotation, wrapped into `[0, 360)`
    pub fn new(angle_degrees: f32) -> Self {
        Self { angle_degrees: wrap_degrees(angle_degrees) }
    }

    /// Current angle in degrees, in `[0, 360)`
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle_degrees
    }

    /// Set the angle (wrapped)
    pub fn set(&mut self, angle_degrees: f32) {
        self.angle_degrees = wrap_degrees(angle_degrees);
    }

    /// Turn by `delta_degrees` (wrapped)
    pub fn adjust(&mut self, delta_degrees: f32) {
        self.set(self.angle_degrees + delta_degrees);
    }

    /// Rotation matrix applied to every vertex after its model matrix
    pub fn matrix(&self) -> Mat4 {
        mat4::rotation(self.angle_degrees, Vec3::Y)
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_when_enabled() {
        let mut clock = AnimationClock::new(true);
        clock.advance(0.5);
        assert_eq!(clock.advance(0.25), 0.75);
    }

    #[test]
    fn test_clock_freezes_when_disabled() {
        let mut clock = AnimationClock::new(true);
        clock.advance(1.0);
        clock.set_enabled(false);
        clock.advance(5.0);
        assert_eq!(clock.seconds(), 1.0);

        // Resumes without a jump
        clock.set_enabled(true);
        clock.advance(0.5);
        assert_eq!(clock.seconds(), 1.5);
    }

    #[test]
    fn test_clock_ignores_bad_steps() {
        let mut clock = AnimationClock::default();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        clock.advance(f32::INFINITY);
        assert_eq!(clock.seconds(), 0.0);
    }

    #[test]
    fn test_toggle() {
        let mut clock = AnimationClock::default();
        assert!(clock.is_enabled());
        assert!(!clock.toggle());
        assert!(clock.toggle());
    }

    #[test]
    fn test_rotation_default() {
        assert_eq!(GlobalRotation::default().angle(), 30.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut r = GlobalRotation::new(350.0);
        r.adjust(20.0);
        assert!((r.angle() - 10.0).abs() < 1e-4);

        r.adjust(-30.0);
        assert!((r.angle() - 340.0).abs() < 1e-4);

        r.set(720.0);
        assert_eq!(r.angle(), 0.0);

        r.set(f32::NAN);
        assert_eq!(r.angle(), 0.0);
    }

    #[test]
    fn test_rotation_matrix_turns_about_y() {
        let r = GlobalRotation::new(90.0);
        let p = mat4::transform_point(r.matrix(), Vec3::Z);
        assert!((p - Vec3::X).length() < 1e-5);
    }
}
