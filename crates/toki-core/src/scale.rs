//! Frame scale: target function plus an explicit spring integrator.
//!
//! The spring stores `(value, velocity, target)` and only moves when
//! [`Spring::tick`] is called, so animation runs on the render clock rather
//! than inside a reactive re-render.

use serde::{Deserialize, Serialize};

/// Scale of the focused frame.
pub const FOCUSED_SCALE: f32 = 2.5;
/// Smallest scale an unfocused frame shrinks to.
pub const MIN_SCALE: f32 = 0.6;
const SCALE_FALLOFF: f32 = 0.2;

/// Target scale for a frame at `distance_factor = |distance|`.
pub fn target_scale(is_focused: bool, distance_factor: f32) -> f32 {
    if is_focused {
        FOCUSED_SCALE
    } else {
        (1.0 - distance_factor.abs() * SCALE_FALLOFF).max(MIN_SCALE)
    }
}

/// Spring stiffness and damping.
///
/// Defaults (tension 280, friction 30, mass 1) give a damping ratio of about
/// 0.9: a step settles in roughly 0.3 s with under 1% overshoot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    /// Below this displacement *and* `rest_velocity`, the spring snaps to target.
    pub rest_displacement: f32,
    pub rest_velocity: f32,
}

impl SpringConfig {
    pub const DEFAULT: Self = Self {
        tension: 280.0,
        friction: 30.0,
        mass: 1.0,
        rest_displacement: 0.001,
        rest_velocity: 0.001,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Largest integration step. Frame times above this are sub-stepped.
const MAX_STEP_SECS: f32 = 0.001;
/// Frame-time cap so a stalled window doesn't integrate seconds at once.
const MAX_FRAME_SECS: f32 = 0.1;

/// A damped spring chasing `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub config: SpringConfig,
}

impl Spring {
    /// A spring at rest at `value`.
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance the spring by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.is_at_rest() || dt <= 0.0 {
            return;
        }

        let dt = dt.min(MAX_FRAME_SECS);
        let steps = (dt / MAX_STEP_SECS).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig { tension, friction, mass, .. } = self.config;
        let mass = mass.max(f32::EPSILON);

        for _ in 0..steps {
            // semi-implicit Euler
            let displacement = self.value - self.target;
            let accel = (-tension * displacement - friction * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_velocity
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_focused_scale_ignores_distance() {
        for d in [0.0, 0.4, 3.0, 50.0, -7.0] {
            assert_eq!(target_scale(true, d), FOCUSED_SCALE);
        }
    }

    #[test]
    fn test_unfocused_scale_range_and_floor() {
        assert_eq!(target_scale(false, 0.0), 1.0);
        assert!((target_scale(false, 1.0) - 0.8).abs() < 1e-6);
        assert_eq!(target_scale(false, 2.0), MIN_SCALE);
        assert_eq!(target_scale(false, 100.0), MIN_SCALE);

        let mut prev = target_scale(false, 0.0);
        for i in 1..=40 {
            let d = i as f32 * 0.05;
            let s = target_scale(false, d);
            assert!((MIN_SCALE..=1.0).contains(&s));
            if prev > MIN_SCALE {
                assert!(s < prev, "not strictly decreasing at {d}: {s} >= {prev}");
            }
            prev = s;
        }
    }

    #[test]
    fn test_unfocused_scale_uses_magnitude() {
        assert_eq!(target_scale(false, -1.5), target_scale(false, 1.5));
    }

    #[test]
    fn test_spring_settles_without_overshoot() {
        let mut spring = Spring::new(1.0, SpringConfig::default());
        spring.set_target(FOCUSED_SCALE);

        let mut peak: f32 = 1.0;
        let mut elapsed = 0.0;
        while elapsed < 0.5 {
            spring.tick(FRAME);
            peak = peak.max(spring.value);
            elapsed += FRAME;
        }

        let span = FOCUSED_SCALE - 1.0;
        assert!((spring.value - FOCUSED_SCALE).abs() < 0.02 * span, "value {}", spring.value);
        assert!(peak - FOCUSED_SCALE < 0.05 * span, "overshoot to {peak}");
    }

    #[test]
    fn test_spring_comes_to_rest() {
        let mut spring = Spring::new(2.5, SpringConfig::default());
        spring.set_target(0.6);
        for _ in 0..300 {
            spring.tick(FRAME);
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.value, 0.6);
    }

    #[test]
    fn test_spring_stable_with_long_frames() {
        let mut spring = Spring::new(0.6, SpringConfig::default());
        spring.set_target(2.5);
        for _ in 0..20 {
            spring.tick(0.25);
            assert!(spring.value.is_finite());
            assert!(spring.value < 2.6);
        }
        assert!((spring.value - 2.5).abs() < 0.01);
    }

    #[test]
    fn test_spring_zero_dt() {
        let mut spring = Spring::new(1.0, SpringConfig::default());
        assert!(spring.is_at_rest());
        spring.set_target(2.0);
        assert!(!spring.is_at_rest());
        spring.tick(0.0);
        assert_eq!(spring.value, 1.0);
    }
}
