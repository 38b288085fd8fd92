//! Camera follow: first-order exponential easing toward the focused frame.
//!
//! The follower runs every tick whether or not the index is moving, so the
//! camera keeps gliding after a gesture ends. It never overshoots; it only
//! approaches its target asymptotically.

use crate::config::CameraConfig;
use crate::lerp;

/// Where the camera is and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub x: f32,
    pub z: f32,
    /// Always `(x, 0, 0)`: the camera looks straight down -Z.
    pub look_at: [f32; 3],
}

impl CameraPose {
    pub fn position(&self) -> [f32; 3] {
        [self.x, 0.0, self.z]
    }
}

/// Eases the camera toward `current_index * frame_spacing` and `base_distance * zoom`.
#[derive(Clone, Debug)]
pub struct CameraFollower {
    x: f32,
    z: f32,
    config: CameraConfig,
    frame_spacing: f32,
}

/// Display rate the per-tick smoothing factor is tuned for.
const REFERENCE_HZ: f32 = 60.0;

impl CameraFollower {
    pub fn new(config: CameraConfig, frame_spacing: f32) -> Self {
        Self {
            x: config.initial_position[0],
            z: config.initial_position[2],
            config,
            frame_spacing,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            x: self.x,
            z: self.z,
            look_at: [self.x, 0.0, 0.0],
        }
    }

    /// Where the camera is heading for the given navigation state.
    pub fn target(&self, current_index: f32, zoom: f32) -> (f32, f32) {
        (current_index * self.frame_spacing, self.config.base_distance * zoom)
    }

    /// One display-frame step with the configured smoothing factor.
    pub fn step(&mut self, current_index: f32, zoom: f32) -> CameraPose {
        self.ease(current_index, zoom, self.config.smoothing)
    }

    /// Frame-rate independent step: equivalent to [`step`](Self::step) at 60 Hz.
    pub fn advance(&mut self, current_index: f32, zoom: f32, dt: f32) -> CameraPose {
        if dt <= 0.0 {
            return self.pose();
        }
        let alpha = 1.0 - (1.0 - self.config.smoothing).powf(dt * REFERENCE_HZ);
        self.ease(current_index, zoom, alpha.clamp(0.0, 1.0))
    }

    fn ease(&mut self, current_index: f32, zoom: f32, alpha: f32) -> CameraPose {
        let (target_x, target_z) = self.target(current_index, zoom);
        self.x = lerp(self.x, target_x, alpha);
        self.z = lerp(self.z, target_z, alpha);
        self.pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower() -> CameraFollower {
        CameraFollower::new(CameraConfig::default(), 4.0)
    }

    #[test]
    fn test_initial_pose() {
        let pose = follower().pose();
        assert_eq!(pose.position(), [0.0, 0.0, 5.0]);
        assert_eq!(pose.look_at, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_step_moves_five_percent() {
        let mut cam = follower();
        let pose = cam.step(1.0, 1.0);
        // x: 0 -> 4, z: 5 -> 4
        assert!((pose.x - 0.2).abs() < 1e-6);
        assert!((pose.z - 4.95).abs() < 1e-6);
        assert_eq!(pose.look_at, [pose.x, 0.0, 0.0]);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut cam = follower();
        let mut prev_x = 0.0;
        for _ in 0..600 {
            let pose = cam.step(3.0, 2.0);
            assert!(pose.x <= 12.0);
            assert!(pose.x >= prev_x);
            assert!(pose.z >= 5.0 && pose.z <= 8.0);
            prev_x = pose.x;
        }
        let pose = cam.pose();
        assert!((pose.x - 12.0).abs() < 1e-3);
        assert!((pose.z - 8.0).abs() < 1e-3);
    }

    #[test]
    fn test_keeps_moving_after_input_stops() {
        let mut cam = follower();
        let first = cam.step(5.0, 1.0);
        let second = cam.step(5.0, 1.0);
        assert!(second.x > first.x);
    }

    #[test]
    fn test_advance_matches_step_at_60hz() {
        let mut stepped = follower();
        let mut advanced = follower();
        for _ in 0..30 {
            stepped.step(2.0, 1.5);
            advanced.advance(2.0, 1.5, 1.0 / 60.0);
        }
        assert!((stepped.pose().x - advanced.pose().x).abs() < 1e-4);
        assert!((stepped.pose().z - advanced.pose().z).abs() < 1e-4);
    }

    #[test]
    fn test_advance_zero_dt_is_noop() {
        let mut cam = follower();
        assert_eq!(cam.advance(4.0, 1.0, 0.0), cam.pose());
        assert_eq!(cam.pose().x, 0.0);
    }

    #[test]
    fn test_target() {
        let cam = follower();
        assert_eq!(cam.target(2.0, 0.5), (8.0, 2.0));
    }
}
