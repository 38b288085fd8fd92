//! Gallery tunables, loadable from RON.
//!
//! Every section and field is optional; anything missing falls back to the
//! defaults below. Example `gallery.ron`:
//!
//! ```ron
//! (
//!     focus_year: Some(2026),
//!     navigation: (wheel_mode: Zoom, pointer_sensitivity: 120.0),
//!     camera: (smoothing: 0.08),
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ConfigError;
use crate::scale::SpringConfig;

/// What the scroll wheel does.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WheelMode {
    /// Multiply zoom by `1 ± zoom_step`; the index is untouched.
    #[default]
    Zoom,
    /// Move one frame per wheel notch.
    Step,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub wheel_mode: WheelMode,
    /// Mouse pixels per index unit while dragging.
    pub pointer_sensitivity: f32,
    /// Touch pixels per index unit while dragging.
    pub touch_sensitivity: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Wheel zoom factor is `1 + zoom_step` out, `1 - zoom_step` in.
    pub zoom_step: f32,
    pub initial_zoom: f32,
    /// Pointer travel (pixels) below which a press/release counts as a tap.
    pub tap_slop_px: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wheel_mode: WheelMode::Zoom,
            pointer_sensitivity: 100.0,
            touch_sensitivity: 80.0,
            zoom_min: 0.1,
            zoom_max: 10.0,
            zoom_step: 0.1,
            initial_zoom: 1.0,
            tap_slop_px: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera distance from the frame plane at zoom 1.0.
    pub base_distance: f32,
    /// Fraction of the remaining distance covered per 60 Hz tick.
    pub smoothing: f32,
    pub initial_position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base_distance: 4.0,
            smoothing: 0.05,
            initial_position: [0.0, 0.0, 5.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// World units between neighbouring frames along X.
    pub frame_spacing: f32,
    /// How far back (per index unit of distance) off-focus frames recede.
    pub depth_factor: f32,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            frame_spacing: 4.0,
            depth_factor: 1.5,
            frame_width: 3.0,
            frame_height: 4.0,
        }
    }
}

/// Top-level gallery configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Start on the first event of this year, if any.
    pub focus_year: Option<i32>,
    pub navigation: NavigationConfig,
    pub camera: CameraConfig,
    pub layout: LayoutConfig,
    pub spring: SpringConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            focus_year: Some(2024),
            navigation: NavigationConfig::default(),
            camera: CameraConfig::default(),
            layout: LayoutConfig::default(),
            spring: SpringConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a RON document.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Reject tunables that would break navigation maths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_finite()?;

        let nav = &self.navigation;
        if nav.pointer_sensitivity <= 0.0 || nav.touch_sensitivity <= 0.0 {
            return Err(ConfigError::Invalid("drag sensitivity must be positive".into()));
        }
        if nav.zoom_min <= 0.0 || nav.zoom_min > nav.zoom_max {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds must satisfy 0 < min <= max (got {}..{})",
                nav.zoom_min, nav.zoom_max
            )));
        }
        if nav.initial_zoom <= 0.0 {
            return Err(ConfigError::Invalid("initial_zoom must be positive".into()));
        }
        if !(0.0..1.0).contains(&nav.zoom_step) {
            return Err(ConfigError::Invalid("zoom_step must be in [0, 1)".into()));
        }
        if nav.tap_slop_px < 0.0 {
            return Err(ConfigError::Invalid("tap_slop_px must not be negative".into()));
        }
        if !(self.camera.smoothing > 0.0 && self.camera.smoothing <= 1.0) {
            return Err(ConfigError::Invalid("camera smoothing must be in (0, 1]".into()));
        }
        if self.layout.frame_spacing <= 0.0 {
            return Err(ConfigError::Invalid("frame_spacing must be positive".into()));
        }
        if self.spring.tension <= 0.0 || self.spring.mass <= 0.0 || self.spring.friction < 0.0 {
            return Err(ConfigError::Invalid(
                "spring needs positive tension and mass, non-negative friction".into(),
            ));
        }
        Ok(())
    }

    /// Every float must be finite: comparisons against NaN are always false.
    fn check_finite(&self) -> Result<(), ConfigError> {
        let nav = &self.navigation;
        let camera = &self.camera;
        let layout = &self.layout;
        let spring = &self.spring;
        let fields = [
            ("navigation.pointer_sensitivity", nav.pointer_sensitivity),
            ("navigation.touch_sensitivity", nav.touch_sensitivity),
            ("navigation.zoom_min", nav.zoom_min),
            ("navigation.zoom_max", nav.zoom_max),
            ("navigation.zoom_step", nav.zoom_step),
            ("navigation.initial_zoom", nav.initial_zoom),
            ("navigation.tap_slop_px", nav.tap_slop_px),
            ("camera.base_distance", camera.base_distance),
            ("camera.smoothing", camera.smoothing),
            ("camera.initial_position.x", camera.initial_position[0]),
            ("camera.initial_position.y", camera.initial_position[1]),
            ("camera.initial_position.z", camera.initial_position[2]),
            ("layout.frame_spacing", layout.frame_spacing),
            ("layout.depth_factor", layout.depth_factor),
            ("layout.frame_width", layout.frame_width),
            ("layout.frame_height", layout.frame_height),
            ("spring.tension", spring.tension),
            ("spring.friction", spring.friction),
            ("spring.mass", spring.mass),
            ("spring.rest_displacement", spring.rest_displacement),
            ("spring.rest_velocity", spring.rest_velocity),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ConfigError::Invalid(format!(
                "{name} must be a finite number (got {value})"
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_struct_gives_defaults() {
        let config = GalleryConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let ron = r#"
            (
                focus_year: Some(2026),
                navigation: (wheel_mode: Step, pointer_sensitivity: 120.0),
                camera: (smoothing: 0.08),
            )
        "#;
        let config = GalleryConfig::from_ron_str(ron).unwrap();
        assert_eq!(config.focus_year, Some(2026));
        assert_eq!(config.navigation.wheel_mode, WheelMode::Step);
        assert_eq!(config.navigation.pointer_sensitivity, 120.0);
        // untouched fields keep defaults
        assert_eq!(config.navigation.touch_sensitivity, 80.0);
        assert_eq!(config.camera.smoothing, 0.08);
        assert_eq!(config.camera.base_distance, 4.0);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_invalid_tunables_rejected() {
        let cases = [
            "(navigation: (pointer_sensitivity: 0.0))",
            "(navigation: (zoom_min: 5.0, zoom_max: 1.0))",
            "(navigation: (zoom_min: 0.0))",
            "(camera: (smoothing: 0.0))",
            "(camera: (smoothing: 1.5))",
            "(layout: (frame_spacing: -4.0))",
            "(spring: (tension: 0.0))",
        ];
        for ron in cases {
            let result = GalleryConfig::from_ron_str(ron);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "accepted {ron}");
        }
    }

    #[test]
    fn test_non_finite_tunables_rejected() {
        let cases = [
            "(navigation: (zoom_min: NaN))",
            "(navigation: (zoom_max: inf))",
            "(navigation: (initial_zoom: NaN))",
            "(navigation: (initial_zoom: -1.0))",
            "(navigation: (pointer_sensitivity: NaN))",
            "(navigation: (touch_sensitivity: inf))",
            "(navigation: (tap_slop_px: NaN))",
            "(camera: (initial_position: (0.0, NaN, 5.0)))",
            "(layout: (depth_factor: inf))",
            "(layout: (frame_width: NaN))",
            "(spring: (mass: NaN))",
            "(spring: (friction: -inf))",
            "(spring: (rest_velocity: NaN))",
        ];
        for ron in cases {
            let result = GalleryConfig::from_ron_str(ron);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "accepted {ron}");
        }
    }

    #[test]
    fn test_parse_error() {
        let result = GalleryConfig::from_ron_str("(navigation: [")
            .expect_err("malformed RON should fail");
        assert!(matches!(result, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(layout: (depth_factor: 2.0))").unwrap();
        let config = GalleryConfig::load(file.path()).unwrap();
        assert_eq!(config.layout.depth_factor, 2.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GalleryConfig::load(dir.path().join("nope.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_wheel_mode_strings() {
        assert_eq!("zoom".parse::<WheelMode>().unwrap(), WheelMode::Zoom);
        assert_eq!("STEP".parse::<WheelMode>().unwrap(), WheelMode::Step);
        assert_eq!(WheelMode::Step.to_string(), "step");
    }
}
