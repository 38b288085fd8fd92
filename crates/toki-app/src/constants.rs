//! Application constants.
//!
//! Navigation tunables live in `toki_core::GalleryConfig`; these are purely
//! presentational values for the Bevy front end.

/// Default window dimensions.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Pixels reported per line for `MouseScrollUnit::Line` wheel events.
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

/// Zoom preset buttons (percent).
pub const ZOOM_PRESETS: [u32; 4] = [50, 100, 200, 500];
/// Zoom slider granularity.
pub const ZOOM_SLIDER_STEP: f32 = 0.1;
pub const ZOOM_SLIDER_WIDTH: f32 = 160.0;

/// Hovered frames move toward the viewer (+Z) by this much (world units).
pub const HOVER_FORWARD: f32 = 0.1;

/// Gentle float applied to the focused frame and its near neighbours.
pub const FLOAT_AMPLITUDE: f32 = 0.05;
pub const FLOAT_SPEED: f32 = 1.5;
/// Frames farther than this from the focus do not float.
pub const FLOAT_RANGE: f32 = 2.0;

/// Slow tilt about Z shared by floating frames (radians, rad/s).
pub const SWAY_AMPLITUDE: f32 = 0.01;
pub const SWAY_SPEED: f32 = 0.3;

/// Inlay-coloured light in front of each frame.
pub const GLOW_OFFSET_Z: f32 = 0.5;
pub const GLOW_RANGE: f32 = 3.0;
/// Lumens at full glow (hovered). Focused frames glow at half this.
pub const GLOW_LUMENS: f32 = 60_000.0;

/// In-scene gallery title, anchored in world space above the row start.
pub const GALLERY_TITLE: &str = "Interactive Timeline: 2020-2030";
pub const TITLE_ANCHOR: [f32; 3] = [0.0, 2.5, 0.0];
/// Title font size when the camera is `TITLE_REFERENCE_DISTANCE` away.
pub const TITLE_FONT_SIZE: f32 = 32.0;
pub const TITLE_REFERENCE_DISTANCE: f32 = 5.0;
pub const TITLE_WIDTH: f32 = 600.0;

/// Base font size of in-world frame labels at detail 1.0, scale 1.0.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Labels never shrink below this.
pub const LABEL_MIN_FONT_SIZE: f32 = 9.0;
pub const LABEL_WIDTH: f32 = 220.0;

// ============================================================================
// Z-INDEX LAYERS
// ============================================================================

/// Z-Index layers for overlay stacking, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZLayer;

impl ZLayer {
    /// Projected frame labels and the gallery title
    pub const LABELS: i32 = 10;
    /// Hints, zoom controls, filters
    pub const HUD: i32 = 50;
    /// Event details panel
    pub const PANEL: i32 = 100;
}

// Usage: ZIndex(ZLayer::HUD)
