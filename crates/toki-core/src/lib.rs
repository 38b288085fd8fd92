//! Navigation model for the Toki timeline gallery.
//!
//! This crate owns everything about the gallery that is not drawing: which
//! events are shown, where along the sequence the viewer is, how each frame
//! fades and shrinks with distance, and how the camera chases the focus. It
//! has **no rendering dependency**; the Bevy front end (`toki-app`) reads the
//! derived values once per tick and applies them to meshes and the camera.
//!
//! # Data Flow
//!
//! ```text
//! gesture (wheel / drag / touch / click)
//!     └── GalleryNavigator ── NavigationState { current_index, zoom, selection }
//!             └── frames() ── FrameView per event
//!             │       └── visibility(distance)   → opacity, detail, tier
//!             │       └── target_scale(distance) → Spring::tick(dt)
//!             └── CameraFollower::advance(current_index, zoom, dt)
//! ```
//!
//! # Key Types
//!
//! |----------------------|---------------------------------------------|
//! | Type                 | Purpose                                     |
//! |----------------------|---------------------------------------------|
//! | [`EventCatalog`]     | Static events + categories, filter & sort   |
//! | [`GalleryNavigator`] | Single owner of [`NavigationState`]         |
//! | [`FrameView`]        | Per-frame position + render parameters      |
//! | [`Spring`]           | Per-tick scale easing (value, velocity)     |
//! | [`CameraFollower`]   | Exponential camera easing toward the focus  |
//! | [`GalleryConfig`]    | RON-loadable tunables                       |
//! |----------------------|---------------------------------------------|

pub mod camera;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod navigation;
pub mod scale;
pub mod visibility;

pub use camera::{CameraFollower, CameraPose};
pub use catalog::{Category, CategoryId, Event, EventCatalog, EventId, month_name};
pub use config::{CameraConfig, GalleryConfig, LayoutConfig, NavigationConfig, WheelMode};
pub use error::{CatalogError, ConfigError};
pub use frame::{FrameRenderParams, FrameView, frame_params, frame_position};
pub use navigation::{GalleryNavigator, GestureEnd, NavigationState, PointerKind};
pub use scale::{Spring, SpringConfig, target_scale};
pub use visibility::{ContentTier, VisibilityParams, visibility};

/// Linear interpolation, `a` at `t = 0` and `b` at `t = 1`.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
