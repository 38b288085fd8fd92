//! Gallery ECS components, resources and messages.

use bevy::prelude::*;
use toki_core::{CameraFollower, CategoryId, EventId, FrameRenderParams, GalleryNavigator, Spring};

// ============================================================================
// RESOURCES
// ============================================================================

/// The navigation model. Input systems mutate it; render systems read it.
#[derive(Resource, Deref, DerefMut)]
pub struct Gallery(pub GalleryNavigator);

/// Smoothed camera pose following the navigator.
#[derive(Resource, Deref, DerefMut)]
pub struct CameraRig(pub CameraFollower);

/// Navigator revision the current frame entities were built for.
///
/// `None` until the first build.
#[derive(Resource, Default)]
pub struct SpawnedRevision(pub Option<u64>);

/// Frame currently under the pointer, if any.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoveredFrame(pub Option<Entity>);

/// Mouse press state tracked across frames.
#[derive(Resource, Default, Debug)]
pub struct PointerPress {
    /// A left-button press started a mouse gesture that hasn't ended yet.
    pub active: bool,
    /// Cursor x last forwarded to the navigator.
    pub last_x: Option<f32>,
}

// ============================================================================
// COMPONENTS
// ============================================================================

/// Marker for the gallery's 3D camera.
#[derive(Component)]
pub struct GalleryCamera;

/// Root of one rendered frame. Positioned at the frame's world position.
#[derive(Component, Debug, Clone, Copy)]
pub struct FrameCard {
    pub event_id: EventId,
    /// Index in the filtered sequence at build time.
    pub index: usize,
}

/// Animated scale of a frame, eased by a spring toward its target scale.
#[derive(Component, Debug, Clone)]
pub struct FrameScale(pub Spring);

/// Latest derived values for a frame, refreshed every tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct FrameDisplay {
    pub params: FrameRenderParams,
    /// Signed distance from the current index.
    pub distance: f32,
}

/// Child of a [`FrameCard`] carrying scale, hover offset, float and sway.
#[derive(Component, Debug, Clone, Copy)]
pub struct FramePivot {
    pub card: Entity,
}

/// Which detail layer a frame part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// Always drawn: moulding, matte, inlay.
    Body,
    Badge,
    Description,
    Importance,
}

/// One mesh of a frame. Owns its own material so opacity can vary per frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct FramePart {
    pub card: Entity,
    pub kind: PartKind,
    /// Alpha at full opacity.
    pub base_alpha: f32,
}

/// Point light in front of a frame; brightens on hover and focus.
#[derive(Component, Debug, Clone, Copy)]
pub struct FrameGlow {
    pub card: Entity,
}

/// Screen-space label projected from a frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct FrameLabel {
    pub card: Entity,
}

/// Title text inside a [`FrameLabel`].
#[derive(Component)]
pub struct LabelTitle;

/// Date text inside a [`FrameLabel`].
#[derive(Component)]
pub struct LabelDate;

/// The gallery title, projected from a fixed world anchor.
#[derive(Component)]
pub struct GalleryTitle;

/// Text inside the [`GalleryTitle`] node.
#[derive(Component)]
pub struct GalleryTitleText;

// ============================================================================
// MESSAGES
// ============================================================================

/// A frame was tapped or clicked.
#[derive(Message, Debug, Clone, Copy)]
pub struct FrameClicked(pub EventId);

/// A category filter button was pressed.
#[derive(Message, Debug, Clone, Copy)]
pub struct CategoryToggled(pub CategoryId);

/// The details panel was dismissed.
#[derive(Message, Debug, Clone, Copy)]
pub struct SelectionCleared;

/// A zoom preset or slider value was chosen (1.0 = 100%).
#[derive(Message, Debug, Clone, Copy)]
pub struct ZoomRequested(pub f32);
