//! Input systems: wheel, mouse drag, touch, keys and frame picking.
//!
//! Raw Bevy input is translated into navigator calls. Picking is a plain
//! ray/rectangle test against each frame's plane, using the same camera
//! transform the frame systems write this tick.

use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use toki_core::{EventId, LayoutConfig};

use super::components::*;
use crate::constants::WHEEL_LINE_PIXELS;

/// Convert a Bevy wheel reading into a DOM-style `deltaY` (positive = scroll down).
pub fn wheel_delta_y(unit: MouseScrollUnit, y: f32) -> f32 {
    let pixels = match unit {
        MouseScrollUnit::Line => y * WHEEL_LINE_PIXELS,
        MouseScrollUnit::Pixel => y,
    };
    -pixels
}

fn pointer_over_ui(interactions: &Query<&Interaction>) -> bool {
    interactions.iter().any(|i| *i != Interaction::None)
}

/// Nearest frame hit by `ray`.
///
/// Each candidate is `(entity, centre, half_extents)`; frames face +Z.
pub fn pick_frame(
    ray: Ray3d,
    frames: impl IntoIterator<Item = (Entity, Vec3, Vec2)>,
) -> Option<Entity> {
    let mut best: Option<(f32, Entity)> = None;
    for (entity, centre, half) in frames {
        let Some(t) = ray.intersect_plane(centre, InfinitePlane3d::new(Vec3::Z)) else {
            continue;
        };
        let hit = ray.get_point(t);
        if (hit.x - centre.x).abs() > half.x || (hit.y - centre.y).abs() > half.y {
            continue;
        }
        if best.is_none_or(|(best_t, _)| t < best_t) {
            best = Some((t, entity));
        }
    }
    best.map(|(_, entity)| entity)
}

/// Camera + frame queries needed to turn a screen position into a frame.
#[derive(SystemParam)]
pub struct FramePicker<'w, 's> {
    cameras: Query<'w, 's, (&'static Camera, &'static Transform), With<GalleryCamera>>,
    cards: Query<'w, 's, (Entity, &'static Transform, &'static FrameScale, &'static FrameCard)>,
}

impl FramePicker<'_, '_> {
    /// Frame under `screen` (window logical pixels), if any.
    pub fn pick(&self, screen: Vec2, layout: &LayoutConfig) -> Option<(Entity, EventId)> {
        let (camera, transform) = self.cameras.single().ok()?;
        let ray = camera
            .viewport_to_world(&GlobalTransform::from(*transform), screen)
            .ok()?;
        let base = Vec2::new(layout.frame_width, layout.frame_height) * 0.5;
        let hit = pick_frame(
            ray,
            self.cards
                .iter()
                .map(|(entity, tf, scale, _)| (entity, tf.translation, base * scale.0.value)),
        )?;
        let (_, _, _, card) = self.cards.get(hit).ok()?;
        Some((hit, card.event_id))
    }
}

// ============================================================================
// SYSTEMS
// ============================================================================

/// Scroll wheel: zoom (or step, in legacy mode).
pub fn handle_wheel(
    mut wheel: MessageReader<MouseWheel>,
    interactions: Query<&Interaction>,
    mut gallery: ResMut<Gallery>,
) {
    let over_ui = pointer_over_ui(&interactions);
    for event in wheel.read() {
        if over_ui {
            continue;
        }
        gallery.on_wheel(wheel_delta_y(event.unit, event.y));
    }
}

/// Left-button drag scrubs the index; a press/release without travel is a click.
pub fn handle_mouse_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    interactions: Query<&Interaction>,
    picker: FramePicker,
    mut press: ResMut<PointerPress>,
    mut gallery: ResMut<Gallery>,
    mut clicked: MessageWriter<FrameClicked>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) && !pointer_over_ui(&interactions) {
        if let Some(pos) = cursor {
            gallery.on_pointer_down(pos.x);
            press.active = true;
            press.last_x = Some(pos.x);
        }
    }

    if !press.active {
        return;
    }

    if buttons.pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            if press.last_x != Some(pos.x) && gallery.is_dragging() {
                gallery.on_pointer_move(pos.x);
                press.last_x = Some(pos.x);
            }
        }
    }

    if buttons.just_released(MouseButton::Left) {
        press.active = false;
        press.last_x = None;
        let end = gallery.on_pointer_up();
        debug!("Mouse released, settled on frame {:?}", end.snapped_index);
        if end.was_tap {
            let layout = &gallery.config().layout;
            if let Some((_, id)) = cursor.and_then(|pos| picker.pick(pos, layout)) {
                clicked.write(FrameClicked(id));
            }
        }
    }
}

/// Single-finger swipes scrub the index; a short tap selects a frame.
pub fn handle_touch(
    touches: Res<Touches>,
    picker: FramePicker,
    mut gallery: ResMut<Gallery>,
    mut clicked: MessageWriter<FrameClicked>,
) {
    let count = touches.iter().count();

    for touch in touches.iter_just_pressed() {
        gallery.on_touch_start(touch.position().x, count);
    }

    if count == 1 {
        for touch in touches.iter() {
            if touch.delta() != Vec2::ZERO {
                gallery.on_touch_move(touch.position().x, count);
            }
        }
    }

    if count == 0 && touches.any_just_canceled() {
        gallery.on_touch_end();
        return;
    }

    if count == 0 && touches.any_just_released() {
        let end = gallery.on_touch_end();
        debug!("Touch ended, settled on frame {:?}", end.snapped_index);
        if end.was_tap {
            let released = touches.iter_just_released().next().map(|t| t.position());
            if let Some((_, id)) =
                released.and_then(|pos| picker.pick(pos, &gallery.config().layout))
            {
                clicked.write(FrameClicked(id));
            }
        }
    }
}

/// Left/Right arrows step one frame.
pub fn handle_step_keys(keys: Res<ButtonInput<KeyCode>>, mut gallery: ResMut<Gallery>) {
    if keys.just_pressed(KeyCode::ArrowLeft) {
        gallery.step(-1);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        gallery.step(1);
    }
}

/// Track which frame is under the mouse cursor.
pub fn update_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    interactions: Query<&Interaction>,
    picker: FramePicker,
    gallery: Res<Gallery>,
    mut hovered: ResMut<HoveredFrame>,
) {
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());
    let over = match cursor {
        Some(pos) if !gallery.is_dragging() && !pointer_over_ui(&interactions) => picker
            .pick(pos, &gallery.config().layout)
            .map(|(entity, _)| entity),
        _ => None,
    };
    hovered.set_if_neq(HoveredFrame(over));
}

/// Apply clicks, overlay buttons and zoom presets to the navigator.
pub fn apply_requests(
    mut clicks: MessageReader<FrameClicked>,
    mut toggles: MessageReader<CategoryToggled>,
    mut zooms: MessageReader<ZoomRequested>,
    mut cleared: MessageReader<SelectionCleared>,
    mut gallery: ResMut<Gallery>,
) {
    for FrameClicked(id) in clicks.read() {
        if gallery.select_frame(*id) {
            info!("Selected {}", id);
        }
    }
    for CategoryToggled(category) in toggles.read() {
        if gallery.toggle_category(*category) {
            info!(
                "Filter now {:?} ({} frames)",
                gallery.active_categories(),
                gallery.len()
            );
        }
    }
    for ZoomRequested(zoom) in zooms.read() {
        gallery.set_zoom(*zoom);
    }
    if cleared.read().count() > 0 {
        gallery.clear_selection();
    }
}
