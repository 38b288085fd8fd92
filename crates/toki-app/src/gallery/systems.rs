//! Per-tick systems: camera follow, frame animation, glow, part fading, labels.

use std::collections::HashMap;

use bevy::prelude::*;

use super::components::*;
use crate::constants::{
    FLOAT_AMPLITUDE, FLOAT_RANGE, FLOAT_SPEED, GALLERY_TITLE, GLOW_LUMENS, HOVER_FORWARD,
    LABEL_FONT_SIZE, LABEL_MIN_FONT_SIZE, LABEL_WIDTH, SWAY_AMPLITUDE, SWAY_SPEED, TITLE_ANCHOR,
    TITLE_FONT_SIZE, TITLE_REFERENCE_DISTANCE, TITLE_WIDTH, ZLayer,
};
use crate::ui::theme::Theme;

// ============================================================================
// SCENE
// ============================================================================

/// Spawn the gallery camera, lights and title.
pub fn setup_scene(mut commands: Commands, rig: Res<CameraRig>, theme: Res<Theme>) {
    let pose = rig.pose();
    let [x, y, z] = pose.position();
    let [lx, ly, lz] = pose.look_at;

    commands.spawn((
        GalleryCamera,
        Name::new("GalleryCamera"),
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(theme.bg),
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::new(lx, ly, lz), Vec3::Y),
    ));

    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("FillLight"),
        PointLight {
            intensity: 400_000.0,
            range: 60.0,
            ..default()
        },
        Transform::from_xyz(-3.0, 2.0, 8.0),
    ));

    commands
        .spawn((
            GalleryTitle,
            Name::new("GalleryTitle"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(TITLE_WIDTH),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(ZLayer::LABELS),
            Visibility::Hidden,
        ))
        .with_children(|title| {
            title.spawn((
                GalleryTitleText,
                Text::new(GALLERY_TITLE),
                TextFont {
                    font_size: TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Ease the camera toward the current index and zoom.
pub fn follow_camera(
    time: Res<Time>,
    gallery: Res<Gallery>,
    mut rig: ResMut<CameraRig>,
    mut cameras: Query<&mut Transform, With<GalleryCamera>>,
) {
    let pose = rig.advance(gallery.current_index(), gallery.zoom(), time.delta_secs());
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    let [x, y, z] = pose.position();
    let [lx, ly, lz] = pose.look_at;
    *transform = Transform::from_xyz(x, y, z).looking_at(Vec3::new(lx, ly, lz), Vec3::Y);
}

// ============================================================================
// FRAMES
// ============================================================================

/// Vertical float for frames near the focus; zero beyond [`FLOAT_RANGE`].
pub fn float_offset(elapsed: f32, index: usize, distance: f32) -> f32 {
    let falloff = 1.0 - distance.abs() / FLOAT_RANGE;
    if falloff <= 0.0 {
        return 0.0;
    }
    (elapsed * FLOAT_SPEED + index as f32 * 0.7).sin() * FLOAT_AMPLITUDE * falloff
}

/// Slow Z tilt, applied to the same frames that float.
pub fn sway_angle(elapsed: f32, distance: f32, is_focused: bool) -> f32 {
    if !is_focused && distance.abs() >= FLOAT_RANGE {
        return 0.0;
    }
    (elapsed * SWAY_SPEED).sin() * SWAY_AMPLITUDE
}

/// Pivot translation: float along Y, hovered frames pulled toward the viewer.
pub fn pivot_offset(hovered: bool, float: f32) -> Vec3 {
    let forward = if hovered { HOVER_FORWARD } else { 0.0 };
    Vec3::new(0.0, float, forward)
}

/// Fraction of [`GLOW_LUMENS`] a frame's light shines at.
pub fn glow_level(hovered: bool, is_focused: bool) -> f32 {
    if hovered {
        1.0
    } else if is_focused {
        0.5
    } else {
        0.0
    }
}

/// Title font size, shrinking as the camera pulls back from the anchor.
pub fn title_font_size(camera_distance: f32) -> f32 {
    let scale = TITLE_REFERENCE_DISTANCE / camera_distance.max(0.1);
    (TITLE_FONT_SIZE * scale).clamp(LABEL_MIN_FONT_SIZE, TITLE_FONT_SIZE * 2.0)
}

/// Label font size for a frame's detail level and animated scale.
pub fn label_font_size(detail_level: f32, scale: f32) -> f32 {
    (LABEL_FONT_SIZE * detail_level * scale.min(1.6)).max(LABEL_MIN_FONT_SIZE)
}

/// Position every frame and ease its scale spring toward the new target.
pub fn animate_frames(
    time: Res<Time>,
    gallery: Res<Gallery>,
    mut cards: Query<(&FrameCard, &mut Transform, &mut FrameScale, &mut FrameDisplay)>,
) {
    let dt = time.delta_secs();
    let views: Vec<_> = gallery.frames().collect();

    for (card, mut transform, mut scale, mut display) in cards.iter_mut() {
        // Stale until the next rebuild
        let Some(view) = views.get(card.index).filter(|v| v.event.id == card.event_id) else {
            continue;
        };
        transform.translation = Vec3::from_array(view.position);
        scale.0.set_target(view.params.scale);
        scale.0.tick(dt);
        *display = FrameDisplay {
            params: view.params,
            distance: view.distance,
        };
    }
}

/// Apply spring scale, hover offset, float and sway to each frame's pivot.
pub fn pose_pivots(
    time: Res<Time>,
    hovered: Res<HoveredFrame>,
    cards: Query<(&FrameCard, &FrameScale, &FrameDisplay)>,
    mut pivots: Query<(&FramePivot, &mut Transform), Without<FrameCard>>,
) {
    let elapsed = time.elapsed_secs();
    for (pivot, mut transform) in pivots.iter_mut() {
        let Ok((card, scale, display)) = cards.get(pivot.card) else {
            continue;
        };
        let float = float_offset(elapsed, card.index, display.distance);
        transform.scale = Vec3::splat(scale.0.value);
        transform.translation = pivot_offset(hovered.0 == Some(pivot.card), float);
        transform.rotation = Quat::from_rotation_z(sway_angle(
            elapsed,
            display.distance,
            display.params.is_focused,
        ));
    }
}

/// Brighten each frame's light on hover, dimmer when focused.
pub fn update_glow(
    hovered: Res<HoveredFrame>,
    cards: Query<&FrameDisplay>,
    mut lights: Query<(&FrameGlow, &mut PointLight)>,
) {
    for (glow, mut light) in lights.iter_mut() {
        let Ok(display) = cards.get(glow.card) else {
            continue;
        };
        let level = glow_level(hovered.0 == Some(glow.card), display.params.is_focused);
        let intensity = level * GLOW_LUMENS;
        if light.intensity != intensity {
            light.intensity = intensity;
        }
    }
}

/// Fade materials by distance and toggle detail parts by content tier.
pub fn fade_parts(
    cards: Query<&FrameDisplay>,
    mut parts: Query<(&FramePart, &MeshMaterial3d<StandardMaterial>, &mut Visibility)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (part, material, mut visibility) in parts.iter_mut() {
        let Ok(display) = cards.get(part.card) else {
            continue;
        };
        let tier = display.params.tier;
        let shown = match part.kind {
            PartKind::Body => true,
            PartKind::Badge => tier.shows_badge(),
            PartKind::Description => tier.shows_description(),
            PartKind::Importance => tier.shows_importance(),
        };
        visibility.set_if_neq(if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });

        let alpha = part.base_alpha * display.params.opacity_factor;
        let stale = materials
            .get(&material.0)
            .is_some_and(|m| (m.base_color.alpha() - alpha).abs() > 1e-3);
        if stale {
            if let Some(mut m) = materials.get_mut(&material.0) {
                m.base_color.set_alpha(alpha);
            }
        }
    }
}

/// Project each frame's label anchor to the screen and style it by tier.
pub fn place_labels(
    gallery: Res<Gallery>,
    theme: Res<Theme>,
    cameras: Query<(&Camera, &Transform), With<GalleryCamera>>,
    cards: Query<(&Transform, &FrameScale, &FrameDisplay), Without<GalleryCamera>>,
    mut labels: Query<(Entity, &FrameLabel, &mut Node, &mut Visibility)>,
    mut texts: Query<
        (&ChildOf, &mut TextColor, &mut TextFont, &mut Visibility, Has<LabelDate>),
        Without<FrameLabel>,
    >,
) {
    let Ok((camera, camera_tf)) = cameras.single() else {
        return;
    };
    let camera_gt = GlobalTransform::from(*camera_tf);
    let half_height = gallery.config().layout.frame_height * 0.5;

    let mut styles = HashMap::new();
    for (label_entity, label, mut node, mut visibility) in labels.iter_mut() {
        let Ok((transform, scale, display)) = cards.get(label.card) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };
        let s = scale.0.value;
        let anchor = transform.translation + Vec3::Y * (half_height * s + 0.15);
        let Ok(screen) = camera.world_to_viewport(&camera_gt, anchor) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        visibility.set_if_neq(Visibility::Inherited);
        let font_size = label_font_size(display.params.detail_level, s);
        node.left = Val::Px(screen.x - LABEL_WIDTH * 0.5);
        // sit the label's bottom edge on the anchor
        node.top = Val::Px(screen.y - font_size * 2.4);
        styles.insert(label_entity, (display.params, font_size));
    }

    for (child_of, mut color, mut font, mut visibility, is_date) in texts.iter_mut() {
        let Some((params, font_size)) = styles.get(&child_of.parent()) else {
            continue;
        };
        let base = if is_date { theme.fg_dim } else { theme.fg };
        color.0 = base.with_alpha(params.opacity_factor);
        font.font_size = if is_date { font_size * 0.8 } else { *font_size };
        if is_date {
            visibility.set_if_neq(if params.tier.shows_date() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            });
        }
    }
}

/// Keep the gallery title pinned to its world anchor.
pub fn place_title(
    cameras: Query<(&Camera, &Transform), With<GalleryCamera>>,
    mut titles: Query<(&mut Node, &mut Visibility), With<GalleryTitle>>,
    mut texts: Query<&mut TextFont, With<GalleryTitleText>>,
) {
    let Ok((camera, camera_tf)) = cameras.single() else {
        return;
    };
    let anchor = Vec3::from_array(TITLE_ANCHOR);
    let projected = camera.world_to_viewport(&GlobalTransform::from(*camera_tf), anchor);
    let font_size = title_font_size(camera_tf.translation.distance(anchor));

    for (mut node, mut visibility) in titles.iter_mut() {
        let Ok(screen) = projected else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };
        visibility.set_if_neq(Visibility::Inherited);
        node.left = Val::Px(screen.x - TITLE_WIDTH * 0.5);
        node.top = Val::Px(screen.y - font_size * 0.6);
    }
    for mut font in texts.iter_mut() {
        if font.font_size != font_size {
            font.font_size = font_size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_only_near_focus() {
        assert_eq!(float_offset(1.0, 3, 2.0), 0.0);
        assert_eq!(float_offset(1.0, 3, -5.0), 0.0);
        for t in 0..50 {
            let y = float_offset(t as f32 * 0.1, 0, 0.0);
            assert!(y.abs() <= FLOAT_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_float_fades_with_distance() {
        // sin(pi/2) = 1 at elapsed chosen for index 0
        let t = std::f32::consts::FRAC_PI_2 / FLOAT_SPEED;
        let near = float_offset(t, 0, 0.0);
        let mid = float_offset(t, 0, 1.0);
        assert!((near - FLOAT_AMPLITUDE).abs() < 1e-5);
        assert!((mid - FLOAT_AMPLITUDE * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_hover_pulls_toward_viewer() {
        assert_eq!(pivot_offset(false, 0.02), Vec3::new(0.0, 0.02, 0.0));
        let hovered = pivot_offset(true, 0.02);
        assert_eq!(hovered.z, HOVER_FORWARD);
        assert_eq!(hovered.y, 0.02);
    }

    #[test]
    fn test_sway_only_near_focus() {
        let t = std::f32::consts::FRAC_PI_2 / SWAY_SPEED;
        assert!((sway_angle(t, 0.0, true) - SWAY_AMPLITUDE).abs() < 1e-6);
        assert!((sway_angle(t, 1.5, false) - SWAY_AMPLITUDE).abs() < 1e-6);
        assert_eq!(sway_angle(t, 2.0, false), 0.0);
        assert_eq!(sway_angle(t, -4.0, false), 0.0);
    }

    #[test]
    fn test_glow_level() {
        assert_eq!(glow_level(true, false), 1.0);
        assert_eq!(glow_level(true, true), 1.0);
        assert_eq!(glow_level(false, true), 0.5);
        assert_eq!(glow_level(false, false), 0.0);
    }

    #[test]
    fn test_title_shrinks_with_distance() {
        assert_eq!(title_font_size(TITLE_REFERENCE_DISTANCE), TITLE_FONT_SIZE);
        assert!(title_font_size(20.0) < TITLE_FONT_SIZE);
        assert_eq!(title_font_size(1_000.0), LABEL_MIN_FONT_SIZE);
        assert_eq!(title_font_size(0.0), TITLE_FONT_SIZE * 2.0);
    }

    #[test]
    fn test_label_font_size() {
        assert_eq!(label_font_size(1.0, 1.0), LABEL_FONT_SIZE);
        assert_eq!(label_font_size(0.5, 0.6), LABEL_MIN_FONT_SIZE);
        // focused frames grow, but only so far
        assert!((label_font_size(1.0, 2.5) - LABEL_FONT_SIZE * 1.6).abs() < 1e-4);
    }
}
