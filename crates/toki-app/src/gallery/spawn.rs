//! Frame entity construction.
//!
//! Each event becomes a small hierarchy:
//!
//! ```text
//! FrameCard (world position)
//!   ├── FrameGlow (inlay-coloured point light)
//!   └── FramePivot (scale, hover offset, float, sway)
//!         ├── moulding, matte, plate, inlay   PartKind::Body
//!         ├── category badge                  PartKind::Badge
//!         ├── description rules               PartKind::Description
//!         └── importance track + fill         PartKind::Importance
//! FrameLabel (UI node, projected each tick)
//!   ├── LabelTitle
//!   └── LabelDate
//! ```
//!
//! Everything is rebuilt when the navigator's revision changes (filters).

use bevy::prelude::*;
use toki_core::{FrameView, LayoutConfig, Spring, SpringConfig};

use super::components::*;
use crate::constants::{GLOW_OFFSET_Z, GLOW_RANGE, LABEL_FONT_SIZE, LABEL_WIDTH, ZLayer};
use crate::ui::theme::{FrameStyle, Theme};

const MOULDING_DEPTH: f32 = 0.15;
const SURFACE_Z: f32 = MOULDING_DEPTH * 0.5 + 0.02;
const DETAIL_DEPTH: f32 = 0.01;

/// Despawn and respawn all frames when the filtered sequence changes.
pub fn rebuild_frames(
    mut commands: Commands,
    gallery: Res<Gallery>,
    theme: Res<Theme>,
    mut spawned: ResMut<SpawnedRevision>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cards: Query<Entity, With<FrameCard>>,
    labels: Query<Entity, With<FrameLabel>>,
) {
    if spawned.0 == Some(gallery.revision()) {
        return;
    }

    for entity in cards.iter().chain(labels.iter()) {
        commands.entity(entity).despawn();
    }

    let config = gallery.config();
    let mut builder = FrameBuilder {
        meshes: &mut meshes,
        materials: &mut materials,
        theme: &theme,
        layout: &config.layout,
        spring: config.spring,
    };
    for view in gallery.frames() {
        builder.spawn(&mut commands, &view, &gallery);
    }

    spawned.0 = Some(gallery.revision());
    info!(
        "Built {} frames (revision {})",
        gallery.len(),
        gallery.revision()
    );
}

struct FrameBuilder<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    theme: &'a Theme,
    layout: &'a LayoutConfig,
    spring: SpringConfig,
}

/// One mesh to place on the pivot.
struct PartSpec {
    kind: PartKind,
    size: Vec3,
    offset: Vec3,
    color: Color,
}

impl FrameBuilder<'_> {
    fn spawn(&mut self, commands: &mut Commands, view: &FrameView<'_>, gallery: &Gallery) {
        let event = view.event;
        let style = self.theme.frame_style(event.category);
        let badge_color = gallery
            .catalog()
            .category(event.category)
            .map(|c| self.theme.category_color(c))
            .unwrap_or(self.theme.accent);

        let card = commands
            .spawn((
                FrameCard {
                    event_id: event.id,
                    index: view.index,
                },
                FrameScale(Spring::new(view.params.scale, self.spring)),
                FrameDisplay {
                    params: view.params,
                    distance: view.distance,
                },
                Name::new(format!("Frame {}", event.id)),
                Transform::from_translation(Vec3::from_array(view.position)),
                Visibility::default(),
            ))
            .id();

        let parts = self.part_specs(&style, badge_color, event.importance_fraction());
        let built: Vec<_> = parts
            .into_iter()
            .map(|spec| {
                let mesh = self.meshes.add(Cuboid::from_size(spec.size));
                let material = self.materials.add(StandardMaterial {
                    base_color: spec.color,
                    alpha_mode: AlphaMode::Blend,
                    perceptual_roughness: 0.8,
                    ..default()
                });
                (spec, mesh, material)
            })
            .collect();

        commands.entity(card).with_children(|parent| {
            parent.spawn((
                FrameGlow { card },
                PointLight {
                    color: style.inlay,
                    intensity: 0.0,
                    range: GLOW_RANGE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, GLOW_OFFSET_Z),
            ));
            parent
                .spawn((
                    FramePivot { card },
                    Transform::from_scale(Vec3::splat(view.params.scale)),
                    Visibility::default(),
                ))
                .with_children(|pivot| {
                    for (spec, mesh, material) in built {
                        pivot.spawn((
                            FramePart {
                                card,
                                kind: spec.kind,
                                base_alpha: spec.color.alpha(),
                            },
                            Mesh3d(mesh),
                            MeshMaterial3d(material),
                            Transform::from_translation(spec.offset),
                        ));
                    }
                });
        });

        commands
            .spawn((
                FrameLabel { card },
                Name::new(format!("Label {}", event.id)),
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(LABEL_WIDTH),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    ..default()
                },
                ZIndex(ZLayer::LABELS),
                Visibility::Hidden,
            ))
            .with_children(|label| {
                label.spawn((
                    LabelTitle,
                    Text::new(event.title.clone()),
                    TextFont {
                        font_size: LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(self.theme.fg),
                ));
                label.spawn((
                    LabelDate,
                    Text::new(event.date_label()),
                    TextFont {
                        font_size: LABEL_FONT_SIZE * 0.8,
                        ..default()
                    },
                    TextColor(self.theme.fg_dim),
                ));
            });
    }

    /// Geometry of a frame, in pivot space at scale 1.
    fn part_specs(&self, style: &FrameStyle, badge: Color, importance: f32) -> Vec<PartSpec> {
        let w = self.layout.frame_width;
        let h = self.layout.frame_height;
        let b = style.border_width.min(w * 0.25).min(h * 0.25);
        let inner_w = w - 2.0 * b;
        let inner_h = h - 2.0 * b;
        let top = inner_h * 0.5;
        let left = -inner_w * 0.5;
        let rule = Color::srgba(0.3, 0.3, 0.35, 0.6);

        let mut parts = vec![
            PartSpec {
                kind: PartKind::Body,
                size: Vec3::new(w, h, MOULDING_DEPTH),
                offset: Vec3::ZERO,
                color: style.frame,
            },
            PartSpec {
                kind: PartKind::Body,
                size: Vec3::new(inner_w, inner_h, 0.02),
                offset: Vec3::new(0.0, 0.0, MOULDING_DEPTH * 0.5),
                color: style.matte,
            },
            // picture plate
            PartSpec {
                kind: PartKind::Body,
                size: Vec3::new(inner_w * 0.8, inner_h * 0.35, DETAIL_DEPTH),
                offset: Vec3::new(0.0, top - inner_h * 0.35, SURFACE_Z),
                color: style.inlay.with_alpha(0.35),
            },
            PartSpec {
                kind: PartKind::Body,
                size: Vec3::new(inner_w * 0.9, 0.05, DETAIL_DEPTH),
                offset: Vec3::new(0.0, top - 0.12, SURFACE_Z),
                color: style.inlay,
            },
            PartSpec {
                kind: PartKind::Badge,
                size: Vec3::new(0.5, 0.18, DETAIL_DEPTH),
                offset: Vec3::new(left + 0.4, top - 0.3, SURFACE_Z + 0.005),
                color: badge,
            },
        ];

        for (i, fraction) in [0.85, 0.75, 0.5].into_iter().enumerate() {
            let width = inner_w * fraction;
            parts.push(PartSpec {
                kind: PartKind::Description,
                size: Vec3::new(width, 0.04, DETAIL_DEPTH),
                offset: Vec3::new(left + 0.2 + width * 0.5, -0.35 - i as f32 * 0.18, SURFACE_Z),
                color: rule,
            });
        }

        let track_w = inner_w * 0.8;
        let track_y = -top + 0.25;
        parts.push(PartSpec {
            kind: PartKind::Importance,
            size: Vec3::new(track_w, 0.08, DETAIL_DEPTH),
            offset: Vec3::new(0.0, track_y, SURFACE_Z),
            color: rule.with_alpha(0.3),
        });
        if importance > 0.0 {
            let fill_w = track_w * importance;
            parts.push(PartSpec {
                kind: PartKind::Importance,
                size: Vec3::new(fill_w, 0.08, DETAIL_DEPTH),
                offset: Vec3::new(-track_w * 0.5 + fill_w * 0.5, track_y, SURFACE_Z + 0.005),
                color: badge,
            });
        }

        parts
    }
}
