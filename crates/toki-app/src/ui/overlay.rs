//! 2D overlay: hints, zoom controls, category filters and the details panel.

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};
use bevy::window::PrimaryWindow;
use toki_core::{CategoryId, Event};

use super::theme::Theme;
use crate::constants::{ZLayer, ZOOM_PRESETS, ZOOM_SLIDER_STEP, ZOOM_SLIDER_WIDTH};
use crate::gallery::{CategoryToggled, Gallery, SelectionCleared, ZoomRequested};

/// Plugin that draws the screen-space controls over the gallery.
pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay);
        app.add_systems(
            Update,
            (
                // Button handlers
                handle_zoom_buttons,
                drag_zoom_slider,
                handle_category_buttons,
                handle_close_button,
                // Sync with navigator
                update_zoom_label,
                update_zoom_slider,
                update_category_buttons,
                update_details_panel,
            ),
        );
    }
}

// ============================================================================
// COMPONENTS
// ============================================================================

#[derive(Component)]
struct ZoomLabel;

#[derive(Component, Clone, Copy)]
struct ZoomPresetButton(u32);

/// Slider track; pressing or dragging on it sets the zoom.
#[derive(Component)]
struct ZoomSlider;

#[derive(Component)]
struct ZoomSliderHandle;

#[derive(Component, Clone, Copy)]
struct CategoryButton(CategoryId);

#[derive(Component)]
struct DetailsPanel;

#[derive(Component)]
struct CloseDetailsButton;

/// Which text in the details panel an entity shows.
#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum DetailsField {
    Title,
    Category,
    Date,
    Description,
    Importance,
}

#[derive(Component)]
struct ImportanceFill;

// ============================================================================
// SPAWN
// ============================================================================

fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
        margin: UiRect::left(Val::Px(6.0)),
        border_radius: BorderRadius::all(Val::Px(4.0)),
        ..default()
    }
}

fn spawn_overlay(mut commands: Commands, theme: Res<Theme>, gallery: Res<Gallery>) {
    // Category filters (top left)
    commands
        .spawn((
            Name::new("CategoryFilters"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                ..default()
            },
            Interaction::default(),
            ZIndex(ZLayer::HUD),
        ))
        .with_children(|parent| {
            parent.spawn(label("Filter", 13.0, theme.fg_dim));
            for category in gallery.catalog().categories() {
                parent
                    .spawn((
                        CategoryButton(category.id),
                        Button,
                        Node {
                            border: UiRect::all(Val::Px(1.0)),
                            ..button_node()
                        },
                        BackgroundColor(theme.button_bg),
                        BorderColor::all(theme.category_color(category)),
                    ))
                    .with_children(|button| {
                        button.spawn(label(category.display_name.clone(), 13.0, theme.fg));
                    });
            }
        });

    // Zoom controls (top right)
    commands
        .spawn((
            Name::new("ZoomControls"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                right: Val::Px(16.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                ..default()
            },
            Interaction::default(),
            ZIndex(ZLayer::HUD),
        ))
        .with_children(|parent| {
            parent.spawn((ZoomLabel, label("Zoom: 100%", 13.0, theme.fg)));
            parent
                .spawn((
                    ZoomSlider,
                    Button,
                    Node {
                        width: Val::Px(ZOOM_SLIDER_WIDTH),
                        height: Val::Px(6.0),
                        margin: UiRect::horizontal(Val::Px(10.0)),
                        border_radius: BorderRadius::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(theme.fg_dim.with_alpha(0.4)),
                ))
                .with_children(|track| {
                    track.spawn((
                        ZoomSliderHandle,
                        Node {
                            position_type: PositionType::Absolute,
                            width: Val::Px(12.0),
                            height: Val::Px(12.0),
                            top: Val::Px(-3.0),
                            margin: UiRect::left(Val::Px(-6.0)),
                            border_radius: BorderRadius::all(Val::Px(6.0)),
                            ..default()
                        },
                        BackgroundColor(theme.accent),
                    ));
                });
            for percent in ZOOM_PRESETS {
                parent
                    .spawn((
                        ZoomPresetButton(percent),
                        Button,
                        button_node(),
                        BackgroundColor(theme.button_bg),
                    ))
                    .with_children(|button| {
                        button.spawn(label(format!("{percent}%"), 13.0, theme.fg));
                    });
            }
        });

    // Hints (bottom left)
    commands.spawn((
        Name::new("Hints"),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(16.0),
            ..default()
        },
        ZIndex(ZLayer::HUD),
        label(
            "Drag or swipe to browse | Scroll to zoom | Click a frame for details | \u{2190}/\u{2192} step | F12 screenshot",
            12.0,
            theme.fg_dim,
        ),
    ));

    // Details panel (right), hidden until something is selected
    commands
        .spawn((
            DetailsPanel,
            Name::new("DetailsPanel"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(64.0),
                right: Val::Px(16.0),
                width: Val::Px(320.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(16.0)),
                border_radius: BorderRadius::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(theme.panel_bg),
            Interaction::default(),
            ZIndex(ZLayer::PANEL),
            Visibility::Hidden,
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|header| {
                    header.spawn((DetailsField::Category, label("", 12.0, theme.accent)));
                    header
                        .spawn((
                            CloseDetailsButton,
                            Button,
                            button_node(),
                            BackgroundColor(theme.button_bg),
                        ))
                        .with_children(|button| {
                            button.spawn(label("\u{00d7}", 14.0, theme.fg));
                        });
                });
            panel.spawn((DetailsField::Title, label("", 20.0, theme.fg)));
            panel.spawn((DetailsField::Date, label("", 13.0, theme.fg_dim)));
            panel.spawn((DetailsField::Description, label("", 14.0, theme.fg)));
            panel.spawn((DetailsField::Importance, label("", 12.0, theme.fg_dim)));
            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(6.0),
                        border_radius: BorderRadius::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(theme.fg_dim.with_alpha(0.3)),
                ))
                .with_children(|track| {
                    track.spawn((
                        ImportanceFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            border_radius: BorderRadius::all(Val::Px(3.0)),
                            ..default()
                        },
                        BackgroundColor(theme.accent),
                    ));
                });
        });
}

// ============================================================================
// BUTTONS
// ============================================================================

fn handle_zoom_buttons(
    buttons: Query<(&Interaction, &ZoomPresetButton), Changed<Interaction>>,
    mut zooms: MessageWriter<ZoomRequested>,
) {
    for (interaction, preset) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            zooms.write(ZoomRequested(preset.0 as f32 / 100.0));
        }
    }
}

/// Zoom for a slider position in `[0, 1]`, snapped to the slider step.
pub fn slider_zoom(fraction: f32, zoom_min: f32, zoom_max: f32) -> f32 {
    let raw = zoom_min + fraction.clamp(0.0, 1.0) * (zoom_max - zoom_min);
    let snapped = (raw / ZOOM_SLIDER_STEP).round() * ZOOM_SLIDER_STEP;
    snapped.max(zoom_min).min(zoom_max)
}

/// Slider position in `[0, 1]` for a zoom level.
pub fn slider_fraction(zoom: f32, zoom_min: f32, zoom_max: f32) -> f32 {
    let span = zoom_max - zoom_min;
    if span <= 0.0 {
        return 0.0;
    }
    ((zoom - zoom_min) / span).clamp(0.0, 1.0)
}

fn drag_zoom_slider(
    windows: Query<&Window, With<PrimaryWindow>>,
    sliders: Query<(&Interaction, &ComputedNode, &UiGlobalTransform), With<ZoomSlider>>,
    gallery: Res<Gallery>,
    mut zooms: MessageWriter<ZoomRequested>,
) {
    let Some(cursor) = windows.single().ok().and_then(|w| w.physical_cursor_position()) else {
        return;
    };
    let nav = &gallery.config().navigation;
    for (interaction, node, transform) in sliders.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        // Layout is in physical pixels, centred on the node
        let (_, _, centre) = transform.to_scale_angle_translation();
        let width = node.size().x;
        if width <= 0.0 {
            continue;
        }
        let fraction = (cursor.x - (centre.x - width * 0.5)) / width;
        let zoom = slider_zoom(fraction, nav.zoom_min, nav.zoom_max);
        if (zoom - gallery.zoom()).abs() > f32::EPSILON {
            zooms.write(ZoomRequested(zoom));
        }
    }
}

fn handle_category_buttons(
    buttons: Query<(&Interaction, &CategoryButton), Changed<Interaction>>,
    mut toggles: MessageWriter<CategoryToggled>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            toggles.write(CategoryToggled(button.0));
        }
    }
}

fn handle_close_button(
    buttons: Query<&Interaction, (Changed<Interaction>, With<CloseDetailsButton>)>,
    mut cleared: MessageWriter<SelectionCleared>,
) {
    if buttons.iter().any(|i| *i == Interaction::Pressed) {
        cleared.write(SelectionCleared);
    }
}

// ============================================================================
// SYNC
// ============================================================================

/// Percent text for the zoom label.
pub fn zoom_percent_label(zoom: f32) -> String {
    format!("Zoom: {:.0}%", zoom * 100.0)
}

fn update_zoom_label(gallery: Res<Gallery>, mut labels: Query<&mut Text, With<ZoomLabel>>) {
    if !gallery.is_changed() {
        return;
    }
    for mut text in labels.iter_mut() {
        text.0 = zoom_percent_label(gallery.zoom());
    }
}

fn update_zoom_slider(
    gallery: Res<Gallery>,
    mut handles: Query<&mut Node, With<ZoomSliderHandle>>,
) {
    if !gallery.is_changed() {
        return;
    }
    let nav = &gallery.config().navigation;
    let fraction = slider_fraction(gallery.zoom(), nav.zoom_min, nav.zoom_max);
    for mut node in handles.iter_mut() {
        node.left = Val::Percent(fraction * 100.0);
    }
}

fn update_category_buttons(
    gallery: Res<Gallery>,
    theme: Res<Theme>,
    mut buttons: Query<(&CategoryButton, &Interaction, &mut BackgroundColor)>,
) {
    let active = gallery.active_categories();
    for (button, interaction, mut bg) in buttons.iter_mut() {
        let color = if active.contains(&button.0) {
            gallery
                .catalog()
                .category(button.0)
                .map(|c| theme.category_color(c).with_alpha(0.6))
                .unwrap_or(theme.button_active)
        } else if *interaction == Interaction::Hovered {
            theme.button_active
        } else {
            theme.button_bg
        };
        bg.set_if_neq(BackgroundColor(color));
    }
}

fn details_text(field: DetailsField, event: &Event, category_name: &str) -> String {
    match field {
        DetailsField::Title => event.title.clone(),
        DetailsField::Category => category_name.to_uppercase(),
        DetailsField::Date => event.date_label(),
        DetailsField::Description => event.description.clone(),
        DetailsField::Importance => format!("Importance {}/10", event.importance),
    }
}

fn update_details_panel(
    gallery: Res<Gallery>,
    theme: Res<Theme>,
    mut panels: Query<&mut Visibility, With<DetailsPanel>>,
    mut fields: Query<(&DetailsField, &mut Text, &mut TextColor)>,
    mut fills: Query<(&mut Node, &mut BackgroundColor), With<ImportanceFill>>,
) {
    if !gallery.is_changed() {
        return;
    }

    let selected = gallery.selected_event();
    for mut visibility in panels.iter_mut() {
        visibility.set_if_neq(if selected.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
    let Some(event) = selected else {
        return;
    };

    let category = gallery.catalog().category(event.category);
    let category_name = category.map(|c| c.display_name.as_str()).unwrap_or_default();
    let category_color = category
        .map(|c| theme.category_color(c))
        .unwrap_or(theme.accent);

    for (field, mut text, mut color) in fields.iter_mut() {
        text.0 = details_text(*field, event, category_name);
        if *field == DetailsField::Category {
            color.0 = category_color;
        }
    }
    for (mut node, mut bg) in fills.iter_mut() {
        node.width = Val::Percent(event.importance_fraction() * 100.0);
        bg.0 = category_color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toki_core::EventId;

    #[test]
    fn test_zoom_percent_label() {
        assert_eq!(zoom_percent_label(1.0), "Zoom: 100%");
        assert_eq!(zoom_percent_label(0.1), "Zoom: 10%");
        assert_eq!(zoom_percent_label(1.21), "Zoom: 121%");
    }

    #[test]
    fn test_slider_zoom_covers_range_in_steps() {
        assert_eq!(slider_zoom(0.0, 0.1, 10.0), 0.1);
        assert_eq!(slider_zoom(1.0, 0.1, 10.0), 10.0);
        assert_eq!(slider_zoom(-0.5, 0.1, 10.0), 0.1);
        assert_eq!(slider_zoom(3.0, 0.1, 10.0), 10.0);
        // 0.1 + 0.5 * 9.9 = 5.05, snapped to a tenth
        let mid = slider_zoom(0.5, 0.1, 10.0);
        assert!((mid * 10.0 - (mid * 10.0).round()).abs() < 1e-4);
        assert!((mid - 5.05).abs() <= 0.05 + 1e-4);
    }

    #[test]
    fn test_slider_fraction_inverts_zoom() {
        assert_eq!(slider_fraction(0.1, 0.1, 10.0), 0.0);
        assert_eq!(slider_fraction(10.0, 0.1, 10.0), 1.0);
        assert_eq!(slider_fraction(50.0, 0.1, 10.0), 1.0);
        assert_eq!(slider_fraction(1.0, 1.0, 1.0), 0.0);
        let fraction = slider_fraction(2.0, 0.1, 10.0);
        assert!((slider_zoom(fraction, 0.1, 10.0) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_details_text() {
        let event = Event {
            id: EventId(3),
            year: 2024,
            month: 3,
            title: "Quantum Supremacy".into(),
            description: "Practical quantum advantage.".into(),
            category: CategoryId::Science,
            importance: 8,
        };
        assert_eq!(details_text(DetailsField::Date, &event, "Science"), "March 2024");
        assert_eq!(details_text(DetailsField::Category, &event, "Science"), "SCIENCE");
        assert_eq!(
            details_text(DetailsField::Importance, &event, "Science"),
            "Importance 8/10"
        );
    }
}
