//! End-to-end navigation scenarios: gestures in, render parameters out.

use std::collections::BTreeSet;

use toki_core::{
    CameraFollower, CategoryId, Event, EventCatalog, EventId, GalleryConfig, GalleryNavigator,
    Spring, dataset,
};

fn event(id: u32, year: i32, month: u8, category: CategoryId) -> Event {
    Event {
        id: EventId(id),
        year,
        month,
        title: format!("event {id}"),
        description: format!("description {id}"),
        category,
        importance: 7,
    }
}

fn unfocused_config() -> GalleryConfig {
    GalleryConfig {
        focus_year: None,
        ..Default::default()
    }
}

#[test]
fn test_select_middle_of_three() {
    let catalog = EventCatalog::new(
        dataset::categories(),
        vec![
            event(1, 2020, 3, CategoryId::Society),
            event(2, 2022, 11, CategoryId::Ai),
            event(3, 2024, 3, CategoryId::Ai),
        ],
    )
    .unwrap();
    let mut nav = GalleryNavigator::new(catalog, unfocused_config());

    assert!(nav.select_frame(EventId(2)));
    assert_eq!(nav.current_index(), 1.0);
}

#[test]
fn test_empty_filter_renders_nothing() {
    let catalog = EventCatalog::new(dataset::categories(), Vec::new()).unwrap();
    let mut nav = GalleryNavigator::new(catalog, unfocused_config());

    assert_eq!(nav.max_index(), -1);
    assert_eq!(nav.frames().count(), 0);

    nav.on_wheel(100.0);
    nav.on_touch_start(10.0, 1);
    nav.on_touch_move(-500.0, 1);
    nav.on_touch_end();
    assert_eq!(nav.current_index(), 0.0);
    assert!(!nav.select_frame(EventId(1)));
}

#[test]
fn test_repeated_wheel_stays_in_zoom_bounds() {
    let mut nav = GalleryNavigator::new(EventCatalog::builtin(), GalleryConfig::default());
    for _ in 0..100 {
        nav.on_wheel(100.0);
        assert!((0.1..=10.0).contains(&nav.zoom()));
    }
    for _ in 0..100 {
        nav.on_wheel(-100.0);
        assert!((0.1..=10.0).contains(&nav.zoom()));
    }
}

#[test]
fn test_drag_release_always_lands_on_a_frame() {
    let mut nav = GalleryNavigator::new(EventCatalog::builtin(), GalleryConfig::default());
    let max = nav.max_index() as f32;

    for offset in [-5000.0, -730.0, -149.0, -51.0, 0.0, 49.0, 151.0, 999.0, 5000.0] {
        nav.on_pointer_down(400.0);
        nav.on_pointer_move(400.0 + offset);
        nav.on_pointer_up();
        let index = nav.current_index();
        assert_eq!(index.fract(), 0.0, "offset {offset} left index at {index}");
        assert!((0.0..=max).contains(&index));
    }
}

#[test]
fn test_filter_change_clears_excluded_selection() {
    let mut nav = GalleryNavigator::new(EventCatalog::builtin(), GalleryConfig::default());
    // Lunar Colony, science
    assert!(nav.select_frame(EventId(17)));
    nav.set_active_categories(BTreeSet::from([CategoryId::Tech, CategoryId::Ai]));

    assert_eq!(nav.selected_event_id(), None);
    let index = nav.current_index();
    assert!(index >= 0.0 && index <= nav.max_index() as f32);
}

#[test]
fn test_tick_loop_follows_focus() {
    let config = GalleryConfig::default();
    let mut nav = GalleryNavigator::new(EventCatalog::builtin(), config.clone());
    let mut camera = CameraFollower::new(config.camera.clone(), config.layout.frame_spacing);
    let mut springs: Vec<Spring> = nav
        .frames()
        .map(|f| Spring::new(f.params.scale, config.spring))
        .collect();

    assert!(nav.select_frame(EventId(20)));
    let target_index = nav.current_index();

    let dt = 1.0 / 60.0;
    for _ in 0..240 {
        for (spring, frame) in springs.iter_mut().zip(nav.frames()) {
            spring.set_target(frame.params.scale);
            spring.tick(dt);
        }
        camera.advance(nav.current_index(), nav.zoom(), dt);
    }

    let pose = camera.pose();
    let expected_x = target_index * config.layout.frame_spacing;
    assert!((pose.x - expected_x).abs() < 0.01 * expected_x);
    assert_eq!(pose.look_at, [pose.x, 0.0, 0.0]);

    let focused = nav.focused_index().unwrap();
    assert!((springs[focused].value - 2.5).abs() < 0.01);
    assert!(springs[0].value >= 0.6 - 1e-3);
}
