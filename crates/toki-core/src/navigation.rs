//! Continuous index controller.
//!
//! [`GalleryNavigator`] is the single owner of [`NavigationState`]. Gesture
//! handlers (wheel, pointer, touch, click) and filter changes mutate it; the
//! render tick only reads it. `current_index` is real-valued while a drag is
//! in progress and snaps to the nearest frame on release.
//!
//! ## Invariants
//!
//! - `current_index` is clamped to `[0, len - 1]` whenever committed, and held
//!   at `0` when the filtered list is empty (`max_index() == -1`).
//! - `zoom` stays within `[zoom_min, zoom_max]`.
//! - `selected_event_id`, when set, names an event in the filtered list.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{CategoryId, Event, EventCatalog, EventId};
use crate::config::{GalleryConfig, NavigationConfig, WheelMode};
use crate::frame::FrameView;

/// Mutable navigation state. Everything the renderer draws derives from this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationState {
    pub current_index: f32,
    pub zoom: f32,
    pub selected_event_id: Option<EventId>,
    pub is_dragging: bool,
}

/// Which input device is driving a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Outcome of releasing a pointer or lifting a finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureEnd {
    /// Frame the index snapped to; `None` when there are no frames.
    pub snapped_index: Option<usize>,
    /// The pointer barely moved: treat the gesture as a click on whatever is under it.
    pub was_tap: bool,
}

#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    kind: PointerKind,
    start_x: f32,
    start_index: f32,
    max_travel: f32,
}

/// Owns the filtered event sequence and the navigation state over it.
#[derive(Clone, Debug)]
pub struct GalleryNavigator {
    catalog: EventCatalog,
    config: GalleryConfig,
    active: BTreeSet<CategoryId>,
    /// Positions into `catalog.events()`, in display order.
    filtered: Vec<usize>,
    state: NavigationState,
    drag: Option<DragAnchor>,
    /// Bumped whenever `filtered` changes, so renderers know to rebuild.
    revision: u64,
}

impl GalleryNavigator {
    /// Navigator over every event in `catalog`.
    pub fn new(catalog: EventCatalog, config: GalleryConfig) -> Self {
        Self::with_categories(catalog, config, BTreeSet::new())
    }

    /// Navigator starting with `active` as the category filter.
    pub fn with_categories(
        catalog: EventCatalog,
        config: GalleryConfig,
        active: BTreeSet<CategoryId>,
    ) -> Self {
        let filtered = catalog.filter_positions(&active);
        let initial = config.navigation.initial_zoom;
        let zoom = clamp_zoom(
            &config.navigation,
            if initial.is_finite() { initial } else { 1.0 },
        );

        let mut nav = Self {
            catalog,
            config,
            active,
            filtered,
            state: NavigationState {
                current_index: 0.0,
                zoom,
                selected_event_id: None,
                is_dragging: false,
            },
            drag: None,
            revision: 0,
        };

        if let Some(year) = nav.config.focus_year {
            let found = nav.filtered_events().position(|e| e.year == year);
            if let Some(index) = found {
                nav.state.current_index = index as f32;
            }
        }
        debug!(
            frames = nav.len(),
            current_index = nav.state.current_index,
            "gallery navigator ready"
        );
        nav
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_index(&self) -> f32 {
        self.state.current_index
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn selected_event_id(&self) -> Option<EventId> {
        self.state.selected_event_id
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.state.selected_event_id.and_then(|id| self.catalog.event(id))
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn active_categories(&self) -> &BTreeSet<CategoryId> {
        &self.active
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of frames in the filtered sequence.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Index of the last frame, or `-1` when there are none.
    pub fn max_index(&self) -> isize {
        self.filtered.len() as isize - 1
    }

    /// Filtered events in display order.
    pub fn filtered_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.filtered.iter().map(|&pos| &self.catalog.events()[pos])
    }

    pub fn event_at(&self, index: usize) -> Option<&Event> {
        self.filtered.get(index).map(|&pos| &self.catalog.events()[pos])
    }

    /// Position of `id` in the filtered sequence.
    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.filtered_events().position(|e| e.id == id)
    }

    /// The frame nearest `current_index`.
    pub fn focused_index(&self) -> Option<usize> {
        if self.filtered.is_empty() {
            return None;
        }
        let rounded = self.state.current_index.round().max(0.0) as usize;
        Some(rounded.min(self.filtered.len() - 1))
    }

    pub fn focused_event(&self) -> Option<&Event> {
        self.focused_index().and_then(|i| self.event_at(i))
    }

    /// Render views for every frame, derived fresh from the current state.
    pub fn frames(&self) -> impl Iterator<Item = FrameView<'_>> + '_ {
        let current = self.state.current_index;
        let focused = self.focused_index();
        let layout = &self.config.layout;
        self.filtered_events()
            .enumerate()
            .map(move |(index, event)| FrameView::new(index, event, current, focused, layout))
    }

    // ── Wheel & zoom ────────────────────────────────────────────────────────

    /// Scroll wheel. Positive `delta_y` scrolls down / away.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        match self.config.navigation.wheel_mode {
            WheelMode::Zoom => {
                let step = self.config.navigation.zoom_step;
                let factor = if delta_y > 0.0 { 1.0 + step } else { 1.0 - step };
                self.set_zoom(self.state.zoom * factor);
            }
            WheelMode::Step => {
                self.step(if delta_y > 0.0 { 1 } else { -1 });
            }
        }
    }

    /// Set zoom directly (slider, preset buttons), clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        self.state.zoom = clamp_zoom(&self.config.navigation, zoom);
    }

    /// Move `delta` whole frames from the focused frame.
    pub fn step(&mut self, delta: i32) {
        let Some(focused) = self.focused_index() else {
            return;
        };
        self.cancel_drag();
        let target = focused as i64 + i64::from(delta);
        self.state.current_index = self.clamp_index(target as f32);
        debug!(current_index = self.state.current_index, "stepped");
    }

    // ── Drag ────────────────────────────────────────────────────────────────

    pub fn on_pointer_down(&mut self, x: f32) {
        self.begin_drag(PointerKind::Mouse, x);
    }

    pub fn on_pointer_move(&mut self, x: f32) {
        self.drag_to(PointerKind::Mouse, x);
    }

    pub fn on_pointer_up(&mut self) -> GestureEnd {
        self.end_drag()
    }

    /// Finger down. Only single-finger gestures start a drag.
    pub fn on_touch_start(&mut self, x: f32, touch_count: usize) {
        if touch_count == 1 {
            self.begin_drag(PointerKind::Touch, x);
        }
    }

    /// Finger moved. Multi-finger moves are ignored.
    pub fn on_touch_move(&mut self, x: f32, touch_count: usize) {
        if touch_count == 1 {
            self.drag_to(PointerKind::Touch, x);
        }
    }

    pub fn on_touch_end(&mut self) -> GestureEnd {
        self.end_drag()
    }

    fn begin_drag(&mut self, kind: PointerKind, x: f32) {
        if !x.is_finite() {
            return;
        }
        self.drag = Some(DragAnchor {
            kind,
            start_x: x,
            start_index: self.state.current_index,
            max_travel: 0.0,
        });
        self.state.is_dragging = true;
        debug!(?kind, x, start_index = self.state.current_index, "drag start");
    }

    fn drag_to(&mut self, kind: PointerKind, x: f32) {
        if !x.is_finite() {
            return;
        }
        let Some(anchor) = self.drag.as_mut().filter(|a| a.kind == kind) else {
            return;
        };
        let sensitivity = match kind {
            PointerKind::Mouse => self.config.navigation.pointer_sensitivity,
            PointerKind::Touch => self.config.navigation.touch_sensitivity,
        };
        let travel = x - anchor.start_x;
        anchor.max_travel = anchor.max_travel.max(travel.abs());
        let proposed = anchor.start_index - travel / sensitivity;
        self.state.current_index = self.clamp_index(proposed);
    }

    /// Release: snap to the nearest frame and report whether it was a tap.
    fn end_drag(&mut self) -> GestureEnd {
        let was_tap = self
            .drag
            .take()
            .is_some_and(|a| a.max_travel < self.config.navigation.tap_slop_px);
        self.state.is_dragging = false;
        self.snap();
        debug!(current_index = self.state.current_index, was_tap, "drag end");
        GestureEnd {
            snapped_index: self.focused_index(),
            was_tap,
        }
    }

    fn cancel_drag(&mut self) {
        self.drag = None;
        self.state.is_dragging = false;
    }

    // ── Selection ───────────────────────────────────────────────────────────

    /// Focus and select `id`. Unknown ids (or ids filtered out) are ignored.
    pub fn select_frame(&mut self, id: EventId) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "select ignored: not in filtered list");
            return false;
        };
        self.cancel_drag();
        self.state.selected_event_id = Some(id);
        self.state.current_index = index as f32;
        debug!(%id, index, "frame selected");
        true
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_event_id = None;
    }

    // ── Filters ─────────────────────────────────────────────────────────────

    /// Replace the category filter. Returns `false` if nothing changed.
    ///
    /// The view stays on the selected event if it survives, else on the
    /// previously focused event, else the index is clamped into the new range.
    pub fn set_active_categories(&mut self, active: BTreeSet<CategoryId>) -> bool {
        if active == self.active {
            return false;
        }
        let previously_focused = self.focused_event().map(|e| e.id);

        self.cancel_drag();
        self.active = active;
        self.filtered = self.catalog.filter_positions(&self.active);
        self.revision += 1;

        if let Some(id) = self.state.selected_event_id {
            if self.index_of(id).is_none() {
                debug!(%id, "selection filtered out");
                self.state.selected_event_id = None;
            }
        }

        let anchor = self.state.selected_event_id.or(previously_focused);
        match anchor.and_then(|id| self.index_of(id)) {
            Some(index) => self.state.current_index = index as f32,
            None => self.snap(),
        }

        debug!(
            categories = ?self.active,
            frames = self.filtered.len(),
            current_index = self.state.current_index,
            "filter changed"
        );
        true
    }

    /// Add or remove one category from the filter.
    pub fn toggle_category(&mut self, id: CategoryId) -> bool {
        let mut active = self.active.clone();
        if !active.remove(&id) {
            active.insert(id);
        }
        self.set_active_categories(active)
    }

    // ── Helpers ─────────────────────────────────────────────────────────────

    fn clamp_index(&self, value: f32) -> f32 {
        match self.filtered.len() {
            0 => 0.0,
            len => value.clamp(0.0, (len - 1) as f32),
        }
    }

    fn snap(&mut self) {
        self.state.current_index = self.clamp_index(self.state.current_index.round());
    }
}

/// Clamp into `[zoom_min, zoom_max]`. Unlike `f32::clamp`, NaN bounds do not panic.
fn clamp_zoom(nav: &NavigationConfig, zoom: f32) -> f32 {
    zoom.max(nav.zoom_min).min(nav.zoom_max)
}
