//! Gallery plugin: registers resources, messages and the per-tick pipeline.

use bevy::prelude::*;
use toki_core::{CameraFollower, GalleryNavigator};

use super::components::*;
use super::{input, spawn, systems};

/// Plugin that renders and drives the timeline gallery.
pub struct GalleryPlugin {
    navigator: GalleryNavigator,
}

impl GalleryPlugin {
    pub fn new(navigator: GalleryNavigator) -> Self {
        Self { navigator }
    }
}

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        let config = self.navigator.config();
        let rig = CameraFollower::new(config.camera.clone(), config.layout.frame_spacing);

        // Initialize resources
        app.insert_resource(Gallery(self.navigator.clone()))
            .insert_resource(CameraRig(rig))
            .init_resource::<SpawnedRevision>()
            .init_resource::<HoveredFrame>()
            .init_resource::<PointerPress>();

        // Register messages
        app.add_message::<FrameClicked>()
            .add_message::<CategoryToggled>()
            .add_message::<ZoomRequested>()
            .add_message::<SelectionCleared>();

        app.add_systems(Startup, systems::setup_scene);

        app.add_systems(
            Update,
            (
                // Input handling
                input::handle_wheel,
                input::handle_mouse_drag,
                input::handle_touch,
                input::handle_step_keys,
                input::apply_requests,
                // Rebuild on filter change
                spawn::rebuild_frames,
                // Animation
                systems::follow_camera,
                systems::animate_frames,
                systems::pose_pivots,
                systems::update_glow,
                systems::fade_parts,
                systems::place_labels,
                systems::place_title,
                input::update_hover,
            )
                .chain(),
        );
    }
}
