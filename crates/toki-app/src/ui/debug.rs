//! Debug keys
//!
//! - F12: Save screenshot to screenshots/
//! - Escape: Quit

use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, save_to_disk};

const SCREENSHOT_DIR: &str = "screenshots";

/// F12 saves a screenshot
pub fn handle_screenshot(mut commands: Commands, keys: Res<ButtonInput<KeyCode>>) {
    if !keys.just_pressed(KeyCode::F12) {
        return;
    }
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = format!("{SCREENSHOT_DIR}/toki-{timestamp}.png");

    if let Err(e) = std::fs::create_dir_all(SCREENSHOT_DIR) {
        warn!("Cannot create {}: {}", SCREENSHOT_DIR, e);
        return;
    }

    info!("Saving screenshot to {}", path);
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
}

/// Escape quits
pub fn handle_quit(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Quitting...");
        exit.write(AppExit::Success);
    }
}
