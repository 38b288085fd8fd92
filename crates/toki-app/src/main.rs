//! Toki - a 3D timeline gallery.
//!
//! Events hang as framed panels along a row; drag, swipe or scroll to move
//! through time, click a frame to read it.

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;
use toki_core::{CategoryId, EventCatalog, GalleryNavigator, WheelMode};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod constants;
mod gallery;
mod ui;

use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "toki", version, about = "3D timeline gallery")]
struct Cli {
    /// Gallery config (default: ~/.config/toki/gallery.ron)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only show these categories (repeatable): tech, science, society, environment, ai
    #[arg(long = "category", value_name = "ID")]
    categories: Vec<CategoryId>,

    /// Start on the first event of this year
    #[arg(long, value_name = "YEAR")]
    focus_year: Option<i32>,

    /// What the scroll wheel does: zoom or step
    #[arg(long, value_name = "MODE")]
    wheel: Option<WheelMode>,
}

fn main() {
    let cli = Cli::parse();

    // Set up file logging
    let log_dir = std::env::var("TOKI_LOG_DIR").unwrap_or_else(|_| "/tmp".to_string());
    let file_appender = tracing_appender::rolling::never(&log_dir, "toki-app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Debug for our crates, warn for others
            "toki_app=debug,toki_core=debug,warn".into()
        }))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Toki - logging to {}/toki-app.log", log_dir);

    let overrides = config::Overrides {
        categories: cli.categories,
        focus_year: cli.focus_year,
        wheel_mode: cli.wheel,
    };
    let mut gallery_config = config::load_config(cli.config.as_deref());
    overrides.apply(&mut gallery_config);

    let navigator = GalleryNavigator::with_categories(
        EventCatalog::builtin(),
        gallery_config,
        overrides.active_categories(),
    );
    info!(
        "{} of {} events shown, starting at index {}",
        navigator.len(),
        navigator.catalog().len(),
        navigator.current_index()
    );

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "時 Toki".into(),
                        resolution: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                })
                // We install our own subscriber above
                .disable::<bevy::log::LogPlugin>(),
        )
        // Resources
        .insert_resource(ui::theme::load_theme())
        // Gallery (3D frames, input, camera)
        .add_plugins(gallery::GalleryPlugin::new(navigator))
        // Overlay (filters, zoom, details)
        .add_plugins(ui::OverlayPlugin)
        // Debug keys
        .add_systems(Update, (ui::debug::handle_screenshot, ui::debug::handle_quit))
        .run();
}
