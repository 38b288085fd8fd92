//! Colours and per-category frame styles.
//!
//! `Theme::default()` carries the built-in palette. [`load_theme`] layers
//! `~/.config/toki/theme.ron` on top of it:
//!
//! ```ron
//! (
//!     background: Some("#101018"),
//!     frames: {
//!         ai: (frame: "#222222", matte: "#fafafa", border_width: 0.14, inlay: "#9b59b6"),
//!     },
//! )
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use toki_core::{Category, CategoryId};

/// Errors from reading a theme file.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid colour {0:?} (expected #rrggbb)")]
    BadColor(String),
}

/// How the frame around one category's events is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub frame: Color,
    pub matte: Color,
    /// Moulding width in world units.
    pub border_width: f32,
    pub inlay: Color,
}

impl FrameStyle {
    fn rgb(frame: [u8; 3], matte: [u8; 3], border_width: f32, inlay: [u8; 3]) -> Self {
        Self {
            frame: Color::srgb_u8(frame[0], frame[1], frame[2]),
            matte: Color::srgb_u8(matte[0], matte[1], matte[2]),
            border_width,
            inlay: Color::srgb_u8(inlay[0], inlay[1], inlay[2]),
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::rgb([0x34, 0x49, 0x5e], [0xec, 0xf0, 0xf1], 0.1, [0x34, 0x98, 0xdb])
    }
}

fn builtin_frame_styles() -> HashMap<CategoryId, FrameStyle> {
    HashMap::from([
        (CategoryId::Tech, FrameStyle::default()),
        (
            CategoryId::Science,
            FrameStyle::rgb([0x2c, 0x3e, 0x50], [0xf5, 0xf5, 0xf5], 0.12, [0x27, 0xae, 0x60]),
        ),
        (
            CategoryId::Society,
            FrameStyle::rgb([0x7f, 0x8c, 0x8d], [0xf9, 0xf3, 0xe3], 0.08, [0xf1, 0xc4, 0x0f]),
        ),
        (
            CategoryId::Environment,
            FrameStyle::rgb([0x8e, 0x44, 0xad], [0xe8, 0xf8, 0xf5], 0.1, [0x16, 0xa0, 0x85]),
        ),
        (
            CategoryId::Ai,
            FrameStyle::rgb([0x2c, 0x3e, 0x50], [0xf0, 0xf0, 0xf0], 0.1, [0x9b, 0x59, 0xb6]),
        ),
    ])
}

/// Global palette plus frame styles.
#[derive(Resource, Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub accent: Color,
    pub panel_bg: Color,
    pub button_bg: Color,
    pub button_active: Color,
    frame_styles: HashMap<CategoryId, FrameStyle>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::srgb(0.04, 0.04, 0.07),
            fg: Color::srgb(0.93, 0.94, 0.95),
            fg_dim: Color::srgb(0.6, 0.62, 0.66),
            accent: Color::srgb(0.2, 0.6, 0.86),
            panel_bg: Color::srgba(0.08, 0.08, 0.12, 0.85),
            button_bg: Color::srgba(1.0, 1.0, 1.0, 0.08),
            button_active: Color::srgba(1.0, 1.0, 1.0, 0.25),
            frame_styles: builtin_frame_styles(),
        }
    }
}

impl Theme {
    pub fn frame_style(&self, category: CategoryId) -> FrameStyle {
        self.frame_styles
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Badge / filter colour for a category, falling back to the accent.
    pub fn category_color(&self, category: &Category) -> Color {
        parse_hex(&category.color).unwrap_or(self.accent)
    }
}

/// Parse `#rrggbb` (or `rrggbb`).
pub fn parse_hex(value: &str) -> Result<Color, ThemeError> {
    Srgba::hex(value)
        .map(Color::from)
        .map_err(|_| ThemeError::BadColor(value.to_string()))
}

// ============================================================================
// THEME FILE
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    background: Option<String>,
    foreground: Option<String>,
    accent: Option<String>,
    panel: Option<String>,
    frames: BTreeMap<CategoryId, FrameStyleFile>,
}

#[derive(Debug, Deserialize)]
struct FrameStyleFile {
    frame: String,
    matte: String,
    border_width: f32,
    inlay: String,
}

impl FrameStyleFile {
    fn resolve(&self) -> Result<FrameStyle, ThemeError> {
        Ok(FrameStyle {
            frame: parse_hex(&self.frame)?,
            matte: parse_hex(&self.matte)?,
            border_width: self.border_width.max(0.0),
            inlay: parse_hex(&self.inlay)?,
        })
    }
}

/// Get the theme file path (~/.config/toki/theme.ron).
pub fn theme_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("toki").join("theme.ron"))
}

/// Load the theme from the user's config directory.
///
/// If the file doesn't exist or has errors, returns `Theme::default()` and logs a warning.
pub fn load_theme() -> Theme {
    let Some(path) = theme_file_path() else {
        info!("No config directory available, using default theme");
        return Theme::default();
    };

    if !path.exists() {
        debug!("Theme file not found at {:?}, using defaults", path);
        return Theme::default();
    }

    match load_theme_from_file(&path) {
        Ok(theme) => {
            info!("Loaded theme from {:?}", path);
            theme
        }
        Err(e) => {
            warn!("Failed to load theme from {:?}: {}", path, e);
            warn!("Falling back to default theme");
            Theme::default()
        }
    }
}

fn load_theme_from_file(path: &Path) -> Result<Theme, ThemeError> {
    let text = std::fs::read_to_string(path)?;
    parse_theme(&text)
}

/// Parse theme RON over the defaults.
pub fn parse_theme(text: &str) -> Result<Theme, ThemeError> {
    let file: ThemeFile = ron::from_str(text)?;
    let mut theme = Theme::default();

    if let Some(bg) = &file.background {
        theme.bg = parse_hex(bg)?;
    }
    if let Some(fg) = &file.foreground {
        theme.fg = parse_hex(fg)?;
    }
    if let Some(accent) = &file.accent {
        theme.accent = parse_hex(accent)?;
    }
    if let Some(panel) = &file.panel {
        // keep the default translucency
        theme.panel_bg = parse_hex(panel)?.with_alpha(theme.panel_bg.alpha());
    }
    for (category, style) in &file.frames {
        theme.frame_styles.insert(*category, style.resolve()?);
    }
    Ok(theme)
}
