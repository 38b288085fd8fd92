//! Gallery config loading for the app.
//!
//! Reads `~/.config/toki/gallery.ron` (or `--config PATH`) into a
//! [`GalleryConfig`], then layers command-line overrides on top. A missing
//! file is normal; a broken one is logged and replaced by defaults so the
//! gallery always starts.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use toki_core::{CategoryId, GalleryConfig, WheelMode};

/// Get the config file path (~/.config/toki/gallery.ron).
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("toki").join("gallery.ron"))
}

/// Load the gallery config from `explicit` or the default location.
///
/// Never fails: errors are logged and `GalleryConfig::default()` is returned.
pub fn load_config(explicit: Option<&Path>) -> GalleryConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let Some(path) = config_file_path() else {
                info!("No config directory available, using default gallery config");
                return GalleryConfig::default();
            };
            if !path.exists() {
                info!("Gallery config not found at {:?}, using defaults", path);
                return GalleryConfig::default();
            }
            path
        }
    };

    match GalleryConfig::load(&path) {
        Ok(config) => {
            info!("Loaded gallery config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load gallery config from {:?}: {}", path, e);
            warn!("Falling back to default gallery config");
            GalleryConfig::default()
        }
    }
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub categories: Vec<CategoryId>,
    pub focus_year: Option<i32>,
    pub wheel_mode: Option<WheelMode>,
}

impl Overrides {
    pub fn apply(&self, config: &mut GalleryConfig) {
        if let Some(year) = self.focus_year {
            config.focus_year = Some(year);
        }
        if let Some(mode) = self.wheel_mode {
            config.navigation.wheel_mode = mode;
        }
    }

    /// Initial category filter; empty means all categories.
    pub fn active_categories(&self) -> BTreeSet<CategoryId> {
        self.categories.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_path_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(focus_year: Some(2030))").unwrap();
        let config = load_config(Some(file.path()));
        assert_eq!(config.focus_year, Some(2030));
    }

    #[test]
    fn test_broken_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(camera: (smoothing: 7.0))").unwrap();
        let config = load_config(Some(file.path()));
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_nan_tunable_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(navigation: (zoom_min: NaN))").unwrap();
        let config = load_config(Some(file.path()));
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("missing.ron")));
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = GalleryConfig::default();
        let overrides = Overrides {
            categories: vec![CategoryId::Ai, CategoryId::Tech, CategoryId::Ai],
            focus_year: Some(2019),
            wheel_mode: Some(WheelMode::Step),
        };
        overrides.apply(&mut config);
        assert_eq!(config.focus_year, Some(2019));
        assert_eq!(config.navigation.wheel_mode, WheelMode::Step);
        assert_eq!(overrides.active_categories().len(), 2);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = GalleryConfig::default();
        Overrides::default().apply(&mut config);
        assert_eq!(config, GalleryConfig::default());
        assert!(Overrides::default().active_categories().is_empty());
    }
}
