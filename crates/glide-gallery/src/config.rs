//! Gallery configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/glide/gallery.yaml

use anyhow::{Context, Result};
use glide_core::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use glide_widgets::STRIP_HEIGHT;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Carousel behaviour (page size, direction, thresholds, timings)
    pub carousel: CarouselConfig,
    /// Height of the slide strip in pixels
    pub strip_height: f32,
    /// Slides shown in the gallery
    pub slides: Vec<SlideConfig>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            strip_height: STRIP_HEIGHT,
            slides: default_slides(),
        }
    }
}

impl GalleryConfig {
    /// Clamp loaded values into range
    pub fn validate(&mut self) {
        self.carousel.validate();
        if !(self.strip_height.is_finite() && self.strip_height > 0.0) {
            log::warn!(
                "validate: strip_height {} is invalid, using {}",
                self.strip_height,
                STRIP_HEIGHT
            );
            self.strip_height = STRIP_HEIGHT;
        }
        if self.slides.is_empty() {
            log::warn!("validate: no slides configured, using the default deck");
            self.slides = default_slides();
        }
    }
}

/// A single slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideConfig {
    /// Title drawn in the middle of the slide
    pub title: String,
    /// Background color as RGB (0.0-1.0)
    #[serde(default = "default_slide_color")]
    pub color: [f32; 3],
}

fn default_slide_color() -> [f32; 3] {
    [0.25, 0.25, 0.3]
}

fn default_slides() -> Vec<SlideConfig> {
    [
        ("Dawn", [0.85, 0.45, 0.3]),
        ("Harbor", [0.2, 0.45, 0.65]),
        ("Meadow", [0.3, 0.6, 0.35]),
        ("Dune", [0.75, 0.6, 0.3]),
        ("Dusk", [0.45, 0.3, 0.6]),
    ]
    .into_iter()
    .map(|(title, color)| SlideConfig {
        title: title.to_string(),
        color,
    })
    .collect()
}

/// Get the default config file path
///
/// Returns: ~/.config/glide/gallery.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glide")
        .join("gallery.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> GalleryConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return GalleryConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<GalleryConfig>(&contents) {
            Ok(mut config) => {
                config.validate();
                log::info!(
                    "load_config: Loaded config - {} slides, {} visible, {}",
                    config.slides.len(),
                    config.carousel.visible_count,
                    config.carousel.direction
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                GalleryConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            GalleryConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &GalleryConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::Direction;

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.slides.len(), 5);
        assert_eq!(config.strip_height, STRIP_HEIGHT);
        assert_eq!(config.carousel, CarouselConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("missing.yaml"));
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.yaml");
        std::fs::write(&path, "slides: [not, a, slide").unwrap();
        assert_eq!(load_config(&path), GalleryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gallery.yaml");

        let mut config = GalleryConfig::default();
        config.carousel.visible_count = 3;
        config.carousel.direction = Direction::RightToLeft;
        config.slides.truncate(2);
        save_config(&config, &path).unwrap();

        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.yaml");
        std::fs::write(
            &path,
            "carousel:\n  visible_count: 0\nstrip_height: -4\nslides: []\n",
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.carousel.visible_count, 1);
        assert_eq!(config.strip_height, STRIP_HEIGHT);
        assert_eq!(config.slides.len(), 5);
    }

    #[test]
    fn test_slide_color_default() {
        let slide: SlideConfig = serde_yaml::from_str("title: Plain\n").unwrap();
        assert_eq!(slide.color, default_slide_color());
    }
}
