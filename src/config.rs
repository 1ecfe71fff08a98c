//! Viewer configuration and anchor files.
//!
//! Configuration is a single JSON document with three optional sections:
//!
//! ```json
//! {
//!   "window": { "width": 1280, "height": 800, "title": "Pixel Town" },
//!   "generator": { "world_tiles": 80, "seeds": { "terrain": 42 } },
//!   "demo": { "characters": 12, "seed": 7 }
//! }
//! ```
//!
//! Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::render::RenderSettings;
use crate::surface::SurfaceSpec;
use crate::world::{default_locations, Location};
use crate::worldgen::GenParams;

/// Top-level viewer configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub generator: GenParams,
    pub demo: DemoConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: usize,
    /// Initial zoom, clamped by the camera
    pub zoom: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pixel Town".to_string(),
            width: 960,
            height: 640,
            target_fps: 60,
            zoom: 1.0,
        }
    }
}

/// Settings for the built-in demo population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub characters: usize,
    /// Random seed for movement and chatter; random when absent
    pub seed: Option<u64>,
    /// Rendered frames per simulation tick
    pub frames_per_tick: u32,
    /// Chance per character per tick to say something
    pub chat_chance: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            characters: 8,
            seed: None,
            frames_per_tick: 30,
            chat_chance: 0.08,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if the content is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read(path)?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Renderer settings derived from the window section.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            surface: SurfaceSpec {
                title: self.window.title.clone(),
                width: self.window.width,
                height: self.window.height,
            },
            ..RenderSettings::default()
        }
    }
}

/// Load anchors from a JSON array of `{name, x, y, type}` objects.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or
/// [`ConfigError::Json`] if the content is not a valid anchor list.
pub fn load_locations(path: &Path) -> Result<Vec<Location>, ConfigError> {
    let contents = read(path)?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Anchors from `path` if given, otherwise the stock set.
pub fn locations_or_default(path: Option<&Path>) -> Result<Vec<Location>, ConfigError> {
    match path {
        Some(path) => load_locations(path),
        None => Ok(default_locations()),
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ViewerConfig = serde_json::from_str(
            r#"{"window": {"width": 1280}, "generator": {"seeds": {"terrain": 9}}, "demo": {"seed": 7}}"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 640);
        assert_eq!(config.generator.seeds.terrain, 9);
        assert_eq!(config.generator.seeds.houses, 777);
        assert_eq!(config.generator.world_tiles, 80);
        assert_eq!(config.demo.seed, Some(7));
        assert_eq!(config.demo.characters, 8);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.render_settings().surface.width, 960);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ViewerConfig::from_file(Path::new("/nonexistent/pixel_town.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pixel_town.json"));
    }

    #[test]
    fn test_bad_anchor_file_is_json_error() {
        let path = std::env::temp_dir().join(format!("pixel_town_anchors_{}.json", std::process::id()));
        std::fs::write(&path, "[{\"name\": 3}]").unwrap();
        let err = load_locations(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_default_anchor_fallback() {
        assert_eq!(locations_or_default(None).unwrap().len(), 5);
    }
}
