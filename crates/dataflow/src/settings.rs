use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use theme::ThemeMode;

/// Surface background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    /// Image asset path.
    pub path: String,
    /// Repeat the image across the surface instead of stretching it.
    pub tile: bool,
    /// Cell size of the tiled grid, in pixels.
    pub grid_spacing: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            path: "images/grid_10.png".into(),
            tile: true,
            grid_spacing: 10.0,
        }
    }
}

/// Configuration for a [`crate::DataflowPanel`].
///
/// Every field has a default, so a settings file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Where the dataflow figure is placed on the surface.
    pub figure_offset: Vec2,
    /// Subtracted from each display dimension when sizing the surface.
    pub display_margin: f32,
    pub background: Background,
    /// Name prompt message. `{name}` is replaced by the dropped type's display name.
    pub prompt_template: String,
    pub theme: ThemeMode,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            figure_offset: Vec2::new(20.0, 20.0),
            display_margin: 100.0,
            background: Background::default(),
            prompt_template: "Enter name for new {name}".into(),
            theme: ThemeMode::Light,
        }
    }
}

impl PanelSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse panel settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn prompt_message(&self, display_name: &str) -> String {
        self.prompt_template.replace("{name}", display_name)
    }
}
