//! Minimal theming for the dataflow workbench.
//!
//! Provides colors for the surface, figures, drop feedback and UI chrome.

use gpui::Hsla;
use serde::{Deserialize, Serialize};

/// Which built-in palette to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Theme colors for the dataflow editor.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Surface background
    pub surface_background: Hsla,

    /// Background grid lines
    pub grid: Hsla,

    /// Dataflow figure body
    pub figure_fill: Hsla,

    /// Dataflow figure outline and header
    pub figure_border: Hsla,
    pub figure_header: Hsla,

    /// Nested compartment (assembly) figures
    pub compartment_fill: Hsla,
    pub compartment_border: Hsla,

    /// Leaf component boxes
    pub component_fill: Hsla,
    pub component_border: Hsla,

    /// Connection lines between components
    pub connection: Hsla,

    /// Tint shown over the surface while an accepted payload hovers it
    pub drop_highlight: Hsla,

    /// Hover indicator color
    pub hover: Hsla,

    /// UI background
    pub ui_background: Hsla,

    /// UI border
    pub ui_border: Hsla,

    /// UI text
    pub ui_text: Hsla,

    /// UI text muted
    pub ui_text_muted: Hsla,

    /// Error messages
    pub error: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            surface_background: gpui::white(),
            grid: hsla(0.0, 0.0, 0.92, 1.0),
            figure_fill: hsla(0.0, 0.0, 0.99, 1.0),
            figure_border: hsla(0.58, 0.3, 0.45, 1.0),
            figure_header: hsla(0.58, 0.35, 0.88, 1.0),
            compartment_fill: hsla(0.58, 0.3, 0.96, 1.0),
            compartment_border: hsla(0.58, 0.3, 0.6, 1.0),
            component_fill: hsla(0.13, 0.6, 0.92, 1.0),
            component_border: hsla(0.1, 0.5, 0.45, 1.0),
            connection: hsla(0.0, 0.0, 0.3, 1.0),
            drop_highlight: hsla(0.58, 0.9, 0.5, 0.12),
            hover: hsla(0.58, 0.9, 0.5, 0.3), // Blue transparent
            ui_background: hsla(0.0, 0.0, 0.98, 1.0),
            ui_border: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text: hsla(0.0, 0.0, 0.1, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
            error: hsla(0.0, 0.75, 0.45, 1.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            surface_background: hsla(0.0, 0.0, 0.1, 1.0),
            grid: hsla(0.0, 0.0, 0.16, 1.0),
            figure_fill: hsla(0.0, 0.0, 0.13, 1.0),
            figure_border: hsla(0.58, 0.3, 0.55, 1.0),
            figure_header: hsla(0.58, 0.25, 0.22, 1.0),
            compartment_fill: hsla(0.58, 0.2, 0.17, 1.0),
            compartment_border: hsla(0.58, 0.3, 0.45, 1.0),
            component_fill: hsla(0.1, 0.3, 0.22, 1.0),
            component_border: hsla(0.1, 0.5, 0.55, 1.0),
            connection: hsla(0.0, 0.0, 0.75, 1.0),
            drop_highlight: hsla(0.58, 0.9, 0.5, 0.18),
            hover: hsla(0.58, 0.9, 0.5, 0.3),
            ui_background: hsla(0.0, 0.0, 0.12, 1.0),
            ui_border: hsla(0.0, 0.0, 0.2, 1.0),
            ui_text: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
            error: hsla(0.0, 0.7, 0.6, 1.0),
        }
    }
}

/// Helper to create Hsla from h, s, l, a values.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}
