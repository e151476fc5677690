//! Parameters of the built-in templates.

use serde::{Deserialize, Serialize};

use crate::color::Tint;
use crate::error::OptionsError;

/// Edge insets, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Look of the built-in templates.
///
/// Every field has a default, so option files only need the keys they change:
///
/// ```yaml
/// default_tint: "#ffeb3b"
/// alpha: 0.4
/// padding: { left: 2, right: 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Tint used when a decoration doesn't provide one.
    pub default_tint: Tint,
    /// Underline thickness, in pixels.
    pub line_weight: u32,
    pub corner_radius: u32,
    /// Opacity of highlight fills.
    pub alpha: f64,
    /// Extra room around highlighted boxes.
    pub padding: Insets,
    pub note_margin_top: f64,
    pub note_margin_bottom: f64,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            default_tint: Tint::YELLOW,
            line_weight: 2,
            corner_radius: 3,
            alpha: 0.3,
            padding: Insets::new(0.0, 1.0, 0.0, 1.0),
            note_margin_top: -4.0,
            note_margin_bottom: 0.0,
        }
    }
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_tint(mut self, tint: Tint) -> Self {
        self.default_tint = tint;
        self
    }

    pub fn line_weight(mut self, line_weight: u32) -> Self {
        self.line_weight = line_weight;
        self
    }

    pub fn corner_radius(mut self, corner_radius: u32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Loads options from YAML, filling missing keys with defaults.
    pub fn from_yaml(source: &str) -> Result<Self, OptionsError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads options from JSON, filling missing keys with defaults.
    pub fn from_json(source: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(source)?)
    }
}
