//! Per-style configuration payloads.

use serde::{Deserialize, Serialize};

use crate::color::Tint;

fn active_by_default() -> bool {
    true
}

/// Configuration of the `highlight` and `underline` styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Overrides the template's default tint.
    #[serde(default)]
    pub tint: Option<Tint>,
    /// Inactive highlights are rendered without a fill, e.g. while the user
    /// is still editing the selection.
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

impl HighlightConfig {
    pub fn new() -> Self {
        Self {
            tint: None,
            is_active: true,
        }
    }

    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration of the `note` style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteConfig {
    #[serde(default)]
    pub tint: Option<Tint>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

impl NoteConfig {
    pub fn new() -> Self {
        Self {
            tint: None,
            is_active: true,
        }
    }

    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration payload of a decoration, one variant per shape.
///
/// Serialized with a `kind` tag:
///
/// ```json
/// { "kind": "highlight", "tint": "#ff0", "is_active": true }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StyleConfig {
    Highlight(HighlightConfig),
    Note(NoteConfig),
    /// Free-form data for host-registered markup templates.
    Custom { data: serde_json::Value },
    /// No configuration; templates fall back to their defaults.
    #[default]
    None,
}

impl StyleConfig {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleConfig::Highlight(_) => "highlight",
            StyleConfig::Note(_) => "note",
            StyleConfig::Custom { .. } => "custom",
            StyleConfig::None => "none",
        }
    }
}

impl From<HighlightConfig> for StyleConfig {
    fn from(config: HighlightConfig) -> Self {
        StyleConfig::Highlight(config)
    }
}

impl From<NoteConfig> for StyleConfig {
    fn from(config: NoteConfig) -> Self {
        StyleConfig::Note(config)
    }
}
