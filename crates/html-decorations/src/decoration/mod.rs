//! Decorations as consumed by the template engine.
//!
//! This module provides:
//!
//! - [`Decoration`]: an annotation anchored to a range of rendered content
//! - [`Style`]: the style id plus the per-instance configuration
//! - [`StyleId`]: identifier used for registry lookup
//! - [`StyleConfig`]: closed set of configuration shapes, one per style family
//!
//! The target range is carried as an opaque [`serde_json::Value`] locator;
//! nothing in this crate looks inside it.

mod config;
mod style_id;

pub use config::{HighlightConfig, NoteConfig, StyleConfig};
pub use style_id::StyleId;

use serde::{Deserialize, Serialize};

/// The visual treatment of a decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: StyleId,
    #[serde(default)]
    pub config: StyleConfig,
}

impl Style {
    pub fn new(id: impl Into<StyleId>, config: StyleConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }

    /// A `highlight` style with the given configuration.
    pub fn highlight(config: HighlightConfig) -> Self {
        Self::new(StyleId::HIGHLIGHT, StyleConfig::Highlight(config))
    }

    /// An `underline` style; underlines share the highlight configuration.
    pub fn underline(config: HighlightConfig) -> Self {
        Self::new(StyleId::UNDERLINE, StyleConfig::Highlight(config))
    }

    /// A `note` style with the given configuration.
    pub fn note(config: NoteConfig) -> Self {
        Self::new(StyleId::NOTE, StyleConfig::Note(config))
    }
}

/// An annotation to render on top of the content.
///
/// # Example
///
/// ```rust
/// use html_decorations::{Decoration, HighlightConfig, Style, Tint};
///
/// let decoration = Decoration::new(
///     "hl-1",
///     Style::highlight(HighlightConfig::new().tint(Tint::RED)),
/// );
/// assert_eq!(decoration.style.id.as_str(), "highlight");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: String,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<serde_json::Value>,
}

impl Decoration {
    pub fn new(id: impl Into<String>, style: Style) -> Self {
        Self {
            id: id.into(),
            style,
            locator: None,
        }
    }

    /// Attaches the host's locator for the decorated range.
    pub fn with_locator(mut self, locator: serde_json::Value) -> Self {
        self.locator = Some(locator);
        self
    }
}
