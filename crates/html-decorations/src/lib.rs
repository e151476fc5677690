//! HTML templates for rendering decorations over paginated content.
//!
//! A *decoration* is an annotation anchored to a range of rendered content: a
//! highlight, a margin note, an underline. This crate turns decorations into
//! the HTML elements and CSS a content view overlays on its text. Measuring the
//! decorated range and positioning the elements stays with the host.
//!
//! # Overview
//!
//! - [`StyleRegistry`]: style id → [`HtmlTemplate`], with built-in defaults
//! - [`HtmlTemplate`]: [`Layout`]/[`Width`] policy, element renderer and
//!   stylesheet for one style
//! - [`ClassNameAllocator`]: unique CSS class names so template stylesheets
//!   never collide
//! - [`Decoration`], [`Style`], [`StyleConfig`]: what gets rendered
//! - [`bridge`]: payloads for hosts talking to the content through a script
//!
//! # Example
//!
//! ```rust
//! use html_decorations::{
//!     default_templates, ClassNameAllocator, Decoration, HighlightConfig, NoteConfig, Style,
//!     TemplateOptions, Tint,
//! };
//!
//! let classes = ClassNameAllocator::new();
//! let registry = default_templates(&TemplateOptions::default(), &classes).unwrap();
//!
//! // Injected once per content view.
//! let stylesheet = registry.stylesheet();
//! assert!(stylesheet.contains("[dir=rtl] .readium-sidemark-2"));
//!
//! let highlight = Decoration::new("h1", Style::highlight(HighlightConfig::new()));
//! assert_eq!(
//!     registry.render(&highlight).unwrap(),
//!     r#"<div class="readium-highlight-1" style="background-color: rgba(255,255,0,0.3) !important;"/>"#
//! );
//!
//! let note = Decoration::new("n1", Style::note(NoteConfig::new().tint(Tint::RED)));
//! assert!(registry.render(&note).unwrap().contains("rgba(255,0,0,1.0)"));
//! ```

pub mod bridge;
mod class_name;
mod color;
mod decoration;
mod error;
mod registry;
mod template;

pub use class_name::{ClassNameAllocator, DEFAULT_CLASS_PREFIX};
pub use color::Tint;
pub use decoration::{Decoration, HighlightConfig, NoteConfig, Style, StyleConfig, StyleId};
pub use error::{OptionsError, RegistryError, RenderError, TintParseError};
pub use registry::StyleRegistry;
pub use template::{
    Element, HighlightParams, HtmlTemplate, Insets, Layout, MarkupElement, NoteParams,
    TemplateOptions, TemplateSnapshot, UnderlineParams, Width, DEFAULT_ELEMENT,
};

/// Creates the built-in `highlight` and `note` templates.
///
/// Shorthand for [`StyleRegistry::defaults`].
pub fn default_templates(
    options: &TemplateOptions,
    classes: &ClassNameAllocator,
) -> Result<StyleRegistry, RenderError> {
    StyleRegistry::defaults(options, classes)
}
