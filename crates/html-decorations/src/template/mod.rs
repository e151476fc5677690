//! Decoration templates: layout policy plus markup and stylesheet generation.
//!
//! This module provides:
//!
//! - [`HtmlTemplate`]: how one decoration style becomes HTML
//! - [`Layout`] and [`Width`]: positioning policy handed to the host
//! - [`Element`]: the element renderer, as data
//! - [`TemplateSnapshot`]: the serializable part of a template
//! - [`TemplateOptions`]: parameters of the built-in templates
//!
//! Element renderers are plain data ([`Element`]) rather than closures: the
//! parameters a built-in template needs at render time (class name, default
//! tint, alpha) live in a params struct stored in the template and passed to
//! the renderer explicitly.

mod builtin;
mod markup;
mod options;

pub use builtin::{HighlightParams, NoteParams, UnderlineParams};
pub use markup::MarkupElement;
pub use options::{Insets, TemplateOptions};

use serde::{Deserialize, Serialize};

use crate::decoration::Decoration;
use crate::error::RenderError;

/// Markup used by templates that don't provide their own element.
pub const DEFAULT_ELEMENT: &str = "<div/>";

/// Number of HTML elements created for a decoration and their placement
/// relative to the matched DOM range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A single element covering the smallest region containing all boxes.
    Bounds,
    /// One element per CSS border box, e.g. per line of text.
    Boxes,
}

/// How the width of each created element expands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// Smallest width fitting the border box.
    #[default]
    Wrap,
    /// Fills the bounds layout.
    Bounds,
    /// Fills the anchor page, useful for dual page.
    Viewport,
    /// Fills the whole viewport.
    Page,
}

/// Renders a decoration into markup.
#[derive(Debug, Clone)]
pub enum Element {
    /// Fixed markup, identical for every decoration.
    Static(String),
    Highlight(HighlightParams),
    Underline(UnderlineParams),
    Note(NoteParams),
    /// Host-provided MiniJinja markup.
    Markup(MarkupElement),
}

impl Element {
    /// Renders the markup for `decoration`.
    pub fn render(&self, decoration: &Decoration) -> Result<String, RenderError> {
        match self {
            Element::Static(markup) => Ok(markup.clone()),
            Element::Highlight(params) => builtin::render_highlight(params, decoration),
            Element::Underline(params) => builtin::render_underline(params, decoration),
            Element::Note(params) => builtin::render_note(params, decoration),
            Element::Markup(markup) => markup.render(decoration),
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Element::Static(DEFAULT_ELEMENT.to_string())
    }
}

/// Turns a [`Decoration`] into HTML elements and an associated stylesheet.
///
/// Templates are immutable once built. The stylesheet, when present, only
/// targets class names the template allocated for itself.
///
/// # Example
///
/// ```rust
/// use html_decorations::{HtmlTemplate, Layout, Width};
///
/// let template = HtmlTemplate::new(Layout::Bounds)
///     .with_width(Width::Viewport)
///     .with_element("<div class=\"frame\"/>")
///     .with_stylesheet(".frame { outline: 1px solid red; }");
///
/// assert_eq!(template.layout(), Layout::Bounds);
/// assert_eq!(template.stylesheet(), Some(".frame { outline: 1px solid red; }"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlTemplate {
    layout: Layout,
    width: Width,
    element: Element,
    stylesheet: Option<String>,
}

impl HtmlTemplate {
    /// Creates a template with `wrap` width, a bare `<div/>` element and no stylesheet.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            width: Width::default(),
            element: Element::default(),
            stylesheet: None,
        }
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Sets the element renderer. Strings become [`Element::Static`].
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.element = element.into();
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    /// Creates a template whose element is a MiniJinja markup source.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if the source doesn't compile.
    pub fn markup(layout: Layout, source: impl Into<String>) -> Result<Self, RenderError> {
        Ok(Self::new(layout).with_element(MarkupElement::compile(source)?))
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    /// Renders the HTML element for `decoration`.
    ///
    /// Rendering is deterministic: the same decoration always yields the same
    /// markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ConfigMismatch`] if the decoration's
    /// configuration has the wrong shape for this template.
    pub fn render(&self, decoration: &Decoration) -> Result<String, RenderError> {
        self.element.render(decoration)
    }

    /// Returns the serializable part of this template.
    pub fn snapshot(&self) -> TemplateSnapshot {
        TemplateSnapshot {
            layout: self.layout,
            width: self.width,
            stylesheet: self.stylesheet.clone(),
        }
    }

    /// Returns the snapshot as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "layout": self.layout,
            "width": self.width,
            "stylesheet": self.stylesheet,
        })
    }
}

impl From<&str> for Element {
    fn from(markup: &str) -> Self {
        Element::Static(markup.to_string())
    }
}

impl From<String> for Element {
    fn from(markup: String) -> Self {
        Element::Static(markup)
    }
}

impl From<MarkupElement> for Element {
    fn from(markup: MarkupElement) -> Self {
        Element::Markup(markup)
    }
}

/// The data part of an [`HtmlTemplate`], for hosts that pass template
/// metadata across a boundary that cannot carry native functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSnapshot {
    pub layout: Layout,
    pub width: Width,
    pub stylesheet: Option<String>,
}
