//! Style registry mapping style ids to decoration templates.
//!
//! [`StyleRegistry`] is what a content view consults when it renders
//! decorations:
//!
//! 1. **Setup**: build the registry ([`StyleRegistry::defaults`] for the
//!    built-in `highlight` and `note` styles), register any host styles, then
//!    inject [`StyleRegistry::stylesheet`] once into the content.
//! 2. **Rendering**: look up each decoration's style and render its element.
//!
//! Once built, the registry is only read, so it can be shared between
//! rendering passes (e.g. behind an `Arc`) without locking.
//!
//! # Example
//!
//! ```rust
//! use html_decorations::{
//!     ClassNameAllocator, Decoration, HighlightConfig, Style, StyleRegistry, TemplateOptions,
//! };
//!
//! let classes = ClassNameAllocator::new();
//! let registry = StyleRegistry::defaults(&TemplateOptions::default(), &classes).unwrap();
//!
//! let css = registry.stylesheet();
//! assert!(css.contains(".readium-highlight-1"));
//!
//! let markup = registry
//!     .render(&Decoration::new("h1", Style::highlight(HighlightConfig::new())))
//!     .unwrap();
//! assert!(markup.starts_with("<div class=\"readium-highlight-1\""));
//! ```

use std::collections::BTreeMap;

use crate::class_name::ClassNameAllocator;
use crate::decoration::{Decoration, StyleId};
use crate::error::{RegistryError, RenderError};
use crate::template::{HtmlTemplate, TemplateOptions, TemplateSnapshot};

/// Registry of decoration templates, keyed by style id.
///
/// Iteration (and therefore the aggregate stylesheet) follows ascending style
/// id order.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    templates: BTreeMap<StyleId, HtmlTemplate>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `highlight` and `note` templates.
    ///
    /// Each call allocates new class names from `classes`, so registries built
    /// for different content views never share CSS rules.
    pub fn defaults(
        options: &TemplateOptions,
        classes: &ClassNameAllocator,
    ) -> Result<Self, RenderError> {
        let mut registry = Self::new();
        registry.register(StyleId::HIGHLIGHT, HtmlTemplate::highlight(options, classes)?);
        registry.register(StyleId::NOTE, HtmlTemplate::note(options, classes)?);
        Ok(registry)
    }

    /// Registers `template` under `id`, returning the template it replaces.
    pub fn register(
        &mut self,
        id: impl Into<StyleId>,
        template: HtmlTemplate,
    ) -> Option<HtmlTemplate> {
        let id = id.into();
        let previous = self.templates.insert(id.clone(), template);
        if previous.is_some() {
            log::debug!("replaced decoration template for style \"{id}\"");
        } else {
            log::debug!("registered decoration template for style \"{id}\"");
        }
        previous
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, id: impl Into<StyleId>, template: HtmlTemplate) -> Self {
        self.register(id, template);
        self
    }

    /// Looks up the template of a style.
    pub fn get(&self, id: &str) -> Option<&HtmlTemplate> {
        self.templates.get(id)
    }

    /// Looks up the template of a style.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no template is registered for `id`.
    pub fn lookup(&self, id: &str) -> Result<&HtmlTemplate, RegistryError> {
        self.get(id).ok_or_else(|| {
            log::warn!("no decoration template registered for style \"{id}\"");
            RegistryError::NotFound {
                id: StyleId::new(id.to_string()),
            }
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Renders a decoration with the template of its style.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownStyle`] if the style isn't registered, or
    /// [`RenderError::ConfigMismatch`] if the configuration doesn't fit it.
    pub fn render(&self, decoration: &Decoration) -> Result<String, RenderError> {
        let template = self.lookup(decoration.style.id.as_str())?;
        template.render(decoration)
    }

    /// Returns all template stylesheets joined with newlines, for injection
    /// into the content view.
    pub fn stylesheet(&self) -> String {
        self.templates
            .values()
            .filter_map(HtmlTemplate::stylesheet)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the serializable snapshot of every template.
    pub fn snapshot(&self) -> BTreeMap<StyleId, TemplateSnapshot> {
        self.templates
            .iter()
            .map(|(id, template)| (id.clone(), template.snapshot()))
            .collect()
    }

    /// Returns `{style id: {layout, width, stylesheet}}` as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        self.templates
            .iter()
            .map(|(id, template)| (id.to_string(), template.to_json()))
            .collect::<serde_json::Map<_, _>>()
            .into()
    }

    /// Returns an iterator over the registered style ids.
    pub fn ids(&self) -> impl Iterator<Item = &StyleId> {
        self.templates.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleId, &HtmlTemplate)> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::{HighlightConfig, NoteConfig, Style, StyleConfig};
    use crate::template::{Layout, Width};
    use serde_json::json;

    fn defaults(classes: &ClassNameAllocator) -> StyleRegistry {
        StyleRegistry::defaults(&TemplateOptions::default(), classes).unwrap()
    }

    #[test]
    fn test_defaults_contain_exactly_builtins() {
        let classes = ClassNameAllocator::new();
        let registry = defaults(&classes);

        let ids: Vec<&str> = registry.ids().map(StyleId::as_str).collect();
        assert_eq!(ids, vec!["highlight", "note"]);
        assert!(!registry.contains("underline"));
    }

    #[test]
    fn test_get_miss_is_none() {
        let classes = ClassNameAllocator::new();
        let registry = defaults(&classes);
        assert!(registry.get("bookmark").is_none());
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let registry = StyleRegistry::new();
        let result = registry.lookup("bookmark");
        assert!(matches!(result, Err(RegistryError::NotFound { id }) if id.as_str() == "bookmark"));
    }

    #[test]
    fn test_render_unknown_style() {
        let classes = ClassNameAllocator::new();
        let registry = defaults(&classes);
        let decoration = Decoration::new("x", Style::new("bookmark", StyleConfig::None));

        let result = registry.render(&decoration);
        assert!(matches!(result, Err(RenderError::UnknownStyle(id)) if id.as_str() == "bookmark"));
    }

    #[test]
    fn test_render_dispatches_by_style() {
        let classes = ClassNameAllocator::new();
        let registry = defaults(&classes);

        let highlight = registry
            .render(&Decoration::new("h", Style::highlight(HighlightConfig::new())))
            .unwrap();
        let note = registry
            .render(&Decoration::new("n", Style::note(NoteConfig::new())))
            .unwrap();

        assert!(highlight.contains("readium-highlight-1"));
        assert!(note.contains("readium-sidemark-2"));
    }

    #[test]
    fn test_register_replaces_and_returns_previous() {
        let classes = ClassNameAllocator::new();
        let mut registry = defaults(&classes);

        let previous = registry.register(
            StyleId::HIGHLIGHT,
            HtmlTemplate::new(Layout::Bounds).with_element("<mark/>"),
        );
        assert!(previous.is_some());
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry
                .render(&Decoration::new("h", Style::highlight(HighlightConfig::new())))
                .unwrap(),
            "<mark/>"
        );
    }

    #[test]
    fn test_stylesheet_concatenates_non_null_in_id_order() {
        let classes = ClassNameAllocator::new();
        let registry = defaults(&classes)
            .with("aaa", HtmlTemplate::new(Layout::Boxes).with_stylesheet(".aaa {}"))
            .with("bare", HtmlTemplate::new(Layout::Boxes));

        let css = registry.stylesheet();
        let aaa = css.find(".aaa {}").unwrap();
        let highlight = css.find(".readium-highlight-1 {").unwrap();
        let note = css.find(".readium-sidemark-2 {").unwrap();
        assert!(aaa < highlight && highlight < note);
        assert!(!css.contains("\n\n"));
    }

    #[test]
    fn test_empty_registry_stylesheet() {
        assert_eq!(StyleRegistry::new().stylesheet(), "");
    }

    #[test]
    fn test_to_json() {
        let classes = ClassNameAllocator::new();
        let registry = defaults(&classes);
        let json = registry.to_json();

        assert_eq!(json["highlight"]["layout"], json!("boxes"));
        assert_eq!(json["highlight"]["width"], json!("wrap"));
        assert_eq!(json["note"]["width"], json!("page"));
        assert!(json["note"]["stylesheet"].as_str().unwrap().contains("[dir=rtl]"));
        assert!(json["highlight"].get("element").is_none());
    }

    #[test]
    fn test_snapshot() {
        let classes = ClassNameAllocator::new();
        let snapshot = defaults(&classes).snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[&StyleId::NOTE].layout, Layout::Boxes);
        assert_eq!(snapshot[&StyleId::NOTE].width, Width::Page);
    }

    #[test]
    fn test_registries_never_share_class_names() {
        let classes = ClassNameAllocator::new();
        let first = defaults(&classes);
        let second = defaults(&classes);
        assert_ne!(first.stylesheet(), second.stylesheet());
        assert!(second.stylesheet().contains(".readium-highlight-3 {"));
    }
}
