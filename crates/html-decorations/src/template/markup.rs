//! Host-provided element markup written as MiniJinja templates.

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, Value};

use crate::decoration::Decoration;
use crate::error::RenderError;

const ELEMENT_TEMPLATE: &str = "element";

/// An element renderer backed by a MiniJinja source.
///
/// The template sees the decoration as `id`, `style` (the style id) and
/// `config` (the tagged configuration), plus any construction-time variables
/// added with [`with_var`](Self::with_var). Output is HTML-escaped.
///
/// # Example
///
/// ```rust
/// use html_decorations::{
///     ClassNameAllocator, Decoration, HtmlTemplate, Layout, MarkupElement, Style, StyleConfig,
/// };
/// use serde_json::json;
///
/// let classes = ClassNameAllocator::new();
/// let class_name = classes.allocate("bookmark");
/// let element = MarkupElement::compile(
///     r#"<div class="{{ class_name }}" title="{{ config.data.label }}"/>"#,
/// )
/// .unwrap()
/// .with_var("class_name", class_name.as_str());
/// let template = HtmlTemplate::new(Layout::Bounds)
///     .with_element(element)
///     .with_stylesheet(format!(".{class_name} {{ border: 1px dashed; }}"));
///
/// let decoration = Decoration::new(
///     "b1",
///     Style::new("bookmark", StyleConfig::Custom { data: json!({ "label": "Intro" }) }),
/// );
/// assert_eq!(
///     template.render(&decoration).unwrap(),
///     r#"<div class="readium-bookmark-1" title="Intro"/>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MarkupElement {
    env: Environment<'static>,
    vars: BTreeMap<String, Value>,
}

impl MarkupElement {
    /// Compiles `source`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] on syntax errors.
    pub fn compile(source: impl Into<String>) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template_owned(ELEMENT_TEMPLATE.to_string(), source.into())?;
        Ok(Self {
            env,
            vars: BTreeMap::new(),
        })
    }

    /// Adds a variable available to every render, e.g. an allocated class name.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub(super) fn render(&self, decoration: &Decoration) -> Result<String, RenderError> {
        let mut ctx = self.vars.clone();
        ctx.insert("id".to_string(), Value::from(decoration.id.as_str()));
        ctx.insert("style".to_string(), Value::from(decoration.style.id.as_str()));
        ctx.insert(
            "config".to_string(),
            Value::from_serialize(&decoration.style.config),
        );

        let tmpl = self.env.get_template(ELEMENT_TEMPLATE)?;
        Ok(tmpl.render(&ctx)?)
    }
}
