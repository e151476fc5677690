//! Payloads for a scripting bridge into the content view.
//!
//! Element renderers can't cross into JavaScript, so decorations are rendered
//! natively first and shipped as [`RenderedDecoration`] records, while the
//! templates themselves travel as data through [`registration_script`].

use serde::{Deserialize, Serialize};

use crate::decoration::{Decoration, StyleId};
use crate::error::RenderError;
use crate::registry::StyleRegistry;

/// Script function receiving the template snapshots.
pub const REGISTER_TEMPLATES_FN: &str = "readium.registerDecorationTemplates";

/// A decoration whose element markup was rendered natively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDecoration {
    pub id: String,
    pub style: StyleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<serde_json::Value>,
    pub element: String,
}

impl RenderedDecoration {
    /// Renders `decoration` with the registry's template for its style.
    pub fn render(registry: &StyleRegistry, decoration: &Decoration) -> Result<Self, RenderError> {
        Ok(Self {
            id: decoration.id.clone(),
            style: decoration.style.id.clone(),
            locator: decoration.locator.clone(),
            element: registry.render(decoration)?,
        })
    }
}

/// Renders every decoration, stopping at the first failure.
pub fn render_all<'a>(
    registry: &StyleRegistry,
    decorations: impl IntoIterator<Item = &'a Decoration>,
) -> Result<Vec<RenderedDecoration>, RenderError> {
    decorations
        .into_iter()
        .map(|decoration| RenderedDecoration::render(registry, decoration))
        .collect()
}

/// Returns the script registering the registry's templates with the content view.
///
/// ```rust
/// use html_decorations::{bridge, HtmlTemplate, Layout, StyleRegistry};
///
/// let registry = StyleRegistry::new().with("frame", HtmlTemplate::new(Layout::Bounds));
/// assert_eq!(
///     bridge::registration_script(&registry).unwrap(),
///     r#"readium.registerDecorationTemplates({"frame":{"layout":"bounds","width":"wrap","stylesheet":null}});"#
/// );
/// ```
pub fn registration_script(registry: &StyleRegistry) -> Result<String, serde_json::Error> {
    let templates = serde_json::to_string(&registry.snapshot())?;
    Ok(format!("{REGISTER_TEMPLATES_FN}({templates});"))
}
