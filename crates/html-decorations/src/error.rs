//! Error types for template lookup, rendering, and option loading.

use thiserror::Error;

use crate::decoration::StyleId;

/// Error returned when a style id has no registered template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The decoration references a style the registry doesn't know about.
    #[error("no decoration template registered for style \"{id}\"")]
    NotFound {
        /// The style id that was requested
        id: StyleId,
    },
}

/// Error returned when a decoration cannot be turned into markup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The decoration's style has no template in the registry.
    #[error("no decoration template registered for style \"{0}\"")]
    UnknownStyle(StyleId),

    /// The decoration carries a configuration of the wrong shape for the
    /// template rendering it.
    ///
    /// This is a caller contract violation, not bad input data.
    #[error("style \"{style}\" expects a {expected} configuration, got {found}")]
    ConfigMismatch {
        /// Style id of the decoration being rendered
        style: StyleId,
        /// Configuration kind the template accepts
        expected: &'static str,
        /// Configuration kind the decoration carried
        found: &'static str,
    },

    /// A markup template failed to compile or render.
    #[error("markup template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<RegistryError> for RenderError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id } => RenderError::UnknownStyle(id),
        }
    }
}

/// Error returned when [`TemplateOptions`](crate::TemplateOptions) cannot be loaded.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid YAML template options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON template options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when a string is not a valid CSS colour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tint \"{input}\": {message}")]
pub struct TintParseError {
    pub input: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::NotFound {
            id: StyleId::new("underline"),
        };
        let msg = err.to_string();
        assert!(msg.contains("underline"));
    }

    #[test]
    fn test_config_mismatch_display() {
        let err = RenderError::ConfigMismatch {
            style: StyleId::HIGHLIGHT,
            expected: "highlight",
            found: "note",
        };
        let msg = err.to_string();
        assert!(msg.contains("\"highlight\""));
        assert!(msg.contains("got note"));
    }

    #[test]
    fn test_registry_error_converts_to_unknown_style() {
        let err: RenderError = RegistryError::NotFound {
            id: StyleId::NOTE,
        }
        .into();
        assert!(matches!(err, RenderError::UnknownStyle(id) if id == StyleId::NOTE));
    }
}
