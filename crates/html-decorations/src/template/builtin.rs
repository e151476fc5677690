//! Built-in `highlight`, `underline` and `note` templates.
//!
//! Markup and stylesheets are MiniJinja templates served from a shared
//! environment. Colours are written inline per decoration; structure (padding,
//! corner radius, marker shape) lives in the stylesheet, scoped by the class
//! name allocated when the template is built.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use super::{HtmlTemplate, Layout, TemplateOptions, Width};
use crate::class_name::ClassNameAllocator;
use crate::color::Tint;
use crate::decoration::{Decoration, HighlightConfig, NoteConfig, StyleConfig};
use crate::error::RenderError;

const HIGHLIGHT_ELEMENT: &str = r#"<div class="{{ class_name }}" style="{% if active %}background-color: {{ tint }} !important;{% endif %}"/>"#;

const HIGHLIGHT_STYLESHEET: &str = r#".{{ class_name }} {
    margin-left: {{ margin_left }};
    padding-right: {{ padding_right }};
    margin-top: {{ margin_top }};
    padding-bottom: {{ padding_bottom }};
    border-radius: {{ corner_radius }};
    box-sizing: border-box;
}"#;

const UNDERLINE_ELEMENT: &str = r#"<div class="{{ class_name }}" style="--tint: {{ tint }}; border-radius: {{ corner_radius }}; background-color: {{ background }} !important;"><span></span></div>"#;

const UNDERLINE_STYLESHEET: &str = r#".{{ class_name }} > span {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    border-bottom: {{ line_weight }} solid var(--tint);
}"#;

const NOTE_ELEMENT: &str = r#"<div><div class="{{ class_name }}" style="background-color: {{ tint }} !important; margin-top: {{ margin_top }}; margin-bottom: {{ margin_bottom }}"></div></div>"#;

const NOTE_STYLESHEET: &str = r#".{{ class_name }} {
    float: left;
    width: 6px;
    height: calc(100% + 12px);
    background-color: var(--tint);
    margin-left: 8px;
    border-radius: 3px;
    max-height: calc(100vh - 20px);
    overflow: hidden;
    bottom: 0;
}
[dir=rtl] .{{ class_name }} {
    float: right;
    margin-left: 0px;
    margin-right: 10px;
}"#;

static BUILTINS: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| {
        let source = match name {
            "highlight.element" => HIGHLIGHT_ELEMENT,
            "highlight.css" => HIGHLIGHT_STYLESHEET,
            "underline.element" => UNDERLINE_ELEMENT,
            "underline.css" => UNDERLINE_STYLESHEET,
            "note.element" => NOTE_ELEMENT,
            "note.css" => NOTE_STYLESHEET,
            _ => return Ok(None),
        };
        Ok(Some(source.to_string()))
    });
    env
});

fn render_builtin<S: serde::Serialize>(name: &str, ctx: S) -> Result<String, RenderError> {
    Ok(BUILTINS.get_template(name)?.render(ctx)?)
}

/// Formats a CSS pixel length, dropping a trailing `.0` and the sign of zero.
fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}

/// Render-time parameters of the `highlight` template.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightParams {
    pub class_name: String,
    pub default_tint: Tint,
    pub alpha: f64,
}

/// Render-time parameters of the `underline` template.
#[derive(Debug, Clone, PartialEq)]
pub struct UnderlineParams {
    pub class_name: String,
    pub default_tint: Tint,
    pub alpha: f64,
    pub corner_radius: u32,
}

/// Render-time parameters of the `note` template.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteParams {
    pub class_name: String,
    pub default_tint: Tint,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

fn highlight_config<'a>(
    decoration: &'a Decoration,
    expected: &'static str,
) -> Result<&'a HighlightConfig, RenderError> {
    match &decoration.style.config {
        StyleConfig::Highlight(config) => Ok(config),
        other => {
            log::warn!(
                "decoration {} has a {} configuration, {} template expects highlight",
                decoration.id,
                other.kind(),
                expected
            );
            Err(RenderError::ConfigMismatch {
                style: decoration.style.id.clone(),
                expected: "highlight",
                found: other.kind(),
            })
        }
    }
}

pub(super) fn render_highlight(
    params: &HighlightParams,
    decoration: &Decoration,
) -> Result<String, RenderError> {
    let config = highlight_config(decoration, "highlight")?;
    let tint = config.tint.unwrap_or(params.default_tint);
    render_builtin(
        "highlight.element",
        context! {
            class_name => params.class_name,
            active => config.is_active,
            tint => tint.css_value(Some(params.alpha)),
        },
    )
}

pub(super) fn render_underline(
    params: &UnderlineParams,
    decoration: &Decoration,
) -> Result<String, RenderError> {
    let config = highlight_config(decoration, "underline")?;
    let tint = config.tint.unwrap_or(params.default_tint);
    let fill = if config.is_active { params.alpha } else { 0.0 };
    render_builtin(
        "underline.element",
        context! {
            class_name => params.class_name,
            tint => tint.css_value(None),
            corner_radius => px(f64::from(params.corner_radius)),
            background => tint.css_value(Some(fill)),
        },
    )
}

pub(super) fn render_note(params: &NoteParams, decoration: &Decoration) -> Result<String, RenderError> {
    let config = match &decoration.style.config {
        StyleConfig::Note(config) => *config,
        StyleConfig::None => NoteConfig::default(),
        other => {
            log::warn!(
                "decoration {} has a {} configuration, note template expects note",
                decoration.id,
                other.kind()
            );
            return Err(RenderError::ConfigMismatch {
                style: decoration.style.id.clone(),
                expected: "note",
                found: other.kind(),
            });
        }
    };
    let tint = config.tint.unwrap_or(params.default_tint);
    render_builtin(
        "note.element",
        context! {
            class_name => params.class_name,
            tint => tint.css_value(None),
            margin_top => px(params.margin_top),
            margin_bottom => px(params.margin_bottom),
        },
    )
}

impl HtmlTemplate {
    /// Creates the `highlight` template.
    ///
    /// One element per line box, filled with the decoration's tint at
    /// `options.alpha`, with padding and corner radius shared through a
    /// stylesheet rule scoped to a freshly allocated class.
    ///
    /// # Example
    ///
    /// ```rust
    /// use html_decorations::{
    ///     ClassNameAllocator, Decoration, HighlightConfig, HtmlTemplate, Style, TemplateOptions,
    /// };
    ///
    /// let classes = ClassNameAllocator::new();
    /// let template = HtmlTemplate::highlight(&TemplateOptions::default(), &classes).unwrap();
    /// let markup = template
    ///     .render(&Decoration::new("h1", Style::highlight(HighlightConfig::new())))
    ///     .unwrap();
    /// assert_eq!(
    ///     markup,
    ///     r#"<div class="readium-highlight-1" style="background-color: rgba(255,255,0,0.3) !important;"/>"#
    /// );
    /// ```
    pub fn highlight(
        options: &TemplateOptions,
        classes: &ClassNameAllocator,
    ) -> Result<Self, RenderError> {
        let class_name = classes.allocate("highlight");
        let padding = options.padding;
        let stylesheet = render_builtin(
            "highlight.css",
            context! {
                class_name => class_name,
                margin_left => px(-padding.left),
                padding_right => px(padding.left + padding.right),
                margin_top => px(-padding.top),
                padding_bottom => px(padding.top + padding.bottom),
                corner_radius => px(f64::from(options.corner_radius)),
            },
        )?;

        Ok(Self::new(Layout::Boxes)
            .with_element(super::Element::Highlight(HighlightParams {
                class_name,
                default_tint: options.default_tint,
                alpha: options.alpha,
            }))
            .with_stylesheet(stylesheet))
    }

    /// Creates the `underline` template, drawing a `line_weight` border under
    /// each line box.
    pub fn underline(
        options: &TemplateOptions,
        classes: &ClassNameAllocator,
    ) -> Result<Self, RenderError> {
        let class_name = classes.allocate("underline");
        let stylesheet = render_builtin(
            "underline.css",
            context! {
                class_name => class_name,
                line_weight => px(f64::from(options.line_weight)),
            },
        )?;

        Ok(Self::new(Layout::Boxes)
            .with_element(super::Element::Underline(UnderlineParams {
                class_name,
                default_tint: options.default_tint,
                alpha: options.alpha,
                corner_radius: options.corner_radius,
            }))
            .with_stylesheet(stylesheet))
    }

    /// Creates the `note` template: a side marker spanning the page width,
    /// floated to the leading page edge and mirrored for right-to-left content.
    pub fn note(options: &TemplateOptions, classes: &ClassNameAllocator) -> Result<Self, RenderError> {
        let class_name = classes.allocate("sidemark");
        let stylesheet = render_builtin("note.css", context! { class_name => class_name })?;

        Ok(Self::new(Layout::Boxes)
            .with_width(Width::Page)
            .with_element(super::Element::Note(NoteParams {
                class_name,
                default_tint: options.default_tint,
                margin_top: options.note_margin_top,
                margin_bottom: options.note_margin_bottom,
            }))
            .with_stylesheet(stylesheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::{Style, StyleId};
    use crate::template::Element;
    use proptest::prelude::*;

    fn highlight(config: HighlightConfig) -> Decoration {
        Decoration::new("h", Style::highlight(config))
    }

    fn note(config: NoteConfig) -> Decoration {
        Decoration::new("n", Style::note(config))
    }

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(1.0), "1px");
        assert_eq!(px(-1.0), "-1px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(0.5), "0.5px");
    }

    #[test]
    fn test_highlight_active_markup() {
        let classes = ClassNameAllocator::new();
        let options = TemplateOptions::default().default_tint(Tint::YELLOW).alpha(0.3);
        let template = HtmlTemplate::highlight(&options, &classes).unwrap();

        let markup = template
            .render(&highlight(HighlightConfig::new()))
            .unwrap();
        insta::assert_snapshot!(markup, @r#"<div class="readium-highlight-1" style="background-color: rgba(255,255,0,0.3) !important;"/>"#);
    }

    #[test]
    fn test_highlight_inactive_has_no_background() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::highlight(&TemplateOptions::default(), &classes).unwrap();

        let markup = template
            .render(&highlight(HighlightConfig::new().active(false)))
            .unwrap();
        assert_eq!(markup, r#"<div class="readium-highlight-1" style=""/>"#);
        assert!(!markup.contains("background-color"));
    }

    #[test]
    fn test_highlight_tint_override() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::highlight(&TemplateOptions::default(), &classes).unwrap();

        let markup = template
            .render(&highlight(HighlightConfig::new().tint(Tint::RED)))
            .unwrap();
        assert!(markup.contains("background-color: rgba(255,0,0,0.3) !important;"));
        assert!(!markup.contains("rgba(255,255,0"));
    }

    #[test]
    fn test_highlight_layout_and_stylesheet() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::highlight(&TemplateOptions::default(), &classes).unwrap();

        assert_eq!(template.layout(), Layout::Boxes);
        assert_eq!(template.width(), Width::Wrap);
        assert_eq!(
            template.stylesheet().unwrap(),
            ".readium-highlight-1 {\n    margin-left: -1px;\n    padding-right: 2px;\n    margin-top: 0px;\n    padding-bottom: 0px;\n    border-radius: 3px;\n    box-sizing: border-box;\n}"
        );
    }

    #[test]
    fn test_highlight_rejects_note_config() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::highlight(&TemplateOptions::default(), &classes).unwrap();

        let mut decoration = note(NoteConfig::new());
        decoration.style.id = StyleId::HIGHLIGHT;
        let err = template.render(&decoration).unwrap_err();
        assert!(matches!(
            err,
            RenderError::ConfigMismatch { expected: "highlight", found: "note", .. }
        ));
    }

    #[test]
    fn test_note_markup_has_single_marker() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::note(&TemplateOptions::default(), &classes).unwrap();

        let markup = template.render(&note(NoteConfig::new().tint(Tint::BLUE))).unwrap();
        assert_eq!(
            markup,
            r#"<div><div class="readium-sidemark-1" style="background-color: rgba(0,0,255,1.0) !important; margin-top: -4px; margin-bottom: 0px"></div></div>"#
        );
        assert_eq!(markup.matches("class=\"readium-sidemark-1\"").count(), 1);
    }

    #[test]
    fn test_note_without_config_uses_defaults() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::note(&TemplateOptions::default(), &classes).unwrap();

        let decoration = Decoration::new("n", Style::new(StyleId::NOTE, StyleConfig::None));
        let markup = template.render(&decoration).unwrap();
        assert!(markup.contains("background-color: rgba(255,255,0,1.0) !important;"));
    }

    #[test]
    fn test_note_rejects_highlight_config() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::note(&TemplateOptions::default(), &classes).unwrap();

        let result = template.render(&highlight(HighlightConfig::new()));
        assert!(matches!(result, Err(RenderError::ConfigMismatch { expected: "note", .. })));
    }

    #[test]
    fn test_note_stylesheet_has_rtl_variant() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::note(&TemplateOptions::default(), &classes).unwrap();
        let css = template.stylesheet().unwrap();

        assert_eq!(template.width(), Width::Page);
        assert!(css.starts_with(".readium-sidemark-1 {"));
        assert!(css.contains("[dir=rtl] .readium-sidemark-1 {"));
        assert!(css.contains("background-color: var(--tint);"));
        assert!(css.contains("float: right;"));
    }

    #[test]
    fn test_underline_markup() {
        let classes = ClassNameAllocator::new();
        let template = HtmlTemplate::underline(&TemplateOptions::default(), &classes).unwrap();

        let active = template
            .render(&Decoration::new("u", Style::underline(HighlightConfig::new())))
            .unwrap();
        assert_eq!(
            active,
            r#"<div class="readium-underline-1" style="--tint: rgba(255,255,0,1.0); border-radius: 3px; background-color: rgba(255,255,0,0.3) !important;"><span></span></div>"#
        );

        let inactive = template
            .render(&Decoration::new(
                "u",
                Style::underline(HighlightConfig::new().active(false)),
            ))
            .unwrap();
        assert!(inactive.contains("background-color: rgba(255,255,0,0.0) !important;"));
        assert!(template
            .stylesheet()
            .unwrap()
            .contains("border-bottom: 2px solid var(--tint);"));
    }

    #[test]
    fn test_params_are_stored_in_element() {
        let classes = ClassNameAllocator::new();
        let options = TemplateOptions::default().alpha(0.5);
        let template = HtmlTemplate::highlight(&options, &classes).unwrap();

        match template.element() {
            Element::Highlight(params) => {
                assert_eq!(params.class_name, "readium-highlight-1");
                assert_eq!(params.alpha, 0.5);
            }
            other => panic!("expected highlight element, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_highlight_render_is_deterministic(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            active in any::<bool>(),
            with_tint in any::<bool>(),
        ) {
            let classes = ClassNameAllocator::new();
            let template = HtmlTemplate::highlight(&TemplateOptions::default(), &classes).unwrap();
            let mut config = HighlightConfig::new().active(active);
            if with_tint {
                config = config.tint(Tint::rgb(r, g, b));
            }
            let decoration = highlight(config);

            let first = template.render(&decoration).unwrap();
            let second = template.render(&decoration).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.contains("background-color"), active);
        }

        #[test]
        fn prop_note_render_is_deterministic(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let classes = ClassNameAllocator::new();
            let template = HtmlTemplate::note(&TemplateOptions::default(), &classes).unwrap();
            let decoration = note(NoteConfig::new().tint(Tint::rgb(r, g, b)));

            let first = template.render(&decoration).unwrap();
            prop_assert_eq!(&first, &template.render(&decoration).unwrap());
            let expected = format!("background-color: rgba({},{},{},1.0) !important;", r, g, b);
            prop_assert!(first.contains(&expected));
        }
    }
}
