//! Tint colours and their CSS representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TintParseError;

/// An sRGB colour used to tint decorations.
///
/// Tints parse from any CSS colour string (`"yellow"`, `"#ff0"`,
/// `"rgb(255 255 0)"`) and serialize back to a CSS `rgba()` value, so they can
/// live in YAML/JSON template options.
///
/// # Example
///
/// ```rust
/// use html_decorations::Tint;
///
/// let tint: Tint = "yellow".parse().unwrap();
/// assert_eq!(tint.css_value(Some(0.3)), "rgba(255,255,0,0.3)");
/// assert_eq!(tint.css_value(None), "rgba(255,255,0,1.0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tint {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Tint {
    pub const YELLOW: Tint = Tint::rgb(255, 255, 0);
    pub const RED: Tint = Tint::rgb(255, 0, 0);
    pub const GREEN: Tint = Tint::rgb(0, 255, 0);
    pub const BLUE: Tint = Tint::rgb(0, 0, 255);

    /// Creates an opaque tint.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Creates a tint with its own opacity, clamped to `0.0..=1.0`.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: clamp_alpha(alpha),
        }
    }

    pub fn components(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the CSS `rgba()` value of this tint.
    ///
    /// When `alpha` is given it replaces the tint's own opacity.
    pub fn css_value(&self, alpha: Option<f64>) -> String {
        let alpha = alpha.map(clamp_alpha).unwrap_or(self.alpha);
        format!(
            "rgba({},{},{},{:?})",
            self.red, self.green, self.blue, alpha
        )
    }
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::YELLOW
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_value(None))
    }
}

impl FromStr for Tint {
    type Err = TintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: csscolorparser::Color = s.trim().parse().map_err(
            |e: csscolorparser::ParseColorError| TintParseError {
                input: s.to_string(),
                message: e.to_string(),
            },
        )?;
        let [red, green, blue, _] = parsed.to_rgba8();
        // f32 channel; keep three decimals so 0.3 stays 0.3
        let alpha = (f64::from(parsed.a) * 1000.0).round() / 1000.0;
        Ok(Tint::rgba(red, green, blue, alpha))
    }
}

impl TryFrom<String> for Tint {
    type Error = TintParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tint> for String {
    fn from(tint: Tint) -> Self {
        tint.css_value(None)
    }
}
