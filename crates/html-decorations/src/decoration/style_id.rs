use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a decoration style, used as the registry key.
///
/// Built-in ids are available as constants; hosts create their own with
/// [`StyleId::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(Cow<'static, str>);

impl StyleId {
    pub const HIGHLIGHT: StyleId = StyleId(Cow::Borrowed("highlight"));
    pub const UNDERLINE: StyleId = StyleId(Cow::Borrowed("underline"));
    pub const NOTE: StyleId = StyleId(Cow::Borrowed("note"));

    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for StyleId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl From<String> for StyleId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl Borrow<str> for StyleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
