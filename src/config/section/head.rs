//! Raw `<head>` tag entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A raw tag injected into the page `<head>`, as a (tag name, attributes)
/// pair. Serializes as a two-element sequence, so the renderer receives
/// e.g. `["link", {"rel": "icon", "href": "/nixos.svg"}]`.
///
/// Attribute order is preserved as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag(String, IndexMap<String, String>);

impl HeadTag {
    pub fn new<'a, I>(tag: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self(
            tag.into(),
            attrs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Get the tag name (`link`, `meta`, `script`, ...).
    #[inline]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Get the tag attributes in authored order.
    #[inline]
    pub fn attrs(&self) -> &IndexMap<String, String> {
        &self.1
    }
}
