//! Sidebar configuration keyed by URL path prefix.
//!
//! Each key of [`Sidebar`] is a path prefix (`/`, `/guide/`, ...); the
//! associated groups are shown whenever the visitor's URL matches that
//! prefix. Which prefix wins on overlap (longest match) is the renderer's
//! concern, not modeled here.
//!
//! # Example
//!
//! ```toml
//! [[sidebar."/guide/"]]
//! text = "Guide"
//! collapsed = false
//! items = [
//!     { text = "Getting Started", link = "/guide/getting-started" },
//! ]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::section::NavLink;

/// Sidebar contents for every configured path scope.
///
/// Key order and group/item order are authoring order, which is also
/// rendering order. The same group content may appear under several
/// prefixes; scopes are rendered independently, so the duplication is
/// intentional.
pub type Sidebar = IndexMap<String, Vec<SidebarGroup>>;

/// A labeled, collapsible cluster of links within a sidebar scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading shown above the items.
    pub text: String,

    /// Render the group folded until the visitor expands it.
    pub collapsed: bool,

    /// Links in rendering order.
    pub items: Vec<NavLink>,
}

impl Default for SidebarGroup {
    fn default() -> Self {
        Self {
            text: String::new(),
            collapsed: false,
            items: Vec::new(),
        }
    }
}

impl SidebarGroup {
    /// Create an expanded group with the given items.
    pub fn new(text: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self {
            text: text.into(),
            collapsed: false,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let group = SidebarGroup::default();
        assert_eq!(group.text, "");
        assert!(!group.collapsed);
        assert!(group.items.is_empty());
    }

    #[test]
    fn test_item_order_preserved() {
        // Authored order is rendering order: [A, B, C] stays [A, B, C].
        let group = SidebarGroup::new(
            "Guide",
            vec![
                NavLink::new("A", "/a"),
                NavLink::new("B", "/b"),
                NavLink::new("C", "/c"),
            ],
        );
        let texts: Vec<_> = group.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["A", "B", "C"]);
    }

    #[test]
    fn test_scope_key_order_preserved() {
        let config = test_parse_config(
            r#"[[sidebar."/"]]
text = "Guide"

[[sidebar."/guide/"]]
text = "Guide"

[[sidebar."/reference/"]]
text = "Reference"
"#,
        );
        let scopes: Vec<_> = config.sidebar.keys().map(String::as_str).collect();
        assert_eq!(scopes, ["/", "/guide/", "/reference/"]);
    }

    #[test]
    fn test_parse_group() {
        let config = test_parse_config(
            r#"[[sidebar."/guide/"]]
text = "Guide"
collapsed = true
items = [{ text = "Configuration", link = "/guide/configuration" }]
"#,
        );
        let groups = &config.sidebar["/guide/"];
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].text, "Guide");
        assert!(groups[0].collapsed);
        assert_eq!(
            groups[0].items,
            vec![NavLink::new("Configuration", "/guide/configuration")]
        );
    }
}
