//! Navigation link entries.
//!
//! `NavLink` is used both for the top navigation bar and for the items
//! inside sidebar groups.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Getting Started"
//! link = "/guide/getting-started"
//! ```

use serde::{Deserialize, Serialize};

/// A single navigation entry: a visible label and its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible label.
    pub text: String,

    /// Target path (site-root-relative like `/guide/configuration`)
    /// or external URL.
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Check if the target is site-root-relative (stays within the site).
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.link.starts_with('/')
    }
}
