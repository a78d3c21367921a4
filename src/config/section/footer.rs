//! Footer and social link configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! message = "Licensed under the MIT License"
//! copyright = "© 2025 nix-ultrafeeder"
//!
//! [[social_links]]
//! icon = "github"
//! link = "https://github.com/j4v3l/nix-ultrafeeder"
//! ```

use serde::{Deserialize, Serialize};

/// Footer text rendered at the bottom of every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Message line shown above the copyright.
    pub message: String,

    /// Copyright notice.
    pub copyright: String,
}

/// An icon link rendered in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform identifier understood by the theme (e.g. `github`).
    pub icon: String,

    /// Destination URL.
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }
}
