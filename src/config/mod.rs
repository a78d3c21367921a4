//! Site configuration model.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # Raw <head> tag entries
//! │   ├── nav        # Top navigation links
//! │   ├── sidebar    # Per-path-prefix sidebar groups
//! │   └── footer     # Footer text and social links
//! ├── error          # ConfigError
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is a plain value: build it with [`crate::site::site_config`]
//! or parse it from TOML, then hand the serialized form to the renderer.
//! Nothing here performs I/O and nothing is mutated after construction.

pub mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{FooterConfig, HeadTag, NavLink, Sidebar, SidebarGroup, SocialLink};

use serde::{Deserialize, Serialize};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration consumed by the documentation renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the browser tab and the page header.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Language code (e.g. "en", "en-US").
    pub lang: String,

    /// Raw tags injected into `<head>` (e.g. the favicon link).
    pub head: Vec<HeadTag>,

    /// Top navigation entries, in listed order.
    pub nav: Vec<NavLink>,

    /// Sidebar groups keyed by URL path prefix.
    pub sidebar: Sidebar,

    /// Icon links rendered in the page header.
    pub social_links: Vec<SocialLink>,

    /// Footer text.
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en".into(),
            head: Vec::new(),
            nav: Vec::new(),
            sidebar: Sidebar::new(),
            social_links: Vec::new(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown field paths.
    ///
    /// Unknown fields are not an error; the caller decides whether to warn
    /// about or reject them.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Convert to the JSON value handed to the renderer.
    ///
    /// Map order (sidebar scopes, head-tag attributes) is preserved.
    pub fn to_json_value(&self) -> Result<serde_json::Value, ConfigError> {
        let value = serde_json::to_value(self)?;
        Ok(value)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[footer\nmessage = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.title, "");
        assert_eq!(config.lang, "en");
        assert!(config.head.is_empty());
        assert!(config.nav.is_empty());
        assert!(config.sidebar.is_empty());
        assert!(config.social_links.is_empty());
        assert_eq!(config.footer, FooterConfig::default());
    }

    #[test]
    fn test_from_str_top_level_fields() {
        let config = SiteConfig::from_str(
            "title = \"nix-ultrafeeder\"\ndescription = \"NixOS modules\"\nlang = \"en-US\"",
        )
        .unwrap();
        assert_eq!(config.title, "nix-ultrafeeder");
        assert_eq!(config.description, "NixOS modules");
        assert_eq!(config.lang, "en-US");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "title = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = crate::site::site_config();
        let text = toml::to_string(&config).unwrap();
        let back = SiteConfig::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_json_value_scope_order() {
        let config = crate::site::site_config();
        let value = config.to_json_value().unwrap();

        let scopes: Vec<_> = value["sidebar"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(scopes, ["/", "/guide/", "/reference/"]);
    }
}
