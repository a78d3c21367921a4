//! Documentation site configuration for nix-ultrafeeder.
//!
//! Declares everything the docs renderer needs around the page content:
//! site metadata, top navigation, per-scope sidebars, and footer/social
//! links. [`site_config`] assembles the whole site from literals; the
//! [`config`] module holds the underlying model.
//!
//! ```
//! let config = ultrafeeder_docs::site_config();
//! assert_eq!(config.title, "nix-ultrafeeder");
//! let json = config.to_json_string()?;
//! assert!(json.contains("\"/guide/\""));
//! # Ok::<(), ultrafeeder_docs::ConfigError>(())
//! ```

pub mod config;
pub mod site;

pub use config::{
    ConfigError, FooterConfig, HeadTag, NavLink, Sidebar, SidebarGroup, SiteConfig, SocialLink,
};
pub use site::site_config;
