//! Static site definition for the nix-ultrafeeder documentation.
//!
//! Single authoring point for everything the rendered docs show around the
//! page content: metadata, top navigation, sidebars, and footer. The
//! sidebar group list is defined once and materialized under every path
//! scope, so the sidebar reads the same wherever the visitor is browsing.

use crate::config::{
    FooterConfig, HeadTag, NavLink, Sidebar, SidebarGroup, SiteConfig, SocialLink,
};

/// Repository URL used by the social links.
const REPO_URL: &str = "https://github.com/j4v3l/nix-ultrafeeder";

/// Path scopes sharing the same sidebar content.
const SIDEBAR_SCOPES: [&str; 3] = ["/", "/guide/", "/reference/"];

/// Build the full configuration for the documentation site.
///
/// Pure constructor over compile-time literals: every call yields a
/// structurally equal value, and the result is never mutated afterwards.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        title: "nix-ultrafeeder".into(),
        description: "NixOS modules for Ultrafeeder, feeders, Skystats, and Airband".into(),
        lang: "en-US".into(),
        head: vec![HeadTag::new(
            "link",
            [
                ("rel", "icon"),
                ("type", "image/svg+xml"),
                ("href", "/nixos.svg"),
            ],
        )],
        nav: nav(),
        sidebar: sidebar(),
        social_links: vec![SocialLink::new("github", REPO_URL)],
        footer: FooterConfig {
            message: "Licensed under the MIT License".into(),
            copyright: "© 2025 nix-ultrafeeder".into(),
        },
    }
}

/// Top navigation bar, shown on every page.
fn nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Getting Started", "/guide/getting-started"),
        NavLink::new("Configuration", "/guide/configuration"),
        NavLink::new("Secrets & Updates", "/guide/secrets-updates"),
        NavLink::new("Modules", "/reference/modules"),
        NavLink::new("Examples", "/reference/examples"),
        NavLink::new("Testing", "/reference/testing"),
    ]
}

/// Canonical sidebar groups, authored once.
fn sidebar_groups() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::new(
            "Guide",
            vec![
                NavLink::new("Getting Started", "/guide/getting-started"),
                NavLink::new("Configuration", "/guide/configuration"),
                NavLink::new("Secrets & Auto-Update", "/guide/secrets-updates"),
            ],
        ),
        SidebarGroup::new(
            "Reference",
            vec![
                NavLink::new("Modules", "/reference/modules"),
                NavLink::new("Examples & Recipes", "/reference/examples"),
                NavLink::new("Testing", "/reference/testing"),
            ],
        ),
    ]
}

/// Materialize the shared group list under every scope prefix.
fn sidebar() -> Sidebar {
    let groups = sidebar_groups();
    SIDEBAR_SCOPES
        .iter()
        .map(|scope| (scope.to_string(), groups.clone()))
        .collect()
}
