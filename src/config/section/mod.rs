//! Configuration section definitions.
//!
//! Each module covers one part of the site configuration:
//!
//! | Module    | Fields                   | Purpose                         |
//! |-----------|--------------------------|---------------------------------|
//! | `head`    | `head`                   | Raw `<head>` tag entries        |
//! | `nav`     | `nav`                    | Top navigation links            |
//! | `sidebar` | `sidebar`                | Per-path-prefix sidebar groups  |
//! | `footer`  | `footer`, `social_links` | Footer text and icon links      |

mod footer;
mod head;
mod nav;
mod sidebar;

pub use footer::{FooterConfig, SocialLink};
pub use head::HeadTag;
pub use nav::NavLink;
pub use sidebar::{Sidebar, SidebarGroup};
