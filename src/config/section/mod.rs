//! Configuration section definitions.
//!
//! Each module corresponds to a section in `masthead.toml`:
//!
//! | Module   | TOML Section                  | Purpose                         |
//! |----------|-------------------------------|---------------------------------|
//! | `site`   | `[site]`                      | Site title, URL, link prefix    |
//! | `header` | `[header]`                    | Branding, navigation, social    |
//! | `action` | `[[header.*_links]]`          | One navigation/social entry     |

mod action;
mod header;
mod site;

pub use action::{Action, ActionStyle};
pub use header::{DEFAULT_MENU_BREAKPOINT, HeaderConfig};
pub use site::SiteSectionConfig;
