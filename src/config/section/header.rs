//! `[header]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [header]
//! title = "Blog"
//! tagline = "Notes on systems"
//! logo_img = "images/logo.svg"
//! logo_img_alt = "Blog logo"
//! has_nav = true
//! has_social = true
//!
//! [[header.nav_links]]
//! label = "Posts"
//! url = "/posts/"
//! ```

use serde::{Deserialize, Serialize};

use super::action::Action;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Default toggle breakpoint (px): the stylesheet shows the hamburger
/// button below this viewport width.
pub const DEFAULT_MENU_BREAKPOINT: u32 = 801;

/// Header branding, navigation and social links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Logo image path.
    pub logo_img: Option<String>,
    /// Alt text for the logo.
    pub logo_img_alt: String,
    /// Header title (falls back to `site.title`).
    pub title: Option<String>,
    /// Tagline below the title.
    pub tagline: Option<String>,
    /// Show the navigation menu.
    pub has_nav: bool,
    /// Navigation menu entries.
    pub nav_links: Vec<Action>,
    /// Show the social links row.
    pub has_social: bool,
    /// Social link entries.
    pub social_links: Vec<Action>,
    /// Background image used when the page doesn't set one.
    pub background_img: Option<String>,
    /// Viewport width (px) from which the menu toggle is hidden.
    pub menu_breakpoint: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo_img: None,
            logo_img_alt: String::new(),
            title: None,
            tagline: None,
            has_nav: false,
            nav_links: Vec::new(),
            has_social: false,
            social_links: Vec::new(),
            background_img: None,
            menu_breakpoint: DEFAULT_MENU_BREAKPOINT,
        }
    }
}

/// Field paths of `[header]`.
pub struct HeaderConfigFields {
    pub logo_img: FieldPath,
    pub logo_img_alt: FieldPath,
    pub title: FieldPath,
    pub tagline: FieldPath,
    pub has_nav: FieldPath,
    pub nav_links: FieldPath,
    pub has_social: FieldPath,
    pub social_links: FieldPath,
    pub background_img: FieldPath,
    pub menu_breakpoint: FieldPath,
}

impl HeaderConfig {
    pub const FIELDS: HeaderConfigFields = HeaderConfigFields {
        logo_img: FieldPath::new("header.logo_img"),
        logo_img_alt: FieldPath::new("header.logo_img_alt"),
        title: FieldPath::new("header.title"),
        tagline: FieldPath::new("header.tagline"),
        has_nav: FieldPath::new("header.has_nav"),
        nav_links: FieldPath::new("header.nav_links"),
        has_social: FieldPath::new("header.has_social"),
        social_links: FieldPath::new("header.social_links"),
        background_img: FieldPath::new("header.background_img"),
        menu_breakpoint: FieldPath::new("header.menu_breakpoint"),
    };

    /// Navigation menu is enabled and has entries.
    #[inline]
    pub fn shows_nav(&self) -> bool {
        self.has_nav && !self.nav_links.is_empty()
    }

    /// Social row is enabled and has entries.
    #[inline]
    pub fn shows_social(&self) -> bool {
        self.has_social && !self.social_links.is_empty()
    }

    /// The navigation block (and its toggle) is rendered.
    #[inline]
    pub fn shows_navigation(&self) -> bool {
        self.shows_nav() || self.shows_social()
    }

    /// Validate header configuration.
    ///
    /// # Checks
    /// - every action has a non-empty `url`
    /// - `menu_breakpoint` is positive
    /// - a logo without alt text (warning)
    /// - enabled lists that are empty, entries of disabled lists (hints)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_actions(&self.nav_links, Self::FIELDS.nav_links, diag);
        Self::validate_actions(&self.social_links, Self::FIELDS.social_links, diag);

        if self.menu_breakpoint == 0 {
            diag.error_with_hint(
                Self::FIELDS.menu_breakpoint,
                "must be greater than 0",
                format!("the default is {DEFAULT_MENU_BREAKPOINT}"),
            );
        }

        if self.logo_img.is_some() && self.logo_img_alt.trim().is_empty() {
            diag.warn(
                Self::FIELDS.logo_img_alt,
                "logo has no alt text; screen readers will skip it",
            );
        }

        for (enabled, links, flag, field) in [
            (
                self.has_nav,
                &self.nav_links,
                Self::FIELDS.has_nav,
                Self::FIELDS.nav_links,
            ),
            (
                self.has_social,
                &self.social_links,
                Self::FIELDS.has_social,
                Self::FIELDS.social_links,
            ),
        ] {
            if enabled && links.is_empty() {
                diag.hint(field, format!("{} is set but the list is empty", flag.as_str()));
            } else if !enabled && !links.is_empty() {
                diag.hint(
                    flag,
                    format!("{} entries are ignored while this is false", field.as_str()),
                );
            }
        }
    }

    fn validate_actions(actions: &[Action], field: FieldPath, diag: &mut ConfigDiagnostics) {
        for (index, action) in actions.iter().enumerate() {
            if action.url.trim().is_empty() {
                let name = if action.label.is_empty() {
                    format!("entry #{}", index + 1)
                } else {
                    format!("entry `{}`", action.label)
                };
                diag.error(field, format!("{name} has an empty `url`"));
            }
        }
    }
}
