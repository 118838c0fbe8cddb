//! Action records shared by `header.nav_links` and `header.social_links`.
//!
//! # Example
//!
//! ```toml
//! [[header.nav_links]]
//! label = "Posts"
//! url = "/posts/"
//!
//! [[header.social_links]]
//! label = "GitHub"
//! url = "https://github.com/alice"
//! icon = "github"
//! new_window = true
//! ```

use serde::{Deserialize, Serialize};

/// One navigation or social entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    /// Visible text (screen-reader text for icon links).
    pub label: String,
    /// Target URL, site-relative or absolute.
    pub url: String,
    /// Icon identifier, rendered as an `icon-<name>` class.
    pub icon: Option<String>,
    /// Visual style of the link.
    pub style: ActionStyle,
    /// Open in a new browsing context.
    pub new_window: bool,
    /// Add `rel="nofollow"`.
    pub no_follow: bool,
}

impl Action {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// `rel` attribute value, if any.
    pub fn rel(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);
        if self.new_window {
            parts.push("noopener");
        }
        if self.no_follow {
            parts.push("nofollow");
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// `target` attribute value, if any.
    pub const fn target(&self) -> Option<&'static str> {
        if self.new_window { Some("_blank") } else { None }
    }
}

/// Link style for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    /// Plain text link.
    #[default]
    Link,
    /// Primary button.
    Primary,
    /// Secondary button.
    Secondary,
}

impl ActionStyle {
    #[inline]
    pub const fn is_button(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary)
    }
}
