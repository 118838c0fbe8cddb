//! Page descriptor: which page the header is rendered for.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::url::UrlPath;

/// Layout variant that promotes the site title to a top-level heading.
pub const HOME_LAYOUT: &str = "home";

/// Metadata identifying the currently rendered page.
///
/// Every field is optional; a missing URL resolves to the site root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDescriptor {
    /// Page URL path (e.g. `/posts/`).
    pub url: Option<UrlPath>,
    /// Layout variant (e.g. `home`, `post`).
    pub layout: Option<String>,
    /// Page background image; overrides `header.background_img`.
    pub image: Option<String>,
    /// Page title, accepted so existing front-matter dumps load as-is.
    pub title: Option<String>,
}

impl PageDescriptor {
    /// Load a descriptor from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page descriptor `{}`", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid page descriptor `{}`", path.display()))
    }

    /// Resolve the current page URL, defaulting to the root.
    pub fn page_url(&self) -> UrlPath {
        self.url.clone().unwrap_or_default()
    }

    /// Current page URL with leading/trailing slashes trimmed.
    pub fn normalized_url(&self) -> String {
        self.page_url().trimmed().to_string()
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        self.layout.as_deref() == Some(HOME_LAYOUT)
    }
}
