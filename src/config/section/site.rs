//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! url = "https://example.github.io/blog"   # path "blog" becomes the link prefix
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::PathPrefix;

/// Site-wide metadata used by the header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used when `header.title` is unset.
    pub title: String,

    /// Site URL, path used as prefix (e.g., "https://example.com/blog").
    pub url: Option<String>,

    /// Explicit link prefix; takes precedence over the path of `url`.
    pub path_prefix: Option<String>,
}

/// Field paths of `[site]`.
pub struct SiteSectionConfigFields {
    pub title: FieldPath,
    pub url: FieldPath,
    pub path_prefix: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteSectionConfigFields = SiteSectionConfigFields {
        title: FieldPath::new("site.title"),
        url: FieldPath::new("site.url"),
        path_prefix: FieldPath::new("site.path_prefix"),
    };

    /// Resolve the link prefix for generated URLs.
    pub fn prefix(&self) -> PathPrefix {
        if let Some(prefix) = &self.path_prefix {
            return PathPrefix::new(prefix);
        }
        self.url
            .as_deref()
            .and_then(PathPrefix::from_site_url)
            .unwrap_or_default()
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("invalid URL `{url}`"),
                "use a full URL with scheme, e.g. https://example.com",
            );
        }
    }
}
