//! URL path types for type-safe URL handling.
//!
//! - `UrlPath`: decoded page URL, always `/`-delimited on both ends
//! - `PathPrefix`: deployment subpath joined onto site-relative links

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts and ends with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (decode percent-encoding, strip query string).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page URL (with trailing slash). Normalizes leading/trailing slashes.
    /// Strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();
        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
        let inner = trim_slashes(path);

        if inner.is_empty() {
            return Self(Arc::from("/"));
        }

        Self(Arc::from(format!("/{inner}/")))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path with leading and trailing slashes removed.
    ///
    /// This is the key used to decide which navigation item is current:
    /// `/posts/` and `posts` both yield `posts`, the root yields `""`.
    #[inline]
    pub fn trimmed(&self) -> &str {
        trim_slashes(&self.0)
    }

    /// Check if this is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_browser(s)
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_browser(&s))
    }
}

/// Strip every leading and trailing `/`.
#[inline]
pub fn trim_slashes(s: &str) -> &str {
    s.trim_matches('/')
}

// ============================================================================
// Path prefix
// ============================================================================

/// Deployment subpath (e.g. `blog` for `https://example.github.io/blog/`).
///
/// Stored without leading or trailing slashes; empty means the site is
/// served from the domain root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPrefix(String);

impl PathPrefix {
    pub fn new(raw: &str) -> Self {
        let parts: Vec<_> = raw.split('/').filter(|s| !s.is_empty()).collect();
        Self(parts.join("/"))
    }

    /// Derive the prefix from the path component of a site URL.
    ///
    /// Returns `None` if the URL cannot be parsed.
    pub fn from_site_url(site_url: &str) -> Option<Self> {
        let parsed = url::Url::parse(site_url).ok()?;
        Some(Self::new(parsed.path()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join a site-relative URL onto the prefix.
    ///
    /// Fragments (`#top`), protocol-relative (`//cdn/x`) and absolute URLs
    /// with a scheme (`https:`, `mailto:`, `tel:`) are returned unchanged.
    /// Everything else becomes an absolute path under the prefix, keeping
    /// any trailing slash.
    ///
    /// # Examples
    /// ```ignore
    /// PathPrefix::new("blog").with_prefix("/posts/")  // "/blog/posts/"
    /// PathPrefix::new("").with_prefix("images/a.png") // "/images/a.png"
    /// PathPrefix::new("blog").with_prefix("/")        // "/blog/"
    /// ```
    pub fn with_prefix(&self, href: &str) -> String {
        let href = href.trim();
        if is_external(href) {
            return href.to_string();
        }

        let path = href.trim_start_matches('/');
        match (self.is_empty(), path.is_empty()) {
            (true, _) => format!("/{path}"),
            (false, true) => format!("/{}/", self.0),
            (false, false) => format!("/{}/{path}", self.0),
        }
    }
}

/// Check whether a link must bypass prefixing.
pub fn is_external(href: &str) -> bool {
    href.starts_with('#') || href.starts_with("//") || url::Url::parse(href).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_decodes() {
        let url = UrlPath::from_browser("/posts/hello%20world/");
        assert_eq!(url.as_str(), "/posts/hello world/");
    }

    #[test]
    fn test_from_browser_invalid_utf8() {
        // Invalid UTF-8 sequence should be preserved
        let url = UrlPath::from_browser("/posts/%FF/");
        assert_eq!(url.as_str(), "/posts/%FF/");
    }

    #[test]
    fn test_from_page_adds_slashes() {
        assert_eq!(UrlPath::from_page("posts/hello").as_str(), "/posts/hello/");
        assert_eq!(UrlPath::from_page("//posts//").as_str(), "/posts/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_page("/posts?v=1").as_str(), "/posts/");
        assert_eq!(UrlPath::from_page("/posts#top").as_str(), "/posts/");
        assert_eq!(UrlPath::from_page("/posts?v=1#top").as_str(), "/posts/");
    }

    #[test]
    fn test_root_variants() {
        for raw in ["", "/", "//", " / ", "?q=1"] {
            let url = UrlPath::from_page(raw);
            assert!(url.is_root(), "{raw:?} should be root");
            assert_eq!(url.trimmed(), "");
        }
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(UrlPath::from_page("/posts/").trimmed(), "posts");
        assert_eq!(UrlPath::from_page("/a/b/c").trimmed(), "a/b/c");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let parsed: UrlPath = serde_json::from_str(r#""/posts/%E4%B8%AD/""#).unwrap();
        assert_eq!(parsed.as_str(), "/posts/中/");
    }

    #[test]
    fn test_prefix_new_strips_slashes() {
        assert_eq!(PathPrefix::new("/blog/").as_str(), "blog");
        assert_eq!(PathPrefix::new("a//b").as_str(), "a/b");
        assert!(PathPrefix::new("/").is_empty());
    }

    #[test]
    fn test_prefix_from_site_url() {
        assert_eq!(
            PathPrefix::from_site_url("https://example.github.io/my-project/"),
            Some(PathPrefix::new("my-project"))
        );
        assert_eq!(
            PathPrefix::from_site_url("https://example.com:8080/a/b?x=1"),
            Some(PathPrefix::new("a/b"))
        );
        assert_eq!(
            PathPrefix::from_site_url("https://example.com"),
            Some(PathPrefix::default())
        );
        assert_eq!(PathPrefix::from_site_url("invalid-url"), None);
    }

    #[test]
    fn test_with_prefix_internal() {
        let prefix = PathPrefix::new("blog");
        assert_eq!(prefix.with_prefix("/posts/"), "/blog/posts/");
        assert_eq!(prefix.with_prefix("images/logo.svg"), "/blog/images/logo.svg");
        assert_eq!(prefix.with_prefix("/"), "/blog/");
        assert_eq!(prefix.with_prefix(""), "/blog/");
    }

    #[test]
    fn test_with_prefix_empty() {
        let prefix = PathPrefix::default();
        assert_eq!(prefix.with_prefix("/"), "/");
        assert_eq!(prefix.with_prefix("about"), "/about");
        assert_eq!(prefix.with_prefix(""), "/");
    }

    #[test]
    fn test_with_prefix_external_untouched() {
        let prefix = PathPrefix::new("blog");
        for href in [
            "https://github.com/example",
            "mailto:me@example.com",
            "tel:+123",
            "//cdn.example.com/a.js",
            "#main",
        ] {
            assert_eq!(prefix.with_prefix(href), href);
        }
    }
}
