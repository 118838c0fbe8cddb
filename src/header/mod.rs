//! Site header component.
//!
//! Renders branding, navigation, social links and the mobile menu toggle
//! from [`SiteConfig`] and a [`PageDescriptor`]. Every absent field drops its
//! markup instead of failing.
//!
//! # Markup
//!
//! ```text
//! header.site-header
//! ├── div.site-header-bg                      (when an image is set)
//! └── div.site-header-scroll > div.site-header-inside > div.site-header-vertical
//!     ├── div.site-branding                   (logo, title, tagline)
//!     ├── nav#main-navigation.site-navigation (menu + social links)
//!     └── button#menu-toggle.menu-toggle
//! ```
//!
//! The class names are a contract with external stylesheets.
//!
//! # Interaction
//!
//! [`Header::mount`] attaches the header to a [`Host`]; see [`lifecycle`].

mod action;
pub mod lifecycle;
mod markup;
pub mod menu;

pub use lifecycle::{Host, MountedHeader, ToggleProbe, Viewport};
pub use menu::MenuState;

use action::{render_action, render_action_icon};
use markup::class_names;

use maud::{DOCTYPE, Markup, html};

use crate::config::{Action, SiteConfig};
use crate::core::{PageDescriptor, PathPrefix, UrlPath};

/// Header renderer bound to one configuration and page.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    config: &'a SiteConfig,
    page: &'a PageDescriptor,
    prefix: PathPrefix,
}

impl<'a> Header<'a> {
    pub fn new(config: &'a SiteConfig, page: &'a PageDescriptor) -> Self {
        Self {
            config,
            page,
            prefix: config.prefix(),
        }
    }

    /// Background image: the page's own, else the configured fallback.
    pub fn background_image(&self) -> Option<&str> {
        self.page
            .image
            .as_deref()
            .or(self.config.header.background_img.as_deref())
            .filter(|image| !image.is_empty())
    }

    /// Render the header element.
    pub fn render(&self) -> Markup {
        html! {
            header.site-header {
                @if let Some(image) = self.background_image() {
                    div.site-header-bg {
                        img class="site-header-bg-img" src=(self.prefix.with_prefix(image)) alt="";
                        div.site-header-bg-gradient {}
                    }
                }
                div.site-header-scroll {
                    div.site-header-inside {
                        div.site-header-vertical {
                            (self.render_branding())
                            @if self.config.header.shows_navigation() {
                                (self.render_navigation())
                                (render_toggle())
                            }
                        }
                    }
                }
            }
        }
    }

    /// Render the header inside a `<body>` whose class reflects `menu`.
    pub fn render_body(&self, menu: MenuState) -> Markup {
        html! {
            body class=[menu.body_class()] {
                (self.render())
            }
        }
    }

    /// Render a minimal standalone document, for previews.
    pub fn render_document(&self, menu: MenuState) -> Markup {
        let title = self.config.header_title().unwrap_or_default();
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                }
                (self.render_body(menu))
            }
        }
    }

    fn render_branding(&self) -> Markup {
        let header = &self.config.header;
        let home = self.prefix.with_prefix("/");

        html! {
            div.site-branding {
                @if let Some(logo) = header.logo_img.as_deref().filter(|logo| !logo.is_empty()) {
                    p.site-logo {
                        a href=(home) {
                            img src=(self.prefix.with_prefix(logo)) alt=(header.logo_img_alt);
                        }
                    }
                }
                @if let Some(title) = self.config.header_title() {
                    @if self.page.is_home() {
                        h1.site-title { a href=(home) { (title) } }
                    } @else {
                        p.site-title { a href=(home) { (title) } }
                    }
                }
                @if let Some(tagline) = header.tagline.as_deref().filter(|t| !t.is_empty()) {
                    p.site-description { (tagline) }
                }
            }
        }
    }

    fn render_navigation(&self) -> Markup {
        let header = &self.config.header;

        html! {
            nav id="main-navigation" class="site-navigation" aria-label="Main Navigation" {
                div.site-nav-wrap {
                    div.site-nav-inside {
                        @if header.shows_nav() {
                            (self.render_nav_links(&header.nav_links))
                        }
                        @if header.shows_social() {
                            (self.render_social_links(&header.social_links))
                        }
                    }
                }
            }
        }
    }

    fn render_nav_links(&self, links: &[Action]) -> Markup {
        let current = current_index(links, &self.page.normalized_url());

        html! {
            ul.menu {
                @for (index, action) in links.iter().enumerate() {
                    li class=(class_names(&[
                        ("menu-item", true),
                        ("current-menu-item", current == Some(index)),
                    ])) {
                        (render_action(action, &self.prefix))
                    }
                }
            }
        }
    }

    fn render_social_links(&self, links: &[Action]) -> Markup {
        html! {
            div.social-links {
                @for action in links {
                    (render_action_icon(action, &self.prefix))
                }
            }
        }
    }
}

/// The hamburger button shown next to the navigation block.
fn render_toggle() -> Markup {
    html! {
        button id="menu-toggle" class="menu-toggle" type="button" {
            span.screen-reader-text { "Menu" }
            span class="icon-menu" aria-hidden="true" {}
        }
    }
}

/// Index of the first link whose normalized URL equals `page_url`.
///
/// Links go through the same normalization as the page URL
/// ([`UrlPath::from_browser`], then [`UrlPath::trimmed`]), so `page_url`
/// must come from [`PageDescriptor::normalized_url`].
pub fn current_index(links: &[Action], page_url: &str) -> Option<usize> {
    links
        .iter()
        .position(|action| UrlPath::from_browser(&action.url).trimmed() == page_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const NAV_CONFIG: &str = r#"[header]
title = "Blog"
has_nav = true

[[header.nav_links]]
label = "Posts"
url = "/posts"

[[header.nav_links]]
label = "About"
url = "/about"
"#;

    fn page(url: &str, layout: Option<&str>) -> PageDescriptor {
        PageDescriptor {
            url: Some(UrlPath::from(url)),
            layout: layout.map(Into::into),
            ..Default::default()
        }
    }

    fn render(config: &SiteConfig, page: &PageDescriptor) -> String {
        Header::new(config, page).render().into_string()
    }

    #[test]
    fn test_nav_marks_current_item() {
        let config = test_parse_config(NAV_CONFIG);
        let html = render(&config, &page("/posts/", None));

        assert_eq!(html.matches(r#"<li class="menu-item"#).count(), 2);
        assert_eq!(html.matches("current-menu-item").count(), 1);
        assert!(html.contains(
            r#"<li class="menu-item current-menu-item"><a href="/posts">Posts</a></li>"#
        ));
        assert!(html.contains(r#"<li class="menu-item"><a href="/about">About</a></li>"#));
    }

    #[test]
    fn test_nav_no_current_item() {
        let config = test_parse_config(NAV_CONFIG);
        let html = render(&config, &page("/contact/", None));
        assert!(!html.contains("current-menu-item"));
    }

    #[test]
    fn test_at_most_one_current_item() {
        let config = test_parse_config(
            r#"[header]
has_nav = true
nav_links = [{ label = "A", url = "/posts/" }, { label = "B", url = "posts" }]
"#,
        );
        let html = render(&config, &page("/posts", None));
        assert_eq!(html.matches("current-menu-item").count(), 1);
        assert!(html.contains(r#"<li class="menu-item current-menu-item"><a href="/posts/">A</a>"#));
    }

    #[test]
    fn test_encoded_link_matches_same_page_url() {
        let config = test_parse_config(
            r#"[header]
has_nav = true
nav_links = [{ label = "Cafe", url = "/caf%C3%A9/" }, { label = "Hello", url = "/hello%20world/" }]
"#,
        );

        let html = render(&config, &page("/caf%C3%A9/", None));
        assert_eq!(html.matches("current-menu-item").count(), 1);
        assert!(html.contains(r#"<li class="menu-item current-menu-item"><a href="/caf%C3%A9/">Cafe</a>"#));

        let html = render(&config, &page("/hello%20world/", None));
        assert_eq!(html.matches("current-menu-item").count(), 1);
        assert!(html.contains(r#"current-menu-item"><a href="/hello%20world/">Hello</a>"#));
    }

    #[test]
    fn test_current_index_normalizes_links() {
        let links = [
            Action::new("Cafe", "/caf%C3%A9"),
            Action::new("Posts", "/posts/?page=2#top"),
        ];
        assert_eq!(current_index(&links, "café"), Some(0));
        assert_eq!(current_index(&links, "posts"), Some(1));
        assert_eq!(current_index(&links, "about"), None);
    }

    #[test]
    fn test_root_link_current_without_page_url() {
        let config = test_parse_config(
            r#"[header]
has_nav = true
nav_links = [{ label = "Home", url = "/" }, { label = "About", url = "/about/" }]
"#,
        );
        let html = render(&config, &PageDescriptor::default());
        assert!(html.contains(r#"<li class="menu-item current-menu-item"><a href="/">Home</a>"#));
    }

    #[test]
    fn test_no_links_hides_navigation_and_toggle() {
        for extra in [
            "",
            "[header]\nhas_nav = true\nhas_social = true",
            "[header]\nhas_nav = false\nnav_links = [{ url = \"/a\" }]",
            "[header]\nhas_social = false\nsocial_links = [{ url = \"/a\", icon = \"x\" }]",
        ] {
            let config = test_parse_config(extra);
            let html = render(&config, &PageDescriptor::default());
            assert!(!html.contains("site-navigation"), "{extra}");
            assert!(!html.contains("menu-toggle"), "{extra}");
            assert!(!html.contains("<ul"), "{extra}");
        }
    }

    #[test]
    fn test_social_only_shows_navigation_without_menu() {
        let config = test_parse_config(
            r#"[header]
has_social = true
social_links = [{ label = "GitHub", url = "https://github.com/alice", icon = "github" }]
"#,
        );
        let html = render(&config, &PageDescriptor::default());
        assert!(html.contains(
            r#"<nav id="main-navigation" class="site-navigation" aria-label="Main Navigation">"#
        ));
        assert!(html.contains(r#"<div class="social-links">"#));
        assert!(html.contains(r#"<span class="icon-github" aria-hidden="true">"#));
        assert!(!html.contains(r#"<ul class="menu">"#));
        assert!(html.contains(concat!(
            r#"<button id="menu-toggle" class="menu-toggle" type="button">"#,
            r#"<span class="screen-reader-text">Menu</span>"#,
            r#"<span class="icon-menu" aria-hidden="true"></span></button>"#
        )));
    }

    #[test]
    fn test_title_heading_level() {
        let config = test_parse_config("[header]\ntitle = \"Blog\"");

        let html = render(&config, &page("/", Some("home")));
        assert!(html.contains(r#"<h1 class="site-title"><a href="/">Blog</a></h1>"#));

        let html = render(&config, &page("/posts/hello/", Some("post")));
        assert!(html.contains(r#"<p class="site-title"><a href="/">Blog</a></p>"#));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_branding_optional_fields() {
        let config = test_parse_config("");
        let html = render(&config, &PageDescriptor::default());
        assert!(html.contains(r#"<div class="site-branding"></div>"#));
        assert!(!html.contains("site-logo"));
        assert!(!html.contains("site-description"));
        assert!(!html.contains("site-header-bg"));
    }

    #[test]
    fn test_branding_full() {
        let config = test_parse_config(
            r#"[site]
url = "https://example.github.io/blog/"

[header]
title = "Blog"
tagline = "Notes & thoughts"
logo_img = "images/logo.svg"
logo_img_alt = "Logo"
"#,
        );
        let html = render(&config, &PageDescriptor::default());
        assert!(html.contains(
            r#"<p class="site-logo"><a href="/blog/"><img src="/blog/images/logo.svg" alt="Logo"></a></p>"#
        ));
        assert!(html.contains(r#"<p class="site-title"><a href="/blog/">Blog</a></p>"#));
        assert!(html.contains(r#"<p class="site-description">Notes &amp; thoughts</p>"#));
    }

    #[test]
    fn test_background_image() {
        let config = test_parse_config("[header]\nbackground_img = \"images/default.jpg\"");

        let html = render(&config, &PageDescriptor::default());
        assert!(html.contains(concat!(
            r#"<div class="site-header-bg">"#,
            r#"<img class="site-header-bg-img" src="/images/default.jpg" alt="">"#,
            r#"<div class="site-header-bg-gradient"></div></div>"#
        )));

        let mut page = PageDescriptor::default();
        page.image = Some("images/page.jpg".into());
        let html = render(&config, &page);
        assert!(html.contains(r#"src="/images/page.jpg""#));
        assert!(!html.contains("default.jpg"));
    }

    #[test]
    fn test_render_body_class_follows_state() {
        let config = test_parse_config(NAV_CONFIG);
        let page = PageDescriptor::default();
        let header = Header::new(&config, &page);

        let open = header.render_body(MenuState::OPEN).into_string();
        assert!(open.starts_with(r#"<body class="menu--opened"><header class="site-header">"#));

        let closed = header.render_body(MenuState::CLOSED).into_string();
        assert!(closed.starts_with(r#"<body><header class="site-header">"#));
    }

    #[test]
    fn test_render_document() {
        let config = test_parse_config(NAV_CONFIG);
        let page = PageDescriptor::default();
        let html = Header::new(&config, &page)
            .render_document(MenuState::CLOSED)
            .into_string();
        assert!(html.starts_with("<!DOCTYPE html><html><head>"));
        assert!(html.contains("<title>Blog</title>"));
        assert!(html.ends_with("</header></body></html>"));
    }

    #[test]
    fn test_current_index() {
        let links = vec![Action::new("A", "/a/"), Action::new("B", "b")];
        assert_eq!(current_index(&links, "a"), Some(0));
        assert_eq!(current_index(&links, "b"), Some(1));
        assert_eq!(current_index(&links, "c"), None);
    }
}
