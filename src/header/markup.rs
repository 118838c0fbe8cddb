//! Markup primitives shared by the header parts.

use maud::{Markup, Render, html};

/// Join the class names whose flag is set.
///
/// # Example
/// ```ignore
/// class_names(&[("menu-item", true), ("current-menu-item", false)]) // "menu-item"
/// ```
pub fn class_names(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(name, enabled)| *enabled && !name.is_empty())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Anchor element with optional class, target and rel.
#[derive(Debug, Clone, Default)]
pub struct Link {
    href: String,
    class: Option<String>,
    target: Option<&'static str>,
    rel: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    /// Set the class attribute; an empty string leaves it off.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = (!class.is_empty()).then_some(class);
        self
    }

    pub fn target(mut self, target: Option<&'static str>) -> Self {
        self.target = target;
        self
    }

    pub fn rel(mut self, rel: Option<String>) -> Self {
        self.rel = rel;
        self
    }

    /// Render the anchor around `body`.
    pub fn render(&self, body: impl Render) -> Markup {
        html! {
            a href=(self.href) class=[self.class.as_deref()] target=[self.target] rel=[self.rel.as_deref()] {
                (body)
            }
        }
    }
}
