//! Single navigation action and social icon action.

use maud::{Markup, html};

use super::markup::{Link, class_names};
use crate::config::{Action, ActionStyle};
use crate::core::PathPrefix;

/// Render a navigation action as a link or button-styled link.
pub fn render_action(action: &Action, prefix: &PathPrefix) -> Markup {
    let class = class_names(&[
        ("button", action.style.is_button()),
        ("secondary", action.style == ActionStyle::Secondary),
    ]);

    Link::new(prefix.with_prefix(&action.url))
        .class(class)
        .target(action.target())
        .rel(action.rel())
        .render(action.label.as_str())
}

/// Render a social action as an icon with screen-reader text.
pub fn render_action_icon(action: &Action, prefix: &PathPrefix) -> Markup {
    let body = html! {
        @if let Some(icon) = action.icon.as_deref().filter(|icon| !icon.is_empty()) {
            span class=(format!("icon-{icon}")) aria-hidden="true" {}
        }
        span.screen-reader-text { (action.label) }
    };

    Link::new(prefix.with_prefix(&action.url))
        .class("social-link")
        .target(action.target())
        .rel(action.rel())
        .render(body)
}
