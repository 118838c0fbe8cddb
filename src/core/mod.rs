//! Core types - pure abstractions shared across the codebase.

mod page;
mod url;

pub use page::PageDescriptor;
pub use url::{PathPrefix, UrlPath};
