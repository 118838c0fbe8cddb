//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod render;
pub mod simulate;

pub use args::{Cli, Commands, PageArgs};

use anyhow::Result;

use crate::core::{PageDescriptor, UrlPath};

impl PageArgs {
    /// Build the page descriptor: JSON file first, then flag overrides.
    pub fn resolve(&self) -> Result<PageDescriptor> {
        let mut page = match &self.page {
            Some(path) => PageDescriptor::from_json_file(path)?,
            None => PageDescriptor::default(),
        };

        if let Some(url) = &self.url {
            page.url = Some(UrlPath::from(url.as_str()));
        }
        if let Some(layout) = &self.layout {
            page.layout = Some(layout.clone());
        }
        if let Some(image) = &self.image {
            page.image = Some(image.clone());
        }

        Ok(page)
    }
}
