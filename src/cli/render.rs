//! `render` command: write header markup for one page.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{Write, stdout},
    path::Path,
};

use crate::config::SiteConfig;
use crate::core::PageDescriptor;
use crate::header::{Header, MenuState};
use crate::{debug, log};

/// Render options from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub menu_open: bool,
    pub body: bool,
    pub document: bool,
}

/// Render the header to a string.
///
/// The output shape depends only on `body`/`document`; `menu_open` sets the
/// body class and has no effect on a bare fragment.
pub fn render_header(config: &SiteConfig, page: &PageDescriptor, options: RenderOptions) -> String {
    let header = Header::new(config, page);
    let menu = if options.menu_open {
        MenuState::OPEN
    } else {
        MenuState::CLOSED
    };

    let markup = if options.document {
        header.render_document(menu)
    } else if options.body {
        header.render_body(menu)
    } else {
        header.render()
    };
    markup.into_string()
}

/// Run the render command.
pub fn run_render(
    config: &SiteConfig,
    page: &PageDescriptor,
    options: RenderOptions,
    output: Option<&Path>,
) -> Result<()> {
    debug!("render"; "page {} (layout: {})",
        page.page_url(), page.layout.as_deref().unwrap_or("-"));

    let html = render_header(config, page, options);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("render"; "wrote {} ({} bytes)", path.display(), html.len());
        }
        None => {
            let mut stdout = stdout().lock();
            writeln!(stdout, "{html}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
