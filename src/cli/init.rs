//! `init` command: write a starter `masthead.toml`.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{CONFIG_FILE, DEFAULT_MENU_BREAKPOINT};
use crate::log;

/// Generate masthead.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Masthead configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(
        r#"[site]
# Site title, also used as the header title when [header] sets none.
title = "My Site"
# Public URL. Its path becomes the link prefix, e.g. "/blog/".
# url = "https://example.com/blog/"
# Explicit link prefix, overrides the path of `url`.
# path_prefix = "blog"

"#,
    );

    out.push_str(&format!(
        r#"[header]
# title = "My Site"
tagline = "A short description"
# logo_img = "images/logo.svg"
# logo_img_alt = "Site logo"
# background_img = "images/header.jpg"
# Viewport width (px) from which the menu toggle is hidden.
menu_breakpoint = {DEFAULT_MENU_BREAKPOINT}

has_nav = true
has_social = false

[[header.nav_links]]
label = "Home"
url = "/"

[[header.nav_links]]
label = "About"
url = "/about/"

# [[header.nav_links]]
# label = "Subscribe"
# url = "/subscribe/"
# style = "primary"    # link | primary | secondary

# [[header.social_links]]
# label = "GitHub"
# url = "https://github.com/example"
# icon = "github"
# new_window = true
# no_follow = false
"#
    ));

    out
}

/// Write the starter config into `root`, refusing to overwrite unless `force`.
pub fn write_config(root: &Path, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `masthead init --force` to overwrite it.",
            path.display()
        );
    }

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// Run the init command in the current directory.
pub fn run_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = write_config(&cwd, force)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
