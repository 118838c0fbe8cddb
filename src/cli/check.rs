//! `check` command: validate the config file and report every problem.

use anyhow::Result;

use crate::config::{ConfigDiagnostics, ConfigError, SiteConfig};
use crate::log;

/// Run the check command.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let diag = config.diagnostics();
    diag.print_hints_and_warnings();

    let summary = summarize(config, &diag);
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    log!("check"; "{}", summary);
    Ok(())
}

fn summarize(config: &SiteConfig, diag: &ConfigDiagnostics) -> String {
    let header = &config.header;
    let mut summary = format!(
        "{} ok: {} nav link(s), {} social link(s)",
        config
            .config_path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| "config".into()),
        if header.shows_nav() { header.nav_links.len() } else { 0 },
        if header.shows_social() { header.social_links.len() } else { 0 },
    );
    if !diag.warnings().is_empty() {
        summary.push_str(&format!(", {} warning(s)", diag.warnings().len()));
    }
    summary
}
