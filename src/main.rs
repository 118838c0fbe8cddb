//! Masthead - site header renderer with a simulated menu lifecycle.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod header;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, render::RenderOptions};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        // Runs before any config exists
        Commands::Init { force } => cli::init::run_init(*force),
        Commands::Check => cli::check::run_check(&SiteConfig::load(&cli)?),
        Commands::Render {
            page,
            menu_open,
            body,
            document,
            output,
        } => {
            let config = load_validated(&cli)?;
            let page = page.resolve()?;
            let options = RenderOptions {
                menu_open: *menu_open,
                body: *body,
                document: *document,
            };
            cli::render::run_render(&config, &page, options, output.as_deref())
        }
        Commands::Simulate {
            page,
            width,
            json,
            events,
        } => {
            let config = load_validated(&cli)?;
            let page = page.resolve()?;
            cli::simulate::run_simulate(&config, &page, *width, events, *json)
        }
    }
}

/// Load the config and fail on validation errors.
fn load_validated(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    config.validate()?;
    Ok(config)
}
