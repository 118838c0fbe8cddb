//! Command-line interface definitions.

use clap::{ArgGroup, ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Masthead: site header renderer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: masthead.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter masthead.toml
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Render the header for one page
    ///
    /// Output is a `<header>` fragment, a `<body>` wrapper (`--body`) or a
    /// full document (`--document`).
    #[command(visible_alias = "r")]
    #[command(group(ArgGroup::new("wrapper").args(["body", "document"]).multiple(true)))]
    Render {
        #[command(flatten)]
        page: PageArgs,

        /// Render with the mobile menu open (sets the body class, needs --body or --document)
        #[arg(long, requires = "wrapper")]
        menu_open: bool,

        /// Wrap the header in a `<body>` carrying the menu state class
        #[arg(short, long)]
        body: bool,

        /// Wrap the header in a standalone HTML document
        #[arg(short, long)]
        document: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Mount the header on a simulated browser and replay events
    #[command(visible_alias = "s")]
    Simulate {
        #[command(flatten)]
        page: PageArgs,

        /// Initial viewport width in CSS pixels
        #[arg(short, long, default_value_t = 375)]
        width: u32,

        /// Print one JSON object per event instead of text
        #[arg(short, long)]
        json: bool,

        /// Events: `toggle`, `resize:<width>`, `route:<url>`, `unmount`
        #[arg(value_name = "EVENT", required = true)]
        events: Vec<String>,
    },

    /// Validate the config file
    #[command(visible_alias = "c")]
    Check,
}

/// Page descriptor arguments shared by Render and Simulate.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page descriptor JSON file (`url`, `layout`, `image`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub page: Option<PathBuf>,

    /// Current page URL (overrides the descriptor)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Page layout, `home` renders the title as <h1> (overrides the descriptor)
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Background image path (overrides the descriptor)
    #[arg(long)]
    pub image: Option<String>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_render(&self) -> bool {
        matches!(self.command, Commands::Render { .. })
    }
    pub const fn is_simulate(&self) -> bool {
        matches!(self.command, Commands::Simulate { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "masthead", "render", "--url", "/posts/", "--layout", "home", "--menu-open", "-d",
        ])
        .unwrap();
        assert!(cli.is_render());
        let Commands::Render {
            page,
            menu_open,
            body,
            document,
            output,
        } = cli.command
        else {
            unreachable!()
        };
        assert_eq!(page.url.as_deref(), Some("/posts/"));
        assert_eq!(page.layout.as_deref(), Some("home"));
        assert!(menu_open);
        assert!(!body);
        assert!(document);
        assert!(output.is_none());
    }

    #[test]
    fn test_menu_open_needs_wrapper() {
        assert!(Cli::try_parse_from(["masthead", "render", "--menu-open"]).is_err());
        assert!(Cli::try_parse_from(["masthead", "render", "--menu-open", "--body"]).is_ok());
        assert!(Cli::try_parse_from(["masthead", "render", "-b"]).is_ok());
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "masthead", "-V", "simulate", "-w", "1024", "toggle", "resize:500", "route:/about/",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Simulate { width, events, .. } = cli.command else {
            unreachable!()
        };
        assert_eq!(width, 1024);
        assert_eq!(events, ["toggle", "resize:500", "route:/about/"]);
    }

    #[test]
    fn test_simulate_requires_events() {
        assert!(Cli::try_parse_from(["masthead", "simulate"]).is_err());
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["masthead", "check"]).unwrap();
        assert!(cli.is_check());
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }
}
