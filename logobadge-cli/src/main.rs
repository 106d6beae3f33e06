// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! LogoBadge CLI - render provider logo badges from the command line.
//!
//! # Examples
//!
//! ```bash
//! # HTML for one badge
//! logobadge render OpenAI
//!
//! # Render tree as JSON
//! logobadge render xai --format json --pretty
//!
//! # Fail on names without a logo instead of using the default
//! logobadge render made-up-provider --strict
//!
//! # List the logo table
//! logobadge providers
//!
//! # Write a default config file
//! logobadge config init
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use logobadge_core::CoreError;
use logobadge_store::{Config, StoreError};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config, providers, render};

// ============================================================================
// CLI Definition
// ============================================================================

/// LogoBadge CLI - provider logo badges.
#[derive(Parser)]
#[command(name = "logobadge")]
#[command(about = "Render circular provider logo badges")]
#[command(long_about = r#"
LogoBadge renders a circular badge holding a provider's logo.

Known providers:
  openai, anthropic, google, groq, ollama,
  databricks, openrouter, snowflake, xai

Any other name gets the default logo.

Examples:
  logobadge render OpenAI              # HTML badge
  logobadge render xai --format json   # Render tree as JSON
  logobadge providers                  # List the logo table
"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format. Defaults to html for render, text otherwise.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Path or URL prefix for logo images (overrides the config file).
    #[arg(long, global = true)]
    pub asset_base: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, no error message).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render badges for one or more provider names.
    #[command(visible_alias = "r")]
    Render(render::RenderArgs),

    /// List the logo table.
    #[command(visible_alias = "p")]
    Providers,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON output for scripting.
    Json,
    /// HTML markup.
    Html,
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Strict render of a name without a logo.
    UnknownProvider = 2,
    /// Config file could not be read or written.
    ConfigError = 3,
}

impl ExitCode {
    fn for_error(err: &anyhow::Error) -> Self {
        if let Some(CoreError::UnknownProvider(_)) = err.downcast_ref::<CoreError>() {
            Self::UnknownProvider
        } else if err.downcast_ref::<StoreError>().is_some() {
            Self::ConfigError
        } else {
            Self::Error
        }
    }
}

impl Cli {
    /// Loads the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, StoreError> {
        match &self.config_file {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Path of the config file in use.
    pub fn config_path(&self) -> PathBuf {
        self.config_file.clone().unwrap_or_else(Config::default_path)
    }

    /// Asset base from the command line, falling back to the config.
    pub fn asset_base<'a>(&'a self, config: &'a Config) -> &'a str {
        self.asset_base
            .as_deref()
            .unwrap_or(config.assets.base_path.as_str())
    }

    /// Whether JSON should be pretty-printed.
    pub fn pretty(&self, config: &Config) -> bool {
        self.pretty || config.output.pretty
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, level: &str) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("logobadge=debug,info")
    } else {
        EnvFilter::new(format!("logobadge={level}"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let loaded = cli.load_config();
    let level = loaded
        .as_ref()
        .map_or("warn", |c| c.general.log_level.as_str());
    setup_logging(cli.verbose, cli.quiet, level);

    let result = run(&cli, loaded);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }
}

fn run(cli: &Cli, loaded: Result<Config, StoreError>) -> Result<()> {
    let config = match (&cli.command, loaded) {
        (Commands::Config(args), Err(e)) if !args.action.reads_config() => {
            warn!(error = %e, "Ignoring unreadable config file");
            Config::default()
        }
        (_, loaded) => loaded?,
    };

    match &cli.command {
        Commands::Render(args) => render::run(args, cli, &config),
        Commands::Providers => providers::run(cli, &config),
        Commands::Config(args) => config::run(args, cli, &config),
    }
}
