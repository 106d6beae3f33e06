//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use logobadge_store::{Config, default_config_dir};
use tracing::info;

use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Write a config file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl ConfigAction {
    /// Whether the action reads the loaded config. `path` and `init` must
    /// still work when the file on disk is broken.
    pub fn reads_config(&self) -> bool {
        matches!(self, ConfigAction::Show)
    }
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli, config: &Config) -> Result<()> {
    let format = match cli.format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Html => anyhow::bail!("html output is only available for badges"),
        other => other,
    };

    match &args.action {
        ConfigAction::Show => show_config(config, cli, format),
        ConfigAction::Path => show_paths(config, cli, format),
        ConfigAction::Init { force } => init_config(cli, *force),
    }
}

fn show_config(config: &Config, cli: &Cli, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty(config));
            println!("{}", formatter.format(config)?);
        }
        _ => {
            println!("LogoBadge Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("Log level:   {}", config.general.log_level);
            println!("Asset base:  {}", config.assets.base_path);
            println!("Pretty JSON: {}", config.output.pretty);
        }
    }

    Ok(())
}

fn show_paths(config: &Config, cli: &Cli, format: OutputFormat) -> Result<()> {
    let config_dir = default_config_dir();
    let config_path = cli.config_path();

    match format {
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "config_file": config_path.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty(config));
            println!("{}", formatter.format(&paths)?);
        }
        _ => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:  {}", config_dir.display());
            println!("Config file: {}", config_path.display());
        }
    }

    Ok(())
}

fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = cli.config_path();
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote {}", path.display());

    Ok(())
}
