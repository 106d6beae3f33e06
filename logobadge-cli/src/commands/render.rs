//! Render command - print badges for provider names.

use anyhow::Result;
use clap::Args;
use logobadge_core::{CoreError, LogoBadge, LogoKey};
use logobadge_store::Config;
use logobadge_ui::ProviderLogo;
use maud::Render;
use tracing::debug;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the render command.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Provider names (case-insensitive).
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Fail on names without a logo instead of using the default.
    #[arg(long)]
    pub strict: bool,
}

/// Runs the render command.
pub fn run(args: &RenderArgs, cli: &Cli, config: &Config) -> Result<()> {
    if args.strict {
        check_known(&args.names)?;
    }

    let asset_base = cli.asset_base(config);
    let logos: Vec<ProviderLogo> = args
        .names
        .iter()
        .map(|name| ProviderLogo::new(name.as_str()).asset_base(asset_base))
        .collect();

    debug!(count = logos.len(), asset_base, "Rendering badges");

    match cli.format.unwrap_or(OutputFormat::Html) {
        OutputFormat::Html => {
            for logo in &logos {
                println!("{}", logo.render().into_string());
            }
        }
        OutputFormat::Json => {
            let badges: Vec<LogoBadge> = logos.iter().map(ProviderLogo::badge).collect();
            let formatter = JsonFormatter::new(cli.pretty(config));
            println!("{}", formatter.format_badges(&badges)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            let blocks: Vec<String> = logos
                .iter()
                .map(|logo| formatter.format_badge(&logo.badge()))
                .collect();
            println!("{}", blocks.join("\n\n"));
        }
    }

    Ok(())
}

/// Returns the first name without a table entry as an error.
fn check_known(names: &[String]) -> Result<(), CoreError> {
    names
        .iter()
        .try_for_each(|name| name.parse::<LogoKey>().map(|_| ()))
}
