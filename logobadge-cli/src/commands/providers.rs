//! Providers command - list the logo table.

use anyhow::Result;
use logobadge_core::LogoTable;
use logobadge_store::Config;
use logobadge_ui::ProviderLogo;
use maud::Render;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the providers command.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    info!("Listing logo table");

    let entries = LogoTable::entries();
    let asset_base = cli.asset_base(config);

    match cli.format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_providers_header());
            println!("{}", "─".repeat(60));

            for asset in &entries {
                println!("{}", formatter.format_provider_line(asset));
            }

            println!();
            println!(
                "Total: {} entries ({} providers + default)",
                entries.len(),
                entries.len().saturating_sub(1)
            );
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty(config));
            println!("{}", formatter.format_providers(&entries, asset_base)?);
        }
        OutputFormat::Html => {
            for asset in &entries {
                let logo = ProviderLogo::new(asset.key.display_name()).asset_base(asset_base);
                println!("{}", logo.render().into_string());
            }
        }
    }

    Ok(())
}
