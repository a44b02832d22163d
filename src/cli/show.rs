//! `show` command: export the resolved record.

use super::{OutputFormat, ShowArgs};
use crate::{config::SiteMetadata, log};
use anyhow::{Context, Result};
use std::fs;

/// Print or write the resolved site metadata.
pub fn show_metadata(metadata: &SiteMetadata, args: &ShowArgs) -> Result<()> {
    let rendered = render(metadata, args.format, args.compact)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("show"; "wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render(metadata: &SiteMetadata, format: OutputFormat, compact: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if compact => serde_json::to_string(metadata)?,
        OutputFormat::Json => metadata.to_json()?,
        OutputFormat::Toml => toml::to_string_pretty(metadata)?,
    };
    Ok(rendered)
}
