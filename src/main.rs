//! sitemeta - site metadata loader for a static blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitemeta::cli::{self, Cli, Commands};
use sitemeta::{config, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let options = cli::load_options(&cli)?;

    match &cli.command {
        Commands::Init { dir, force, dry } => cli::init::new_config(dir.as_deref(), *force, *dry),
        Commands::Validate => cli::validate::validate_site(&options),
        Commands::Show { args } => {
            let metadata = config::load(&options)?;
            cli::show::show_metadata(&metadata, args)
        }
        Commands::Analytics => {
            let metadata = config::load(&options)?;
            cli::analytics::report_analytics(&metadata.analytics);
            Ok(())
        }
    }
}
