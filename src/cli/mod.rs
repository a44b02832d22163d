//! Command-line interface module.

pub mod analytics;
mod args;
pub mod init;
pub mod show;
pub mod validate;

pub use args::{Cli, Commands, OutputFormat, ShowArgs};

use crate::config::{CONFIG_FILE, LoadOptions};
use anyhow::{Context, Result};

/// Build config load options from CLI arguments.
///
/// An explicit `--config` must exist; the default name may be absent, in
/// which case the built-in defaults are used.
pub fn load_options(cli: &Cli) -> Result<LoadOptions> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    Ok(LoadOptions {
        config: cli.config.clone().unwrap_or_else(|| CONFIG_FILE.into()),
        cwd,
        require_file: cli.config.is_some(),
        lenient: cli.lenient,
    })
}
