//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site metadata loader CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Report validation errors as warnings instead of failing
    #[arg(short, long, global = true)]
    pub lenient: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved site metadata for the build pipeline
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Check the config and report every problem at once
    #[command(visible_alias = "v")]
    Validate,

    /// Write a commented site.toml with the built-in defaults
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write site.toml into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing site.toml
        #[arg(short, long)]
        force: bool,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// List analytics providers and the script origins they need allowed
    #[command(visible_alias = "a")]
    Analytics,
}

/// Output format of `show`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Single-line JSON instead of pretty-printed
    #[arg(short, long)]
    pub compact: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["sitemeta", "show", "--format", "toml", "-o", "meta.toml"]);
        match cli.command {
            Commands::Show { args } => {
                assert_eq!(args.format, OutputFormat::Toml);
                assert_eq!(args.output, Some(PathBuf::from("meta.toml")));
                assert!(!args.compact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sitemeta", "validate", "--lenient", "-C", "blog/site.toml"]);
        assert!(matches!(cli.command, Commands::Validate));
        assert!(cli.lenient);
        assert_eq!(cli.config, Some(PathBuf::from("blog/site.toml")));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["sitemeta", "init", "myblog", "--force"]);
        assert!(matches!(cli.command, Commands::Init { .. }));
        match cli.command {
            Commands::Init { dir, force, dry } => {
                assert_eq!(dir, Some(PathBuf::from("myblog")));
                assert!(force);
                assert!(!dry);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
