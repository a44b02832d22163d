//! Site metadata configuration for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── analytics  # [analytics.*]
//! │   ├── site       # [site]
//! │   ├── social     # [social]
//! │   └── theme      # site.theme literal
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── env            # Setting, EnvSource
//! ├── metadata       # SiteMetadata (resolved record)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! 1. Start from the built-in literals ([`SiteConfig::default`]).
//! 2. Overlay `site.toml` if one is found.
//! 3. Resolve env-backed settings once ([`SiteConfig::resolve`]).
//! 4. Validate and hand out the immutable [`SiteMetadata`].

mod env;
mod metadata;
pub mod section;
pub mod types;
mod util;

pub use env::{EnvRef, EnvSource, ProcessEnv, Setting};
pub use metadata::{
    AnalyticsMetadata, GoogleAnalytics, PlausibleAnalytics, PosthogAnalytics, SimpleAnalytics,
    SiteMetadata, UmamiAnalytics,
};
pub use section::{
    AnalyticsConfig, AnalyticsProvider, BASE_PATH_ENV, SiteInfoConfig, SocialConfig, Theme,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity, theme and assets
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Social links
    #[serde(default)]
    pub social: SocialConfig,

    /// Analytics providers (replaced as a whole when present)
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// How to locate and treat the config file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Config file name or path.
    pub config: PathBuf,
    /// Directory the upward search starts from.
    pub cwd: PathBuf,
    /// Fail when an explicitly requested config file does not exist.
    pub require_file: bool,
    /// Report validation errors as warnings instead of failing.
    pub lenient: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE),
            cwd: PathBuf::from("."),
            require_file: false,
            lenient: false,
        }
    }
}

/// Load the site metadata record from the process environment.
///
/// This is the single read operation consumers use; the returned value is
/// immutable and should be passed by reference to whatever needs it.
pub fn load(options: &LoadOptions) -> Result<SiteMetadata> {
    load_with_env(options, &ProcessEnv)
}

/// [`load`] with an explicit environment.
pub fn load_with_env(options: &LoadOptions, env: &impl EnvSource) -> Result<SiteMetadata> {
    SiteConfig::locate(options)?.resolve_checked(env, options.lenient)
}

impl SiteConfig {
    /// Find and parse the config file, or fall back to the built-in literals.
    pub fn locate(options: &LoadOptions) -> Result<Self> {
        let path = expand_path(&options.config);
        let cwd = std::path::absolute(&options.cwd).unwrap_or_else(|_| options.cwd.clone());

        match find_config_file(&cwd, &path) {
            Some(found) => {
                debug!("load"; "using {}", found.display());
                Self::from_path(&found)
            }
            None if options.require_file => {
                bail!(ConfigError::Validation(format!(
                    "config file '{}' not found",
                    path.display()
                )))
            }
            None => {
                debug!("load"; "no {} found, using built-in defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields (typo'd keys or provider names).
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve env-backed settings into the exported record.
    ///
    /// Pure apart from environment lookups: the same config and environment
    /// always produce an equal record.
    pub fn resolve(&self, env: &impl EnvSource) -> SiteMetadata {
        let site = &self.site;
        let base_path = site.resolve_base_path(env);

        SiteMetadata {
            title: site.title.clone(),
            author: site.author.clone(),
            header_title: site.header_title.clone(),
            description: site.description.clone(),
            language: site.language.clone(),
            theme: site.theme,
            site_url: site.site_url.clone(),
            site_repo: site.site_repo.clone(),
            site_logo: SiteInfoConfig::asset_url(&base_path, &site.site_logo),
            social_banner: SiteInfoConfig::asset_url(&base_path, &site.social_banner),
            github: self.social.github.clone(),
            linkedin: self.social.linkedin.clone(),
            mastodon: self.social.mastodon.clone(),
            email: self.social.email.clone(),
            locale: site.locale.clone(),
            sticky_nav: site.sticky_nav,
            analytics: self.analytics.resolve(env),
        }
    }

    /// Resolve, then validate the record.
    ///
    /// Warnings are printed; errors fail unless `lenient`, in which case they
    /// are printed as warnings too.
    pub fn resolve_checked(&self, env: &impl EnvSource, lenient: bool) -> Result<SiteMetadata> {
        let metadata = self.resolve(env);

        let mut diag = metadata.validate();
        self.site.validate(&mut diag);
        if lenient {
            diag.demote_errors();
        }
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        Ok(metadata)
    }

    /// Environment variables this config reads.
    pub fn env_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.site.base_path.env_name().into_iter().collect();
        names.extend(self.analytics.env_names());
        names
    }
}

/// Expand a leading `~` in a user supplied path.
fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config overlay.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn options_in(dir: &Path) -> LoadOptions {
        LoadOptions {
            cwd: dir.to_path_buf(),
            ..LoadOptions::default()
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\ntitle = \"My Blog\"").is_err());
    }

    #[test]
    fn test_from_str_invalid_theme() {
        assert!(SiteConfig::from_str("[site]\ntheme = \"blue\"").is_err());
    }

    #[test]
    fn test_empty_file_equals_defaults() {
        assert_eq!(SiteConfig::from_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[analytics.umamii]\nwebsite_id = \"x\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("umamii")));
    }

    #[test]
    fn test_env_reference_typo_fails_to_parse() {
        let content = "[analytics.umami]\nwebsite_id = { env = \"UMAMI\", defualt = \"fallback\" }";
        assert!(SiteConfig::parse_with_ignored(content).is_err());
        assert!(SiteConfig::from_str(content).is_err());
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\n[social]\nemail = \"a@b.co\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let options = LoadOptions {
            config: PathBuf::from("sitemeta-missing-config.toml"),
            ..options_in(temp.path())
        };
        let env = env_of(&[("NEXT_UMAMI_ID", "abc")]);

        let meta = load_with_env(&options, &env).unwrap();
        assert_eq!(meta, SiteConfig::default().resolve(&env));
    }

    #[test]
    fn test_load_require_file() {
        let temp = TempDir::new().unwrap();
        let options = LoadOptions {
            config: PathBuf::from("sitemeta-missing-config.toml"),
            require_file: true,
            ..options_in(temp.path())
        };
        assert!(load_with_env(&options, &env_of(&[])).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[site]\ntitle = \"From File\"\n[analytics.simple]",
        )
        .unwrap();

        let meta = load_with_env(&options_in(temp.path()), &env_of(&[])).unwrap();
        assert_eq!(meta.title, "From File");
        assert_eq!(meta.analytics.enabled(), vec![AnalyticsProvider::Simple]);
    }

    #[test]
    fn test_load_fails_fast_on_invalid_values() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[social]\nemail = \"nope\"").unwrap();

        let err = load_with_env(&options_in(temp.path()), &env_of(&[])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_load_lenient_tolerates_invalid_values() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[social]\nemail = \"nope\"").unwrap();

        let options = LoadOptions {
            lenient: true,
            ..options_in(temp.path())
        };
        let meta = load_with_env(&options, &env_of(&[])).unwrap();
        assert_eq!(meta.email, "nope");
    }

    #[test]
    fn test_base_path_without_leading_slash() {
        let env = env_of(&[("BASE_PATH", "blog"), ("NEXT_UMAMI_ID", "x")]);
        let meta = SiteConfig::default().resolve_checked(&env, false).unwrap();
        assert_eq!(meta.site_logo, "/blog/static/images/lucasgray.png");
        assert_eq!(meta.social_banner, "/blog/static/images/lucasgray.png");
    }

    #[test]
    fn test_relative_asset_path_blames_config_value() {
        let config = test_parse_config("[site]\nsite_logo = \"static/logo.png\"");
        let env = env_of(&[("BASE_PATH", "/blog")]);

        let err = config.resolve_checked(&env, false).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.site_logo");
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use \"/static/logo.png\""));
    }

    #[test]
    fn test_load_is_idempotent() {
        let env = env_of(&[("BASE_PATH", "/blog"), ("NEXT_UMAMI_ID", "abc")]);
        let options = options_in(Path::new("/"));
        let options = LoadOptions {
            config: PathBuf::from("sitemeta-missing-config.toml"),
            ..options
        };

        let first = load_with_env(&options, &env).unwrap();
        let second = load_with_env(&options, &env).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_env_names() {
        let config = SiteConfig::default();
        assert_eq!(config.env_names(), vec!["BASE_PATH", "NEXT_UMAMI_ID"]);
    }

    #[test]
    fn test_expand_path_keeps_plain_paths() {
        assert_eq!(expand_path(Path::new("site.toml")), PathBuf::from("site.toml"));
    }
}
