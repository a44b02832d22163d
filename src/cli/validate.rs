//! `validate` command: check the config and report the outcome.

use crate::config::{EnvSource, LoadOptions, ProcessEnv, SiteConfig};
use crate::log;
use anyhow::Result;

/// Validate the site config against the process environment.
pub fn validate_site(options: &LoadOptions) -> Result<()> {
    validate_with_env(options, &ProcessEnv)
}

fn validate_with_env(options: &LoadOptions, env: &impl EnvSource) -> Result<()> {
    let config = SiteConfig::locate(options)?;
    report_env(&config, env);

    let metadata = config.resolve_checked(env, options.lenient)?;
    let enabled = metadata.analytics.enabled();
    log!(
        "ok";
        "site config is valid ({} analytics provider{} enabled)",
        enabled.len(),
        if enabled.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Show which referenced environment variables are set.
fn report_env(config: &SiteConfig, env: &impl EnvSource) {
    for name in config.env_names() {
        match env.var(name) {
            Some(value) if !value.is_empty() => log!("env"; "{name} is set"),
            _ => log!("env"; "{name} is not set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use rustc_hash::FxHashMap;
    use std::fs;
    use tempfile::TempDir;

    fn options_in(temp: &TempDir) -> LoadOptions {
        LoadOptions {
            cwd: temp.path().to_path_buf(),
            require_file: true,
            ..LoadOptions::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[site]\nsticky_nav = true").unwrap();

        let env = FxHashMap::<String, String>::default();
        assert!(validate_with_env(&options_in(&temp), &env).is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[site]\nsite_url = \"not a url\"",
        )
        .unwrap();

        let env = FxHashMap::<String, String>::default();
        assert!(validate_with_env(&options_in(&temp), &env).is_err());
    }
}
