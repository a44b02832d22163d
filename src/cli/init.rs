//! Configuration file generation.
//!
//! Creates a commented `site.toml` reproducing the built-in defaults.

use crate::config::CONFIG_FILE;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

const TEMPLATE_BODY: &str = r#"
[site]
title = "Lucas Makes Software"
author = "Lucas Gray"
header_title = "Lucas Makes Software"
description = "A journal about my forays into game development. Occasionally punctuated by work projects."
language = "en-us"
locale = "en-US"
# "system" | "dark" | "light"
theme = "system"
site_url = "https://lucasegray.com"
site_repo = "https://github.com/lucasgray/lucasblog"
# Prefix for site_logo and social_banner when deployed under a sub-path.
base_path = { env = "BASE_PATH" }
site_logo = "/static/images/lucasgray.png"
social_banner = "/static/images/lucasgray.png"
# Set to true for a navbar fixed to the top
sticky_nav = false

[social]
github = "https://github.com/lucasgray"
linkedin = "https://www.linkedin.com/in/lucas-gray-6169403/"
mastodon = "https://mastodon.gamedev.place/@lucasgray"
email = "lucas.e.gray@gmail.com"

# Every enabled provider's script origin must be allowed by the content
# security policy of the deployment. Run `sitemeta analytics` to list them.
# Removing a provider table disables it.

[analytics.umami]
# Read from the environment so clones of this repo don't report into our analytics.
website_id = { env = "NEXT_UMAMI_ID" }
# For data stored in the US (allow us.umami.is in the CSP):
# src = "https://us.umami.is/script.js"

[analytics.google]
analytics_id = "G-96SYSZ6TC6"

# [analytics.plausible]
# data_domain = "myblog.vercel.app"
# If you are hosting your own Plausible:
# src = "https://plausible.my-domain.com/js/script.js"

# [analytics.simple]

# [analytics.posthog]
# project_api_key = { env = "NEXT_POSTHOG_KEY" }
"#;

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Site metadata (sitemeta v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Values may be literals or { env = \"NAME\" } references.\n");
    out.push_str(TEMPLATE_BODY);

    out
}

/// Write default site.toml configuration into `root`.
pub fn write_config(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// `init` command entry.
pub fn new_config(dir: Option<&Path>, force: bool, dry: bool) -> Result<()> {
    if dry {
        print!("{}", generate_config_template());
        return Ok(());
    }
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    write_config(&root, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_defaults() {
        let parsed = SiteConfig::from_str(&generate_config_template()).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), false).unwrap();

        let config_path = temp.path().join("site.toml");
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[analytics.umami]"));
    }

    #[test]
    fn test_write_config_creates_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("myblog");
        write_config(&root, false).unwrap();
        assert!(root.join("site.toml").exists());
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");

        write_config(temp.path(), true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "custom content");
    }
}
