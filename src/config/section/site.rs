//! `[site]` section configuration.
//!
//! Site identity, theme and the static assets used for social sharing.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Lucas Makes Software"
//! author = "Lucas Gray"
//! header_title = "Lucas Makes Software"
//! description = "A journal about my forays into game development."
//! language = "en-us"
//! locale = "en-US"
//! theme = "system"  # "system" | "dark" | "light"
//! site_url = "https://lucasegray.com"
//! site_repo = "https://github.com/lucasgray/lucasblog"
//! base_path = { env = "BASE_PATH" }
//! site_logo = "/static/images/lucasgray.png"
//! social_banner = "/static/images/lucasgray.png"
//! sticky_nav = false
//! ```

use super::Theme;
use crate::config::util::check_asset_path;
use crate::config::{ConfigDiagnostics, EnvSource, FieldPath, Setting};
use serde::{Deserialize, Serialize};

/// Environment variable holding the deployment base path.
pub const BASE_PATH_ENV: &str = "BASE_PATH";

/// Static image shared by the logo and the social banner.
const DEFAULT_IMAGE: &str = "/static/images/lucasgray.png";

/// Site identity and presentation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Title shown in the page header.
    pub header_title: String,

    /// Site description, used for meta tags.
    pub description: String,

    /// Language code (e.g., "en-us").
    pub language: String,

    /// Locale used for date formatting (e.g., "en-US").
    pub locale: String,

    /// Default color theme.
    pub theme: Theme,

    /// Canonical site URL.
    pub site_url: String,

    /// Source repository URL.
    pub site_repo: String,

    /// Prefix for static assets when deployed under a sub-path.
    pub base_path: Setting,

    /// Logo path, relative to the base path.
    pub site_logo: String,

    /// Social sharing banner path, relative to the base path.
    pub social_banner: String,

    /// Keep the navbar fixed to the top.
    pub sticky_nav: bool,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Lucas Makes Software".into(),
            author: "Lucas Gray".into(),
            header_title: "Lucas Makes Software".into(),
            description: "A journal about my forays into game development. \
                          Occasionally punctuated by work projects."
                .into(),
            language: "en-us".into(),
            locale: "en-US".into(),
            theme: Theme::System,
            site_url: "https://lucasegray.com".into(),
            site_repo: "https://github.com/lucasgray/lucasblog".into(),
            base_path: Setting::env(BASE_PATH_ENV),
            site_logo: DEFAULT_IMAGE.into(),
            social_banner: DEFAULT_IMAGE.into(),
            sticky_nav: false,
        }
    }
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const AUTHOR: FieldPath = FieldPath::new("site.author");
    pub const HEADER_TITLE: FieldPath = FieldPath::new("site.header_title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("site.description");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.language");
    pub const LOCALE: FieldPath = FieldPath::new("site.locale");
    pub const SITE_URL: FieldPath = FieldPath::new("site.site_url");
    pub const SITE_REPO: FieldPath = FieldPath::new("site.site_repo");
    pub const SITE_LOGO: FieldPath = FieldPath::new("site.site_logo");
    pub const SOCIAL_BANNER: FieldPath = FieldPath::new("site.social_banner");

    /// Resolved base path as `/segment`, without a trailing slash.
    /// Empty when unset.
    pub fn resolve_base_path(&self, env: &impl EnvSource) -> String {
        match self.base_path.resolve(env) {
            Some(path) => match path.trim_matches('/') {
                "" => String::new(),
                path => format!("/{path}"),
            },
            None => String::new(),
        }
    }

    /// Check the asset paths as written, before any base path is joined.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_asset_path(&self.site_logo, Self::SITE_LOGO, diag);
        check_asset_path(&self.social_banner, Self::SOCIAL_BANNER, diag);
    }

    /// Join the base path with a static asset path.
    pub fn asset_url(base_path: &str, asset: &str) -> String {
        format!("{base_path}{asset}")
    }
}

// ============================================================================
// tests
// ============================================================================
