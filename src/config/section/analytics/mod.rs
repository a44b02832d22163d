//! `[analytics]` section configuration.
//!
//! A provider is enabled by the presence of its table. When `site.toml` has
//! no `[analytics]` table at all, the built-in selection (Umami + Google)
//! applies; once the table exists it replaces that selection entirely.
//!
//! Every enabled provider's script origin must also be allowed by the
//! deployment's content security policy, see `sitemeta analytics`.
//!
//! # Example
//!
//! ```toml
//! [analytics.umami]
//! website_id = { env = "NEXT_UMAMI_ID" }
//! # src = "https://us.umami.is/script.js"
//!
//! [analytics.google]
//! analytics_id = "G-96SYSZ6TC6"
//!
//! # [analytics.plausible]
//! # data_domain = "myblog.vercel.app"
//!
//! # [analytics.simple]
//!
//! # [analytics.posthog]
//! # project_api_key = { env = "NEXT_POSTHOG_KEY" }
//! ```

mod provider;

pub use provider::{
    AnalyticsProvider, GoogleConfig, PlausibleConfig, PosthogConfig, SimpleConfig, UmamiConfig,
};

use crate::config::metadata::{
    AnalyticsMetadata, GoogleAnalytics, PlausibleAnalytics, PosthogAnalytics, SimpleAnalytics,
    UmamiAnalytics,
};
use crate::config::{EnvSource, Setting};
use serde::{Deserialize, Serialize};

/// Environment variable the built-in Umami website ID is read from.
pub const UMAMI_ID_ENV: &str = "NEXT_UMAMI_ID";

/// Analytics provider selection.
///
/// No container-level `serde(default)`: a provider missing from a present
/// `[analytics]` table is disabled, not filled from the built-in selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umami: Option<UmamiConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plausible: Option<PlausibleConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple: Option<SimpleConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posthog: Option<PosthogConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google: Option<GoogleConfig>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            umami: Some(UmamiConfig {
                website_id: Some(Setting::env(UMAMI_ID_ENV)),
                src: None,
            }),
            google: Some(GoogleConfig {
                analytics_id: Some(Setting::literal("G-96SYSZ6TC6")),
            }),
            ..Self::disabled()
        }
    }
}

impl AnalyticsConfig {
    /// No provider enabled.
    pub const fn disabled() -> Self {
        Self {
            umami: None,
            plausible: None,
            simple: None,
            posthog: None,
            google: None,
        }
    }

    /// Resolve every enabled provider against the environment.
    pub fn resolve(&self, env: &impl EnvSource) -> AnalyticsMetadata {
        let resolve = |setting: &Option<Setting>| setting.as_ref().and_then(|s| s.resolve(env));

        AnalyticsMetadata {
            umami_analytics: self.umami.as_ref().map(|umami| UmamiAnalytics {
                umami_website_id: resolve(&umami.website_id),
                src: resolve(&umami.src),
            }),
            plausible_analytics: self.plausible.as_ref().map(|plausible| PlausibleAnalytics {
                plausible_data_domain: resolve(&plausible.data_domain),
                src: resolve(&plausible.src),
            }),
            simple_analytics: self.simple.as_ref().map(|_| SimpleAnalytics {}),
            posthog_analytics: self.posthog.as_ref().map(|posthog| PosthogAnalytics {
                posthog_project_api_key: resolve(&posthog.project_api_key),
            }),
            google_analytics: self.google.as_ref().map(|google| GoogleAnalytics {
                google_analytics_id: resolve(&google.analytics_id),
            }),
        }
    }

    /// Environment variables referenced by enabled providers.
    pub fn env_names(&self) -> Vec<&str> {
        let settings = [
            self.umami.as_ref().and_then(|c| c.website_id.as_ref()),
            self.umami.as_ref().and_then(|c| c.src.as_ref()),
            self.plausible.as_ref().and_then(|c| c.data_domain.as_ref()),
            self.plausible.as_ref().and_then(|c| c.src.as_ref()),
            self.posthog.as_ref().and_then(|c| c.project_api_key.as_ref()),
            self.google.as_ref().and_then(|c| c.analytics_id.as_ref()),
        ];
        settings
            .into_iter()
            .flatten()
            .filter_map(Setting::env_name)
            .collect()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_builtin_selection() {
        let config = test_parse_config("");
        assert!(config.analytics.umami.is_some());
        assert!(config.analytics.google.is_some());
        assert!(config.analytics.plausible.is_none());
        assert!(config.analytics.simple.is_none());
        assert!(config.analytics.posthog.is_none());
    }

    #[test]
    fn test_table_replaces_builtin_selection() {
        let config = test_parse_config("[analytics.plausible]\ndata_domain = \"blog.example.com\"");
        assert!(config.analytics.umami.is_none());
        assert!(config.analytics.google.is_none());
        assert_eq!(
            config.analytics.plausible.unwrap().data_domain,
            Some(Setting::literal("blog.example.com"))
        );
    }

    #[test]
    fn test_empty_table_disables_everything() {
        let config = test_parse_config("[analytics]");
        assert_eq!(config.analytics, AnalyticsConfig::disabled());
    }

    #[test]
    fn test_simple_enabled_by_empty_table() {
        let config = test_parse_config("[analytics.simple]");
        assert_eq!(config.analytics.simple, Some(SimpleConfig {}));
    }

    #[test]
    fn test_resolve_unset_env_is_absent() {
        let env = FxHashMap::<String, String>::default();
        let analytics = AnalyticsConfig::default().resolve(&env);

        let umami = analytics.umami_analytics.unwrap();
        assert_eq!(umami.umami_website_id, None);
        assert_eq!(umami.src, None);
        assert_eq!(
            analytics.google_analytics.unwrap().google_analytics_id.as_deref(),
            Some("G-96SYSZ6TC6")
        );
    }

    #[test]
    fn test_resolve_env_value() {
        let mut env = FxHashMap::<String, String>::default();
        env.insert(UMAMI_ID_ENV.to_string(), "123e4567".to_string());
        let analytics = AnalyticsConfig::default().resolve(&env);
        assert_eq!(
            analytics.umami_analytics.unwrap().umami_website_id.as_deref(),
            Some("123e4567")
        );
    }

    #[test]
    fn test_env_names() {
        let config = test_parse_config(
            "[analytics.umami]\nwebsite_id = { env = \"UMAMI\" }\n\
             [analytics.posthog]\nproject_api_key = { env = \"POSTHOG\" }\n\
             [analytics.google]\nanalytics_id = \"G-1\"",
        );
        assert_eq!(config.analytics.env_names(), vec!["UMAMI", "POSTHOG"]);
    }
}
