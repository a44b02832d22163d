//! Recognized analytics providers and their per-provider settings.

use crate::config::{FieldPath, Setting};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Analytics providers the build pipeline knows how to inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnalyticsProvider {
    Umami,
    Plausible,
    Simple,
    Posthog,
    Google,
}

impl AnalyticsProvider {
    pub const ALL: [Self; 5] = [
        Self::Umami,
        Self::Plausible,
        Self::Simple,
        Self::Posthog,
        Self::Google,
    ];

    /// Key of the provider object in the exported record.
    pub const fn export_key(&self) -> &'static str {
        match self {
            Self::Umami => "umamiAnalytics",
            Self::Plausible => "plausibleAnalytics",
            Self::Simple => "simpleAnalytics",
            Self::Posthog => "posthogAnalytics",
            Self::Google => "googleAnalytics",
        }
    }

    /// `[analytics.<name>]` table in `site.toml`.
    pub const fn field(&self) -> FieldPath {
        match self {
            Self::Umami => FieldPath::new("analytics.umami"),
            Self::Plausible => FieldPath::new("analytics.plausible"),
            Self::Simple => FieldPath::new("analytics.simple"),
            Self::Posthog => FieldPath::new("analytics.posthog"),
            Self::Google => FieldPath::new("analytics.google"),
        }
    }

    /// Config key of the credential the provider needs, if any.
    pub const fn credential_field(&self) -> Option<FieldPath> {
        match self {
            Self::Umami => Some(UmamiConfig::WEBSITE_ID),
            Self::Plausible => Some(PlausibleConfig::DATA_DOMAIN),
            Self::Simple => None,
            Self::Posthog => Some(PosthogConfig::PROJECT_API_KEY),
            Self::Google => Some(GoogleConfig::ANALYTICS_ID),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Umami => "Umami",
            Self::Plausible => "Plausible",
            Self::Simple => "Simple Analytics",
            Self::Posthog => "PostHog",
            Self::Google => "Google Analytics",
        }
    }

    /// Script loaded when the provider has no `src` override.
    pub const fn default_src(&self) -> &'static str {
        match self {
            Self::Umami => "https://analytics.umami.is/script.js",
            Self::Plausible => "https://plausible.io/js/plausible.js",
            Self::Simple => "https://scripts.simpleanalyticscdn.com/latest.js",
            Self::Posthog => "https://app.posthog.com/static/array.js",
            Self::Google => "https://www.googletagmanager.com/gtag/js",
        }
    }
}

impl fmt::Display for AnalyticsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// per-provider settings
// ============================================================================

/// `[analytics.umami]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UmamiConfig {
    /// Website ID, e.g. `123e4567-e89b-12d3-a456-426614174000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_id: Option<Setting>,

    /// Script override, e.g. `https://us.umami.is/script.js` for US data storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<Setting>,
}

impl UmamiConfig {
    pub const WEBSITE_ID: FieldPath = FieldPath::new("analytics.umami.website_id");
    pub const SRC: FieldPath = FieldPath::new("analytics.umami.src");
}

/// `[analytics.plausible]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibleConfig {
    /// Tracked domain, e.g. `myblog.vercel.app`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_domain: Option<Setting>,

    /// Script override for self-hosted Plausible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<Setting>,
}

impl PlausibleConfig {
    pub const DATA_DOMAIN: FieldPath = FieldPath::new("analytics.plausible.data_domain");
    pub const SRC: FieldPath = FieldPath::new("analytics.plausible.src");
}

/// `[analytics.simple]`, enabled by the empty table alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleConfig {}

/// `[analytics.posthog]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosthogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_api_key: Option<Setting>,
}

impl PosthogConfig {
    pub const PROJECT_API_KEY: FieldPath = FieldPath::new("analytics.posthog.project_api_key");
}

/// `[analytics.google]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleConfig {
    /// Measurement ID, e.g. `G-XXXXXXX`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<Setting>,
}

impl GoogleConfig {
    pub const ANALYTICS_ID: FieldPath = FieldPath::new("analytics.google.analytics_id");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_keys_are_unique() {
        let mut keys: Vec<_> = AnalyticsProvider::ALL.iter().map(|p| p.export_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), AnalyticsProvider::ALL.len());
    }

    #[test]
    fn test_default_src_is_https() {
        for provider in AnalyticsProvider::ALL {
            assert!(provider.default_src().starts_with("https://"), "{provider}");
        }
    }

    #[test]
    fn test_credential_field_belongs_to_provider() {
        for provider in AnalyticsProvider::ALL {
            if let Some(field) = provider.credential_field() {
                assert!(field.as_str().starts_with(provider.field().as_str()));
            }
        }
        assert!(AnalyticsProvider::Simple.credential_field().is_none());
    }
}
