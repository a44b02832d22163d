//! Resolved site metadata.
//!
//! [`SiteMetadata`] is what the build pipeline reads: environment applied,
//! asset paths joined, field names exactly as the page templates expect them
//! (`headerTitle`, `siteLogo`, `analytics.umamiAnalytics.umamiWebsiteId`, ...).
//! Renaming a field here breaks every template that reads it.

use super::section::{
    AnalyticsProvider, SiteInfoConfig, SocialConfig, Theme,
    analytics::{PlausibleConfig, UmamiConfig},
};
use super::util::{check_email, check_language_tag, check_non_empty, check_url};
use super::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Fully resolved site metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub author: String,
    pub header_title: String,
    pub description: String,
    pub language: String,
    pub theme: Theme,
    pub site_url: String,
    pub site_repo: String,
    /// Base path + logo asset path.
    pub site_logo: String,
    /// Base path + social banner asset path.
    pub social_banner: String,
    pub github: String,
    pub linkedin: String,
    pub mastodon: String,
    pub email: String,
    pub locale: String,
    pub sticky_nav: bool,
    pub analytics: AnalyticsMetadata,
}

/// Enabled analytics providers. An absent entry means disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umami_analytics: Option<UmamiAnalytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plausible_analytics: Option<PlausibleAnalytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_analytics: Option<SimpleAnalytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posthog_analytics: Option<PosthogAnalytics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<GoogleAnalytics>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmamiAnalytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umami_website_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlausibleAnalytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plausible_data_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// Simple Analytics takes no settings; serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleAnalytics {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosthogAnalytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posthog_project_api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAnalytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
}

// ============================================================================
// analytics queries
// ============================================================================

impl AnalyticsMetadata {
    /// Enabled providers, in declaration order.
    pub fn enabled(&self) -> Vec<AnalyticsProvider> {
        AnalyticsProvider::ALL
            .into_iter()
            .filter(|provider| self.is_enabled(*provider))
            .collect()
    }

    pub fn is_enabled(&self, provider: AnalyticsProvider) -> bool {
        match provider {
            AnalyticsProvider::Umami => self.umami_analytics.is_some(),
            AnalyticsProvider::Plausible => self.plausible_analytics.is_some(),
            AnalyticsProvider::Simple => self.simple_analytics.is_some(),
            AnalyticsProvider::Posthog => self.posthog_analytics.is_some(),
            AnalyticsProvider::Google => self.google_analytics.is_some(),
        }
    }

    /// Enabled and carrying the credential the provider needs.
    pub fn is_configured(&self, provider: AnalyticsProvider) -> bool {
        match provider {
            AnalyticsProvider::Umami => self
                .umami_analytics
                .as_ref()
                .is_some_and(|c| c.umami_website_id.is_some()),
            AnalyticsProvider::Plausible => self
                .plausible_analytics
                .as_ref()
                .is_some_and(|c| c.plausible_data_domain.is_some()),
            AnalyticsProvider::Simple => self.simple_analytics.is_some(),
            AnalyticsProvider::Posthog => self
                .posthog_analytics
                .as_ref()
                .is_some_and(|c| c.posthog_project_api_key.is_some()),
            AnalyticsProvider::Google => self
                .google_analytics
                .as_ref()
                .is_some_and(|c| c.google_analytics_id.is_some()),
        }
    }

    /// Script the page will load for `provider`, `None` if disabled.
    pub fn script_src(&self, provider: AnalyticsProvider) -> Option<&str> {
        if !self.is_enabled(provider) {
            return None;
        }
        let src = match provider {
            AnalyticsProvider::Umami => self.umami_analytics.as_ref().and_then(|c| c.src.as_deref()),
            AnalyticsProvider::Plausible => self
                .plausible_analytics
                .as_ref()
                .and_then(|c| c.src.as_deref()),
            _ => None,
        };
        Some(src.unwrap_or(provider.default_src()))
    }

    /// Origin (`scheme://host[:port]`) that must be allowed by the content
    /// security policy for `provider`'s script to load.
    pub fn script_origin(&self, provider: AnalyticsProvider) -> Option<String> {
        let src = self.script_src(provider)?;
        let parsed = url::Url::parse(src).ok()?;
        Some(parsed.origin().ascii_serialization())
    }

    /// Deduplicated script origins of all enabled providers.
    pub fn script_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = self
            .enabled()
            .into_iter()
            .filter_map(|provider| self.script_origin(provider))
            .collect();
        origins.sort();
        origins.dedup();
        origins
    }

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        for provider in self.enabled() {
            if !self.is_configured(provider)
                && let Some(field) = provider.credential_field()
            {
                diag.warn_with_hint(
                    field,
                    format!("{provider} is enabled but not fully configured"),
                    "set the value or its environment variable, or remove the provider",
                );
            }
        }

        if let Some(src) = self.umami_analytics.as_ref().and_then(|c| c.src.as_deref()) {
            check_url(src, UmamiConfig::SRC, diag);
        }
        if let Some(src) = self
            .plausible_analytics
            .as_ref()
            .and_then(|c| c.src.as_deref())
        {
            check_url(src, PlausibleConfig::SRC, diag);
        }
    }
}

// ============================================================================
// validation
// ============================================================================

impl SiteMetadata {
    /// Validate the resolved record.
    ///
    /// Collects every problem at once. Errors make the record unusable for a
    /// build; warnings (e.g. an analytics ID whose env var is unset) do not.
    /// Asset paths are checked before the base path is joined, see
    /// [`SiteInfoConfig::validate`].
    pub fn validate(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        check_non_empty(&self.title, SiteInfoConfig::TITLE, &mut diag);
        check_non_empty(&self.author, SiteInfoConfig::AUTHOR, &mut diag);
        check_non_empty(&self.header_title, SiteInfoConfig::HEADER_TITLE, &mut diag);
        check_non_empty(&self.description, SiteInfoConfig::DESCRIPTION, &mut diag);

        check_language_tag(&self.language, SiteInfoConfig::LANGUAGE, &mut diag);
        check_language_tag(&self.locale, SiteInfoConfig::LOCALE, &mut diag);

        check_url(&self.site_url, SiteInfoConfig::SITE_URL, &mut diag);
        check_url(&self.site_repo, SiteInfoConfig::SITE_REPO, &mut diag);

        check_url(&self.github, SocialConfig::GITHUB, &mut diag);
        check_url(&self.linkedin, SocialConfig::LINKEDIN, &mut diag);
        check_url(&self.mastodon, SocialConfig::MASTODON, &mut diag);
        check_email(&self.email, SocialConfig::EMAIL, &mut diag);

        self.analytics.validate(&mut diag);

        diag
    }

    /// Pretty JSON export for the build pipeline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// tests
// ============================================================================
