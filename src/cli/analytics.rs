//! `analytics` command: provider status and the origins to allow-list.

use crate::config::{AnalyticsMetadata, AnalyticsProvider};
use owo_colors::OwoColorize;

/// Provider state as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProviderStatus {
    Disabled,
    /// Enabled but missing its credential.
    Incomplete,
    Ready,
}

fn status(analytics: &AnalyticsMetadata, provider: AnalyticsProvider) -> ProviderStatus {
    if !analytics.is_enabled(provider) {
        ProviderStatus::Disabled
    } else if analytics.is_configured(provider) {
        ProviderStatus::Ready
    } else {
        ProviderStatus::Incomplete
    }
}

/// One report line per provider.
fn report_lines(analytics: &AnalyticsMetadata) -> Vec<String> {
    AnalyticsProvider::ALL
        .into_iter()
        .map(|provider| {
            let label = format!("{:<18}", provider.label());
            match status(analytics, provider) {
                ProviderStatus::Disabled => format!("{} {}", label.dimmed(), "disabled".dimmed()),
                ProviderStatus::Incomplete => format!(
                    "{} {} {}",
                    label,
                    "not configured".yellow(),
                    analytics.script_origin(provider).unwrap_or_default()
                ),
                ProviderStatus::Ready => format!(
                    "{} {} {}",
                    label,
                    "enabled".green(),
                    analytics.script_origin(provider).unwrap_or_default()
                ),
            }
        })
        .collect()
}

/// Print provider status and the script origins the CSP must allow.
pub fn report_analytics(analytics: &AnalyticsMetadata) {
    for line in report_lines(analytics) {
        println!("{line}");
    }

    let origins = analytics.script_origins();
    if !origins.is_empty() {
        println!();
        println!("{} {}", "script-src:".bold(), origins.join(" "));
    }
}
