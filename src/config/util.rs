//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/data/posts/  ← start
/// /home/user/blog/site.toml    ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // An absolute path is taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// field checks
// ============================================================================

/// Require a non-blank value.
pub fn check_non_empty(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) -> bool {
    if value.trim().is_empty() {
        diag.error(field, "must not be empty");
        return false;
    }
    true
}

/// Require an absolute http(s) URL with a host.
pub fn check_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !check_non_empty(value, field, diag) {
        return;
    }

    match url::Url::parse(value) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// Require a plausible `local@domain.tld` address.
pub fn check_email(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    static RE_EMAIL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

    if check_non_empty(value, field, diag) && !RE_EMAIL.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a valid email address"),
            "use format like name@example.com",
        );
    }
}

/// Require a BCP 47 style tag such as `en`, `en-us` or `zh-Hans-CN`.
pub fn check_language_tag(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    static RE_TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

    if check_non_empty(value, field, diag) && !RE_TAG.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{value}' is not a valid language tag"),
            "use format like en-US",
        );
    }
}

/// Require a site-absolute asset path (`/static/...`).
pub fn check_asset_path(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if check_non_empty(value, field, diag) && !value.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("asset path '{value}' must start with '/'"),
            format!("use \"/{value}\""),
        );
    }
}

// ============================================================================
// tests
// ============================================================================
