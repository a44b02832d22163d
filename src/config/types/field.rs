//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each config section exposes its paths as associated constants, so
/// diagnostics always name the key the user actually wrote.
///
/// # Example
///
/// ```ignore
/// impl SiteInfoConfig {
///     pub const SITE_URL: FieldPath = FieldPath::new("site.site_url");
/// }
///
/// diag.error(SiteInfoConfig::SITE_URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
