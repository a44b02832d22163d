//! Environment-backed settings.
//!
//! Some values differ per deployment (asset base path, analytics IDs that
//! should not be committed). A [`Setting`] is either a literal or a reference
//! to an environment variable, resolved once through an [`EnvSource`] when the
//! metadata record is built.
//!
//! ```toml
//! [site]
//! base_path = { env = "BASE_PATH" }
//!
//! [analytics.google]
//! analytics_id = "G-XXXXXXX"
//!
//! [analytics.umami]
//! website_id = { env = "NEXT_UMAMI_ID" }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of environment variables.
///
/// The process environment in production, an in-memory map in tests.
pub trait EnvSource {
    /// Look up `key`. `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for FxHashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// `{ env = "NAME" }` or `{ env = "NAME", default = "..." }`.
///
/// Strict about its keys: `Setting` is untagged, so a typo here would
/// otherwise be swallowed without reaching the unknown-field report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvRef {
    /// Variable name.
    pub env: String,
    /// Used when the variable is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// A config value that is either written literally or read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    Env(EnvRef),
    /// A plain string.
    Literal(String),
}

impl Setting {
    /// Reference an environment variable with no fallback.
    pub fn env(name: impl Into<String>) -> Self {
        Self::Env(EnvRef {
            env: name.into(),
            default: None,
        })
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Resolve to a concrete value.
    ///
    /// Unset and empty values both resolve to `None`: a missing credential is
    /// absent, never an empty placeholder.
    pub fn resolve(&self, env: &impl EnvSource) -> Option<String> {
        let value = match self {
            Self::Literal(value) => Some(value.clone()),
            Self::Env(EnvRef { env: name, default }) => env.var(name).or_else(|| default.clone()),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Name of the referenced environment variable, if any.
    pub fn env_name(&self) -> Option<&str> {
        match self {
            Self::Env(EnvRef { env, .. }) => Some(env),
            Self::Literal(_) => None,
        }
    }
}

impl From<&str> for Setting {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value:?}"),
            Self::Env(EnvRef { env, default: None }) => write!(f, "${env}"),
            Self::Env(EnvRef {
                env,
                default: Some(default),
            }) => write!(f, "${env} (default {default:?})"),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
