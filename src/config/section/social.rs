//! `[social]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [social]
//! github = "https://github.com/lucasgray"
//! linkedin = "https://www.linkedin.com/in/lucas-gray-6169403/"
//! mastodon = "https://mastodon.gamedev.place/@lucasgray"
//! email = "lucas.e.gray@gmail.com"
//! ```

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};

/// Social profile links and contact address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub github: String,
    pub linkedin: String,
    pub mastodon: String,
    /// Contact email address.
    pub email: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            github: "https://github.com/lucasgray".into(),
            linkedin: "https://www.linkedin.com/in/lucas-gray-6169403/".into(),
            mastodon: "https://mastodon.gamedev.place/@lucasgray".into(),
            email: "lucas.e.gray@gmail.com".into(),
        }
    }
}

impl SocialConfig {
    pub const GITHUB: FieldPath = FieldPath::new("social.github");
    pub const LINKEDIN: FieldPath = FieldPath::new("social.linkedin");
    pub const MASTODON: FieldPath = FieldPath::new("social.mastodon");
    pub const EMAIL: FieldPath = FieldPath::new("social.email");
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.social.github, "https://github.com/lucasgray");
        assert_eq!(config.social.email, "lucas.e.gray@gmail.com");
    }

    #[test]
    fn test_override() {
        let config = test_parse_config("[social]\nemail = \"me@example.com\"");
        assert_eq!(config.social.email, "me@example.com");
        assert_eq!(config.social.mastodon, "https://mastodon.gamedev.place/@lucasgray");
    }
}
