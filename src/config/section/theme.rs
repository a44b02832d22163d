//! Color theme selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default color theme rendered by the templates.
///
/// `system` follows the visitor's OS preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::System, Self::Dark, Self::Light];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        theme: Theme,
    }

    #[test]
    fn test_parse_all_literals() {
        for theme in Theme::ALL {
            let holder: Holder = toml::from_str(&format!("theme = \"{theme}\"")).unwrap();
            assert_eq!(holder.theme, theme);
        }
    }

    #[test]
    fn test_reject_unknown_literal() {
        assert!(toml::from_str::<Holder>("theme = \"sepia\"").is_err());
        assert!(toml::from_str::<Holder>("theme = \"Dark\"").is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
