//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `site`      | `[site]`        | Identity, theme, static assets       |
//! | `social`    | `[social]`      | Social links and contact email       |
//! | `analytics` | `[analytics.*]` | Analytics provider selection         |
//! | `theme`     | -               | `site.theme` literal                 |

pub mod analytics;
mod site;
mod social;
mod theme;

pub use analytics::{AnalyticsConfig, AnalyticsProvider};
pub use site::{BASE_PATH_ENV, SiteInfoConfig};
pub use social::SocialConfig;
pub use theme::Theme;
