//! Site metadata for a static blog.
//!
//! One typed, immutable record of the site's identity, social links, theme
//! and analytics providers, resolved once per process and handed to the
//! build pipeline.
//!
//! ```no_run
//! let metadata = sitemeta::load(&sitemeta::LoadOptions::default())?;
//! println!("{}", metadata.title);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{LoadOptions, SiteConfig, SiteMetadata, load};
