#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod dehash;
pub mod models;
pub mod project;
pub mod pwa;

pub use config::ProjectConfig;
pub use dehash::dehash_site;
pub use models::{AssetRename, DehashOutcome, DehashReport};
pub use project::SiteLayout;
pub use pwa::inject_pwa_tags;
