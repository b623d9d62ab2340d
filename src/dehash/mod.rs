//! Stabilisation of content-hashed `dx build` asset filenames.
//!
//! Split into focused submodules so filename recognition can be tested
//! independently of the filesystem work: `pattern` decides which names carry a
//! hash segment and what their stable form is, `rewrite` patches reference
//! documents and performs the renames.

mod pattern;
mod rewrite;

pub use pattern::{hashed_name_pattern, scan_hashed_assets, stable_name};
pub use rewrite::{apply_renames, dehash_site};
