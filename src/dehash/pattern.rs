//! Recognition of content-hashed asset filenames and their stable targets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::AssetRename;

/// Build the matcher for hashed asset filenames produced by `dx build`.
///
/// Only `.wasm` and `.js` names participate. CSS filenames are baked into the
/// WASM binary at compile time via `asset!()` macros and cannot be patched
/// after compilation, so they are deliberately left out.
pub fn hashed_name_pattern(hash_marker: &str) -> Regex {
    Regex::new(&format!(
        r"^(.+?){}[0-9a-fA-F]+(\.(wasm|js))$",
        regex::escape(hash_marker)
    ))
    .expect("invalid hashed-name regex")
}

/// Compute the stable filename for a hashed asset name, or `None` when the
/// name carries no hash segment or has a non-renameable extension.
pub fn stable_name(pattern: &Regex, hashed: &str) -> Option<String> {
    pattern
        .captures(hashed)
        .map(|caps| format!("{}{}", &caps[1], &caps[2]))
}

/// Scan the assets directory and build the rename plan for this run.
///
/// The plan is sorted by hashed name so output and patch order do not depend
/// on directory iteration order.
pub fn scan_hashed_assets(assets_dir: &Path, hash_marker: &str) -> Result<Vec<AssetRename>> {
    let pattern = hashed_name_pattern(hash_marker);
    let entries = fs::read_dir(assets_dir)
        .with_context(|| format!("failed to read assets directory {}", assets_dir.display()))?;

    let mut renames = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to list entry in {}", assets_dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(stable) = stable_name(&pattern, name) {
            renames.push(AssetRename {
                hashed: name.to_string(),
                stable,
            });
        }
    }

    renames.sort_by(|a, b| a.hashed.cmp(&b.hashed));
    Ok(renames)
}
