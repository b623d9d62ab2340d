//! Reference patching and renaming for hashed build assets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dehash::pattern::scan_hashed_assets;
use crate::models::{AssetRename, DehashOutcome, DehashReport};
use crate::project::SiteLayout;

/// Replace every literal occurrence of each hashed filename with its stable form.
///
/// Plain substring substitution, not regex: filenames are disjoint strings, so
/// replacement order does not matter and no escaping is needed.
pub fn apply_renames(text: &str, renames: &[AssetRename]) -> String {
    let mut text = text.to_string();
    for rename in renames {
        text = text.replace(&rename.hashed, &rename.stable);
    }
    text
}

/// Rewrite one reference document in place.
fn patch_document(path: &Path, renames: &[AssetRename]) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    fs::write(path, apply_renames(&text, renames))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Stabilise all hashed `.wasm` and `.js` assets under the given site root.
///
/// Every reference document is patched before any file is renamed, so an
/// interrupted run never leaves a document pointing at a filename that no
/// longer exists while the hashed original is still present. There is no
/// rollback beyond that ordering: a failed write aborts the run and leaves
/// partial state behind.
///
/// A rename whose stable target already exists silently overwrites it, which
/// is the desired behavior for repeated deploys into the same output tree.
pub fn dehash_site(layout: &SiteLayout, site_root: &Path) -> Result<DehashOutcome> {
    let assets_dir = site_root.join(&layout.assets_dir);
    let renames = scan_hashed_assets(&assets_dir, &layout.hash_marker)?;
    if renames.is_empty() {
        return Ok(DehashOutcome::NoHashedAssets);
    }

    let mut report = DehashReport::default();

    let index_path = site_root.join(&layout.index_html_file);
    patch_document(&index_path, &renames)?;
    report.patched.push(index_path);

    // JS loaders fetch the wasm module by its hashed name, so their bodies are
    // reference documents too. Patch them while they still sit under the old
    // name; the rename below moves the patched file.
    for rename in renames.iter().filter(|rename| rename.is_script()) {
        let script_path = assets_dir.join(&rename.hashed);
        patch_document(&script_path, &renames)?;
        report.patched.push(script_path);
    }

    for rename in &renames {
        let from = assets_dir.join(&rename.hashed);
        let to = assets_dir.join(&rename.stable);
        fs::rename(&from, &to).with_context(|| {
            format!("failed to rename {} -> {}", from.display(), to.display())
        })?;
        report.renamed.push(rename.clone());
    }

    Ok(DehashOutcome::Applied(report))
}
