//! Data structures produced while stabilising hashed build assets.

use std::path::PathBuf;

/// A single planned rename from a hashed asset filename to its stable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRename {
    /// Filename as emitted by `dx build`, carrying the content-hash segment.
    pub hashed: String,
    /// Filename with the hash segment removed.
    pub stable: String,
}

impl AssetRename {
    /// Whether the renamed asset is a JavaScript loader whose own contents
    /// reference other hashed assets and therefore need patching too.
    pub fn is_script(&self) -> bool {
        self.stable.ends_with(".js")
    }
}

/// Result of a dehash run over one site root.
#[derive(Debug)]
pub enum DehashOutcome {
    /// No filename in the assets directory carried a hash segment; the
    /// filesystem was not touched.
    NoHashedAssets,
    /// Renames were planned and applied.
    Applied(DehashReport),
}

/// Record of the documents patched and files renamed during a dehash run.
#[derive(Debug, Default)]
pub struct DehashReport {
    /// Reference documents rewritten in place, in patch order.
    pub patched: Vec<PathBuf>,
    /// Renames performed, in the order they were applied.
    pub renamed: Vec<AssetRename>,
}
