//! Strips content hashes from `dx build` asset filenames and patches all references.
//!
//! Stable filenames let the service worker overwrite cached assets on each
//! deploy instead of accumulating stale copies in the cache.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pwa_dx_postbuild::{DehashOutcome, ProjectConfig, dehash_site};

#[derive(Parser)]
#[command(version, about = "Rename hashed dx build assets to stable names")]
struct Cli {
    /// Site root produced by `dx build` (defaults to the configured output dir).
    site_root: Option<PathBuf>,

    /// Path to a postbuild.config.json overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ProjectConfig::resolve(cli.config.as_deref())?;
    let site_root = cli
        .site_root
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));
    let layout = config.into_layout();

    match dehash_site(&layout, &site_root)? {
        DehashOutcome::NoHashedAssets => println!("No hashed assets found."),
        DehashOutcome::Applied(report) => {
            for path in &report.patched {
                println!("Patched: {}", path.display());
            }
            for rename in &report.renamed {
                println!("Renamed: {} -> {}", rename.hashed, rename.stable);
            }
        }
    }

    Ok(())
}
