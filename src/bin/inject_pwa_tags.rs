//! Injects PWA meta tags into the dx-generated index.html after build.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use pwa_dx_postbuild::{ProjectConfig, pwa};

#[derive(Parser)]
#[command(version, about = "Insert PWA meta tags into the generated index.html")]
struct Cli {
    /// HTML entry file (defaults to index.html inside the configured output dir).
    html_file: Option<PathBuf>,

    /// Path to a postbuild.config.json overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let config = match ProjectConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };
    let html_file = cli.html_file.unwrap_or_else(|| {
        PathBuf::from(&config.output_dir).join(&config.index_html_file)
    });
    let layout = config.into_layout();

    if let Err(err) = pwa::inject_into_file(&layout, &html_file) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }

    println!("PWA tags injected into {}", html_file.display());
}
