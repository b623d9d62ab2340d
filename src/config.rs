//! Project configuration loader describing the build output layout and tag content.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::SiteLayout;

const DEFAULT_CONFIG_FILE: &str = "postbuild.config.json";

/// Discoverable project configuration for the post-build tools.
///
/// Every field has a default reproducing the conventional `dx build` output and
/// the stock PWA tag block, so a configuration file only needs to list the
/// fields it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Conventional site root used when the CLI receives no positional path.
    pub output_dir: String,
    /// Directory name inside the site root holding the generated assets.
    pub assets_dir: String,
    /// File name of the application entry point HTML.
    pub index_html_file: String,
    /// Literal substring separating the stable base name from the content hash.
    pub hash_marker: String,
    /// Charset declaration tag the PWA block is anchored after.
    pub charset_marker: String,
    /// Browser chrome theme color for the injected tags.
    pub theme_color: String,
    /// Application title for the Apple web-app tag.
    pub app_title: String,
    /// Href of the web app manifest.
    pub manifest_href: String,
    /// Href of the Apple touch icon.
    pub touch_icon_href: String,
    /// Href of the registered service worker.
    pub service_worker_href: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            output_dir: "docs".into(),
            assets_dir: "assets".into(),
            index_html_file: "index.html".into(),
            hash_marker: "-dxh".into(),
            charset_marker: r#"<meta charset="UTF-8">"#.into(),
            theme_color: "#1a4a58".into(),
            app_title: "Netthinne".into(),
            manifest_href: "manifest.json".into(),
            touch_icon_href: "icons/icon-192.png".into(),
            service_worker_href: "./service-worker.js".into(),
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back
    /// to default values so the tools keep working in unconfigured projects.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Resolve configuration for a CLI invocation.
    ///
    /// An explicitly passed file must load; without one, discovery falls back
    /// to defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path).ok_or_else(|| {
                anyhow::anyhow!("failed to load configuration from {}", path.display())
            }),
            None => Ok(Self::discover(Path::new("."))),
        }
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> SiteLayout {
        SiteLayout {
            assets_dir: self.assets_dir,
            index_html_file: self.index_html_file,
            hash_marker: self.hash_marker,
            charset_marker: self.charset_marker,
            theme_color: self.theme_color,
            app_title: self.app_title,
            manifest_href: self.manifest_href,
            touch_icon_href: self.touch_icon_href,
            service_worker_href: self.service_worker_href,
        }
    }

    /// Borrowing conversion into a layout, cloning the underlying strings.
    pub fn to_layout(&self) -> SiteLayout {
        self.clone().into_layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.output_dir, "docs");
        assert_eq!(config.hash_marker, "-dxh");
        assert_eq!(config.charset_marker, r#"<meta charset="UTF-8">"#);
    }

    #[test]
    fn discover_reads_partial_overrides() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r##"{ "output_dir": "dist", "theme_color": "#000000" }"##,
        )
        .unwrap();

        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.output_dir, "dist");
        assert_eq!(config.theme_color, "#000000");
        assert_eq!(config.assets_dir, "assets");
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{not json").unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.app_title, "Netthinne");
    }
}
