//! Injection of PWA meta tags into the generated entry point HTML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::project::SiteLayout;

/// Render the tag block inserted after the charset declaration.
///
/// One tag per line, indented to sit inside `<head>` the way `dx build`
/// formats the rest of the document.
pub fn render_tag_block(layout: &SiteLayout) -> String {
    format!(
        concat!(
            "    <meta name=\"theme-color\" content=\"{theme}\">\n",
            "    <meta name=\"apple-mobile-web-app-capable\" content=\"yes\">\n",
            "    <meta name=\"apple-mobile-web-app-status-bar-style\" content=\"black-translucent\">\n",
            "    <meta name=\"apple-mobile-web-app-title\" content=\"{title}\">\n",
            "    <link rel=\"manifest\" href=\"{manifest}\">\n",
            "    <link rel=\"apple-touch-icon\" href=\"{icon}\">\n",
            "    <script>if(\"serviceWorker\"in navigator)",
            "navigator.serviceWorker.register(\"{worker}\");</script>\n",
        ),
        theme = layout.theme_color,
        title = layout.app_title,
        manifest = layout.manifest_href,
        icon = layout.touch_icon_href,
        worker = layout.service_worker_href,
    )
}

/// Insert the PWA tag block immediately after the first charset declaration.
///
/// The rest of the document is returned byte-identical. A document without the
/// marker is an error: `dx build` always emits the charset tag, so its absence
/// means the wrong file was handed in.
pub fn inject_pwa_tags(html: &str, layout: &SiteLayout) -> Result<String> {
    let marker = layout.charset_marker.as_str();
    if !html.contains(marker) {
        return Err(anyhow!("marker {marker:?} not found"));
    }

    let block = render_tag_block(layout);
    Ok(html.replacen(marker, &format!("{marker}\n{block}"), 1))
}

/// Inject the PWA tag block into an HTML file in place.
///
/// The injection runs on the in-memory text first, so a missing marker leaves
/// the file unmodified.
pub fn inject_into_file(layout: &SiteLayout, path: &Path) -> Result<()> {
    let html =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let patched = inject_pwa_tags(&html, layout)
        .with_context(|| format!("cannot inject PWA tags into {}", path.display()))?;
    fs::write(path, patched).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::tempdir;

    fn layout() -> SiteLayout {
        ProjectConfig::default().into_layout()
    }

    #[test]
    fn inserts_block_after_first_marker_only() {
        let layout = layout();
        let html = concat!(
            "<html><head>\n",
            "    <meta charset=\"UTF-8\">\n",
            "    <title>app</title>\n",
            "    <meta charset=\"UTF-8\">\n",
            "</head><body></body></html>\n",
        );

        let patched = inject_pwa_tags(html, &layout).unwrap();

        let expected_anchor = format!(
            "    <meta charset=\"UTF-8\">\n{}",
            render_tag_block(&layout)
        );
        assert!(patched.starts_with("<html><head>\n"));
        assert!(patched.contains(&expected_anchor));
        assert_eq!(patched.matches("theme-color").count(), 1);

        // Everything apart from the single insertion is byte-identical.
        let restored = patched.replacen(&render_tag_block(&layout), "", 1);
        assert_eq!(restored, html);
    }

    #[test]
    fn renders_configured_tag_values() {
        let config = ProjectConfig {
            theme_color: "#222222".into(),
            app_title: "Example".into(),
            ..ProjectConfig::default()
        };
        let block = render_tag_block(&config.into_layout());
        assert!(block.contains("content=\"#222222\""));
        assert!(block.contains("content=\"Example\""));
        assert!(block.contains("navigator.serviceWorker.register(\"./service-worker.js\")"));
    }

    #[test]
    fn missing_marker_is_an_error() {
        let err = inject_pwa_tags("<html><head></head></html>", &layout()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn missing_marker_leaves_file_unmodified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<html><head></head></html>").unwrap();

        let err = inject_into_file(&layout(), &path).unwrap_err();
        assert!(err.to_string().contains("cannot inject PWA tags"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<html><head></head></html>"
        );
    }

    #[test]
    fn injects_into_file_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<head><meta charset=\"UTF-8\"></head>").unwrap();

        inject_into_file(&layout(), &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("rel=\"manifest\""));
        assert!(html.contains("apple-touch-icon"));
    }
}
