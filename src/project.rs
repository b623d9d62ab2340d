//! Description of the `dx build` output layout the post-build tools operate on.

/// Owned description of the build-output filesystem layout and PWA tag content.
///
/// Values usually come from [`crate::ProjectConfig`]; the defaults match the
/// conventional `dx build` output for a GitHub Pages deployment.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// Directory name inside the site root that holds the generated assets.
    pub assets_dir: String,
    /// File name of the application entry point HTML at the site root.
    pub index_html_file: String,
    /// Literal substring that separates the stable base name from the content hash.
    pub hash_marker: String,
    /// Charset declaration tag the PWA block is anchored after.
    pub charset_marker: String,
    /// Browser chrome theme color written into the injected tags.
    pub theme_color: String,
    /// Application title used for the Apple web-app tag.
    pub app_title: String,
    /// Href of the web app manifest.
    pub manifest_href: String,
    /// Href of the Apple touch icon.
    pub touch_icon_href: String,
    /// Href of the service worker registered by the injected script tag.
    pub service_worker_href: String,
}
