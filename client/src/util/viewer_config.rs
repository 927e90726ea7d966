//! Viewer configuration embedded in the host page.
//!
//! The page may carry a `<script id="viewer-config" type="application/json">`
//! element overriding any [`ViewerConfig`] field (for example a self-hosted
//! font URL). A missing element yields the defaults; a malformed one is logged
//! and also yields the defaults.

#[cfg(test)]
#[path = "viewer_config_test.rs"]
mod viewer_config_test;

use scene::config::ViewerConfig;

/// DOM id of the embedded configuration element.
pub const VIEWER_CONFIG_ELEMENT_ID: &str = "viewer-config";

#[cfg(any(test, feature = "csr"))]
fn parse_embedded(raw: Option<&str>) -> Result<ViewerConfig, serde_json::Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(ViewerConfig::default()),
        Some(text) => ViewerConfig::from_json(text),
    }
}

/// Configuration for this page load.
pub fn load_viewer_config() -> ViewerConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(VIEWER_CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match parse_embedded(raw.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("viewer config: ignoring malformed #{VIEWER_CONFIG_ELEMENT_ID}: {e}");
                ViewerConfig::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ViewerConfig::default()
    }
}
