//! Loads the `SiteConfig` embedded in the hosting page, if any.

use crate::ids;
use portfolio_core::config::SiteConfig;

/// Read the JSON in `<script id="portfolio-config">`. Falls back to the
/// defaults when the element is absent or its content is invalid.
pub fn load_site_config() -> SiteConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ids::SITE_CONFIG))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => parse_or_default(&json),
        _ => {
            log::info!("No embedded site config, using defaults");
            SiteConfig::default()
        }
    }
}

fn parse_or_default(json: &str) -> SiteConfig {
    match SiteConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Ignoring embedded site config: {}", e);
            SiteConfig::default()
        }
    }
}
