//! Map of favorite landmarks.

use super::SectionHeader;
use crate::ids;
use crate::maps;
use dioxus::prelude::*;

#[component]
pub fn LandmarkMap() -> Element {
    // Runs once, after the container is in the DOM.
    use_effect(move || {
        if let Err(e) = maps::init_map(ids::MAP) {
            log::error!("Failed to initialize landmark map: {}", e);
        }
    });

    rsx! {
        div {
            style: "margin: 16px 0;",
            SectionHeader {
                title: "Some Places I Like".to_string(),
                subtitle: "Click a marker to read about it.".to_string(),
            }
            div {
                id: ids::MAP,
                style: "width: 100%; height: 400px; border: 1px solid #e0e0e0;",
            }
        }
    }
}
