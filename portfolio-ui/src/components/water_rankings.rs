//! Bottled water rankings list.

use super::{ItemList, SectionHeader};
use crate::ids;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn WaterRankings() -> Element {
    let state = use_context::<AppState>();
    let rankings = state.rankings.read().clone();

    rsx! {
        div {
            style: "margin: 16px 0;",
            SectionHeader {
                title: "My Bottled Water Rankings".to_string(),
            }
            ItemList {
                id: ids::WATER_RANKING_CONTAINER.to_string(),
                items: rankings,
            }
        }
    }
}
