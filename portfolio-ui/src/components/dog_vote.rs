//! Teddy vs. Zoe vote with a pie chart of the tally.

use super::{ChartContainer, SectionHeader};
use crate::actions;
use crate::ids;
use crate::state::AppState;
use dioxus::prelude::*;
use portfolio_core::vote::Dog;

#[component]
pub fn DogVoteChart() -> Element {
    let state = use_context::<AppState>();
    let has_tally = state.votes.read().is_some();
    let can_vote = (state.vote_state)().is_enabled();
    let vote_display = if can_vote { "flex" } else { "none" };

    rsx! {
        div {
            style: "margin: 16px 0;",
            SectionHeader {
                title: "Which Dog Is Cuter?".to_string(),
            }
            ChartContainer {
                id: ids::CHART_CONTAINER.to_string(),
                has_tally: has_tally,
            }
            div {
                style: "display: {vote_display}; gap: 12px; margin-top: 8px;",
                for (dog, dog_label) in Dog::ALL.map(|d| (d, d.label())) {
                    label {
                        key: "{dog}",
                        input {
                            r#type: "radio",
                            name: ids::DOG_VOTE,
                            value: dog.wire_name(),
                            onchange: move |_| actions::spawn_logged("vote_for", actions::vote_for(state, dog)),
                        }
                        " {dog_label}"
                    }
                }
            }
        }
    }
}
