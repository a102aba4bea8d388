//! Random fun fact with a button to draw another.

use crate::actions;
use crate::ids;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn FunFact() -> Element {
    let state = use_context::<AppState>();
    let fact = (state.fact)();

    rsx! {
        div {
            style: "margin: 8px 0;",
            button {
                onclick: move |_| actions::show_random_fact(state),
                "Click me for a fun fact!"
            }
            div {
                id: ids::FACT_CONTAINER,
                style: "margin-top: 8px; font-style: italic;",
                "{fact}"
            }
        }
    }
}
