//! Portfolio site widgets
//!
//! Mounts every widget into `#portfolio-root` of the hosting page. Google
//! Charts and Google Maps are loaded by the page itself.
//!
//! On mount:
//! 1. Read the optional embedded `SiteConfig`.
//! 2. Show a random fun fact.
//! 3. Fetch the water rankings, the questions and the dog vote tally, each
//!    rendering as soon as its own response arrives.
//! 4. Build the landmark map once its container exists.

use dioxus::prelude::*;
use portfolio_ui::actions;
use portfolio_ui::components::{DogVoteChart, FunFact, LandmarkMap, QuestionsPanel, WaterRankings};
use portfolio_ui::config::load_site_config;
use portfolio_ui::js_bridge;
use portfolio_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("portfolio-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(load_site_config()));

    use_effect(move || {
        log::info!("Portfolio widgets mounted");
        js_bridge::init_charts();
        actions::show_random_fact(state);
        actions::spawn_logged("load_rankings", actions::load_rankings(state));
        actions::spawn_logged("load_questions", actions::on_page_load(state));
        actions::spawn_logged("load_votes", actions::load_votes(state));
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            FunFact {}
            WaterRankings {}
            QuestionsPanel {}
            LandmarkMap {}
            DogVoteChart {}
        }
    }
}
