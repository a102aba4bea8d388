//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use portfolio_core::config::SiteConfig;
use portfolio_core::question::QuestionCount;
use portfolio_core::vote::{VoteState, VoteTally};
use dioxus::prelude::*;

/// Shared state for the portfolio widgets.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Site configuration (endpoint base, selector options)
    pub config: Signal<SiteConfig>,
    /// Text of the fact container
    pub fact: Signal<String>,
    /// Items of the water ranking list
    pub rankings: Signal<Vec<String>>,
    /// Items of the questions list
    pub questions: Signal<Vec<String>>,
    /// Value of the questions-shown selector
    pub question_count: Signal<QuestionCount>,
    /// Current text of the question input
    pub question_input: Signal<String>,
    /// Whether the question submit button is shown
    pub submit_visible: Signal<bool>,
    /// Last fetched dog vote tally
    pub votes: Signal<Option<VoteTally>>,
    /// Whether the dog vote control is still usable
    pub vote_state: Signal<VoteState>,
}

impl AppState {
    /// Create an AppState for the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let question_count = config.default_count().unwrap_or(QuestionCount::ONE);
        Self {
            config: Signal::new(config),
            fact: Signal::new(String::new()),
            rankings: Signal::new(Vec::new()),
            questions: Signal::new(Vec::new()),
            question_count: Signal::new(question_count),
            question_input: Signal::new(String::new()),
            submit_visible: Signal::new(false),
            votes: Signal::new(None),
            vote_state: Signal::new(VoteState::Enabled),
        }
    }
}
