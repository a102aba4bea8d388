//! Fetch-then-render operations behind each widget.
//!
//! Each operation issues at most one mutating request followed by one
//! refresh, in that order, with no retry. Errors are returned to the caller;
//! [`spawn_logged`] runs an operation on the Dioxus runtime and logs its
//! failure, which is all the handling any of them get.
//!
//! Signal reads use `peek()` so calling an operation from an effect does not
//! subscribe that effect to the values it reads.

use crate::http::{self, FetchError};
use crate::ids;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use portfolio_core::fact::pick_fact;
use portfolio_core::list::render_list;
use portfolio_core::question::{submit_visible, take_question, QuestionCount};
use portfolio_core::vote::Dog;
use portfolio_core::PortfolioError;
use std::future::Future;

/// Run `task` in the background and log it if it fails.
pub fn spawn_logged<F>(name: &'static str, task: F)
where
    F: Future<Output = Result<(), FetchError>> + 'static,
{
    spawn(async move {
        if let Err(e) = task.await {
            log::error!("{} failed: {}", name, e);
        }
    });
}

/// Replace the fact text with a randomly chosen fact.
pub fn show_random_fact(mut state: AppState) {
    state.fact.set(pick_fact(js_sys::Math::random()).to_string());
}

/// GET the water rankings and render them.
pub async fn load_rankings(mut state: AppState) -> Result<(), FetchError> {
    log::info!("Fetching water rankings.");
    let url = state.config.peek().endpoints().water_rankings();
    let rankings = http::get_string_list(&url).await?;
    render_list(&mut *state.rankings.write(), rankings);
    Ok(())
}

/// GET as many questions as the selector asks for and render them.
pub async fn load_questions(mut state: AppState) -> Result<(), FetchError> {
    log::info!("Fetching user questions.");
    let count = *state.question_count.peek();
    let url = state.config.peek().endpoints().questions(count);
    let questions = http::get_string_list(&url).await?;
    render_list(&mut *state.questions.write(), questions);
    Ok(())
}

/// Hide the submit button and load the questions once.
pub async fn on_page_load(mut state: AppState) -> Result<(), FetchError> {
    state.submit_visible.set(false);
    load_questions(state).await
}

/// Store a new selector value. The caller reloads the questions.
pub fn set_question_count(mut state: AppState, value: &str) -> Result<(), PortfolioError> {
    let count: QuestionCount = value.parse()?;
    state.question_count.set(count);
    Ok(())
}

/// Store the input text and update the submit button.
pub fn set_question_input(mut state: AppState, text: String) {
    state.question_input.set(text);
    update_submit_visibility(state);
}

/// Show the submit button iff the question input is not empty.
pub fn update_submit_visibility(mut state: AppState) {
    let visible = submit_visible(&state.question_input.peek());
    state.submit_visible.set(visible);
}

/// POST the pending question, then reload the questions.
///
/// The input is cleared and the button hidden before the request goes out.
pub async fn submit_question(mut state: AppState) -> Result<(), FetchError> {
    let Some(question) = take_question(&mut state.question_input.write()) else {
        return Ok(());
    };
    state.submit_visible.set(false);

    let url = state.config.peek().endpoints().submit_question(&question);
    http::post(&url).await?;
    load_questions(state).await
}

/// POST a delete of every stored question, then reload the questions.
pub async fn delete_all_questions(state: AppState) -> Result<(), FetchError> {
    let url = state.config.peek().endpoints().delete_questions();
    http::post(&url).await?;
    load_questions(state).await
}

/// GET the vote tally and draw the pie chart.
pub async fn load_votes(mut state: AppState) -> Result<(), FetchError> {
    let url = state.config.peek().endpoints().dog_votes();
    let tally = http::get_vote_tally(&url).await?;
    state.votes.set(Some(tally));

    let options = state.config.peek().chart_options();
    js_bridge::render_pie_chart(ids::CHART_CONTAINER, &tally.chart_rows(), &options);
    Ok(())
}

/// Cast the session's one vote, then refresh the chart.
pub async fn vote_for(mut state: AppState, dog: Dog) -> Result<(), FetchError> {
    if !state.vote_state.write().cast() {
        log::info!("Vote already cast this session, ignoring vote for {}", dog);
        return Ok(());
    }

    let url = state.config.peek().endpoints().vote(dog);
    http::post(&url).await?;
    load_votes(state).await
}
