//! Visitor questions: list, count selector, input, submit and delete.

use super::{ItemList, QuestionCountSelector, SectionHeader};
use crate::actions;
use crate::ids;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn QuestionsPanel() -> Element {
    let state = use_context::<AppState>();
    let questions = state.questions.read().clone();
    let input = (state.question_input)();
    let submit_display = if (state.submit_visible)() { "inline-block" } else { "none" };

    rsx! {
        div {
            style: "margin: 16px 0;",
            SectionHeader {
                title: "Ask Me Anything".to_string(),
                subtitle: "Questions from visitors, newest first.".to_string(),
            }
            QuestionCountSelector {}
            ItemList {
                id: ids::QUESTIONS_CONTAINER.to_string(),
                items: questions,
            }
            div {
                style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
                input {
                    id: ids::QUESTION_INPUT,
                    r#type: "text",
                    placeholder: "Ask me a question",
                    value: "{input}",
                    oninput: move |evt: Event<FormData>| actions::set_question_input(state, evt.value()),
                }
                button {
                    id: ids::QUESTION_SUBMIT_BUTTON,
                    style: "display: {submit_display};",
                    onclick: move |_| actions::spawn_logged("submit_question", actions::submit_question(state)),
                    "Submit"
                }
                button {
                    onclick: move |_| actions::spawn_logged("delete_all_questions", actions::delete_all_questions(state)),
                    "Delete all questions"
                }
            }
        }
    }
}
