//! Selector for how many questions to show.

use crate::actions;
use crate::ids;
use crate::state::AppState;
use dioxus::prelude::*;

/// Dropdown bound to `question_count`. Changing it reloads the questions.
#[component]
pub fn QuestionCountSelector() -> Element {
    let state = use_context::<AppState>();
    let options = state.config.read().count_options();
    let current = (state.question_count)().get();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        match actions::set_question_count(state, &value) {
            Ok(()) => actions::spawn_logged("load_questions", actions::load_questions(state)),
            Err(e) => log::error!("Ignoring question count {:?}: {}", value, e),
        }
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Show: "
            select {
                id: ids::QUESTIONS_SHOWN_SELECTOR,
                onchange: on_change,
                for count in options {
                    option {
                        value: "{count}",
                        selected: count == current,
                        "{count}"
                    }
                }
            }
            " questions"
        }
    }
}
