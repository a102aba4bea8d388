//! Reusable Dioxus RSX components for the portfolio widgets.

mod chart_container;
mod dog_vote;
mod fun_fact;
mod item_list;
mod landmark_map;
mod question_count_selector;
mod questions_panel;
mod section_header;
mod water_rankings;

pub use chart_container::ChartContainer;
pub use dog_vote::DogVoteChart;
pub use fun_fact::FunFact;
pub use item_list::ItemList;
pub use landmark_map::LandmarkMap;
pub use question_count_selector::QuestionCountSelector;
pub use questions_panel::QuestionsPanel;
pub use section_header::SectionHeader;
pub use water_rankings::WaterRankings;
