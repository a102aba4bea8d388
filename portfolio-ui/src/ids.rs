//! DOM element ids the page and the widgets agree on.

pub const FACT_CONTAINER: &str = "fact-container";
pub const WATER_RANKING_CONTAINER: &str = "water-ranking-container";
pub const QUESTIONS_CONTAINER: &str = "questions-container";
pub const QUESTIONS_SHOWN_SELECTOR: &str = "questions-shown-selector";
pub const QUESTION_INPUT: &str = "question-input";
pub const QUESTION_SUBMIT_BUTTON: &str = "question-submit-button";
pub const MAP: &str = "map";
pub const CHART_CONTAINER: &str = "chart-container";

/// `name` shared by the dog vote radio inputs.
pub const DOG_VOTE: &str = "dog-vote";

/// Optional `<script type="application/json">` holding a `SiteConfig`.
pub const SITE_CONFIG: &str = "portfolio-config";
