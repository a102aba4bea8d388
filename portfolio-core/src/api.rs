//! Backend endpoint paths and URL building.
//!
//! Every URL is built here so the browser and CLI clients agree on paths and
//! query encoding. User-entered text is always percent-encoded.

use crate::question::QuestionCount;
use crate::vote::Dog;

/// Ranked bottled water list (GET).
pub const WATER_RANKINGS_PATH: &str = "/water-rankings";
/// Visitor questions (GET with `count`, POST with `content`).
pub const QUESTIONS_PATH: &str = "/data";
/// Delete every stored question (POST).
pub const DELETE_QUESTIONS_PATH: &str = "/delete-data";
/// Dog vote tally (GET) and vote casting (POST with `dog`).
pub const DOG_VOTES_PATH: &str = "/dog-data";

/// URL builder for the backend endpoints, relative to a base prefix.
///
/// An empty base yields same-origin paths such as `/data?count=5`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Create a builder for the given base, e.g. `""` or `http://localhost:8080`.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn water_rankings(&self) -> String {
        self.url(WATER_RANKINGS_PATH)
    }

    pub fn questions(&self, count: QuestionCount) -> String {
        format!("{}?count={}", self.url(QUESTIONS_PATH), count.get())
    }

    pub fn submit_question(&self, content: &str) -> String {
        format!(
            "{}?content={}",
            self.url(QUESTIONS_PATH),
            urlencoding::encode(content)
        )
    }

    pub fn delete_questions(&self) -> String {
        self.url(DELETE_QUESTIONS_PATH)
    }

    pub fn dog_votes(&self) -> String {
        self.url(DOG_VOTES_PATH)
    }

    pub fn vote(&self, dog: Dog) -> String {
        format!("{}?dog={}", self.url(DOG_VOTES_PATH), dog.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_paths() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.water_rankings(), "/water-rankings");
        assert_eq!(endpoints.questions(QuestionCount::new(2).unwrap()), "/data?count=2");
        assert_eq!(endpoints.delete_questions(), "/delete-data");
        assert_eq!(endpoints.dog_votes(), "/dog-data");
        assert_eq!(endpoints.vote(Dog::Teddy), "/dog-data?dog=teddy");
        assert_eq!(endpoints.vote(Dog::Zoe), "/dog-data?dog=zoe");
    }

    #[test]
    fn test_base_prefix_drops_trailing_slash() {
        let endpoints = Endpoints::new("http://localhost:8080/");
        assert_eq!(endpoints, Endpoints::new("http://localhost:8080"));
        assert_eq!(
            endpoints.water_rankings(),
            "http://localhost:8080/water-rankings"
        );
    }

    #[test]
    fn test_submit_question_encodes_content() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.submit_question("hello"),
            "/data?content=hello"
        );
        assert_eq!(
            endpoints.submit_question("what's up?&count=99"),
            "/data?content=what%27s%20up%3F%26count%3D99"
        );
        assert_eq!(
            endpoints.submit_question("#1 café"),
            "/data?content=%231%20caf%C3%A9"
        );
    }
}
