use crate::error::{PortfolioError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of questions requested from the backend. Always positive.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct QuestionCount(u32);

impl QuestionCount {
    pub const ONE: QuestionCount = QuestionCount(1);

    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(PortfolioError::InvalidQuestionCount(count.to_string()));
        }
        Ok(Self(count))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionCount {
    type Err = PortfolioError;

    /// Parse a selector value such as `"5"`.
    fn from_str(s: &str) -> Result<Self> {
        let count = s
            .trim()
            .parse::<u32>()
            .map_err(|_| PortfolioError::InvalidQuestionCount(s.to_string()))?;
        Self::new(count)
    }
}

/// The submit button is shown iff the input is not exactly empty.
/// Whitespace-only input still counts as a question.
pub fn submit_visible(input: &str) -> bool {
    !input.is_empty()
}

/// Take the pending question out of the input, leaving it empty.
///
/// Returns `None` when there is nothing to submit.
pub fn take_question(input: &mut String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(std::mem::take(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_visible() {
        assert!(!submit_visible(""));
        assert!(submit_visible("Why water?"));
        assert!(submit_visible(" "));
        assert!(submit_visible("\t\n"));
    }

    #[test]
    fn test_take_question_clears_input() {
        let mut input = "Favorite dog?".to_string();
        assert_eq!(take_question(&mut input).as_deref(), Some("Favorite dog?"));
        assert!(input.is_empty());
        assert!(!submit_visible(&input));
        assert_eq!(take_question(&mut input), None);
    }

    #[test]
    fn test_question_count_parse() {
        assert_eq!("5".parse::<QuestionCount>().unwrap().get(), 5);
        assert_eq!(" 10 ".parse::<QuestionCount>().unwrap().get(), 10);
        assert!("0".parse::<QuestionCount>().is_err());
        assert!("-3".parse::<QuestionCount>().is_err());
        assert!("all".parse::<QuestionCount>().is_err());
        assert!(QuestionCount::new(0).is_err());
    }
}
