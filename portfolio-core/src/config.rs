//! Site configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) gives a working same-origin setup.

use crate::api::Endpoints;
use crate::error::{PortfolioError, Result};
use crate::question::QuestionCount;
use crate::vote::{PieChartOptions, DEFAULT_CHART_FONT_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for every backend path. Empty means same origin.
    pub api_base: String,
    /// Options offered by the question count selector.
    pub question_count_options: Vec<u32>,
    /// Selector value on page load.
    pub default_question_count: u32,
    /// Font size of the vote pie chart.
    pub chart_font_size: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            question_count_options: vec![1, 5, 10, 25],
            default_question_count: 5,
            chart_font_size: DEFAULT_CHART_FONT_SIZE,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_question_count == 0 {
            return Err(PortfolioError::InvalidConfig(
                "default_question_count must be positive".to_string(),
            ));
        }
        if self.question_count_options.is_empty() {
            return Err(PortfolioError::InvalidConfig(
                "question_count_options must not be empty".to_string(),
            ));
        }
        if self.question_count_options.contains(&0) {
            return Err(PortfolioError::InvalidConfig(
                "question_count_options must all be positive".to_string(),
            ));
        }
        if self.chart_font_size == 0 {
            return Err(PortfolioError::InvalidConfig(
                "chart_font_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }

    pub fn default_count(&self) -> Result<QuestionCount> {
        QuestionCount::new(self.default_question_count)
    }

    /// Selector options, with the default count included if it is missing.
    pub fn count_options(&self) -> Vec<u32> {
        let mut options = self.question_count_options.clone();
        if !options.contains(&self.default_question_count) {
            options.push(self.default_question_count);
        }
        options.sort_unstable();
        options.dedup();
        options
    }

    pub fn chart_options(&self) -> PieChartOptions {
        PieChartOptions::full_bleed(self.chart_font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoints().dog_votes(), "/dog-data");
        assert_eq!(config.default_count().unwrap().get(), 5);
        assert_eq!(config.chart_options(), PieChartOptions::default());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            SiteConfig::from_json(r#"{"api_base": "https://example.com", "default_question_count": 3}"#)
                .unwrap();
        assert_eq!(config.api_base, "https://example.com");
        assert_eq!(config.default_question_count, 3);
        assert_eq!(config.question_count_options, vec![1, 5, 10, 25]);
        assert_eq!(config.count_options(), vec![1, 3, 5, 10, 25]);
        assert_eq!(
            config.endpoints().water_rankings(),
            "https://example.com/water-rankings"
        );
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"default_question_count": 0}"#),
            Err(PortfolioError::InvalidConfig(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"question_count_options": []}"#),
            Err(PortfolioError::InvalidConfig(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"question_count_options": [0, 5]}"#),
            Err(PortfolioError::InvalidConfig(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"api_base": 7}"#),
            Err(PortfolioError::Json(_))
        ));
    }
}
