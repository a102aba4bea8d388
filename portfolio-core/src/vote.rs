use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Default font size for the vote pie chart.
pub const DEFAULT_CHART_FONT_SIZE: u32 = 16;

/// The two dogs a visitor can vote for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Dog {
    Teddy,
    Zoe,
}

impl Dog {
    /// Both candidates, in chart order.
    pub const ALL: [Dog; 2] = [Dog::Teddy, Dog::Zoe];

    /// Name used in the `dog` query parameter.
    pub fn wire_name(self) -> &'static str {
        match self {
            Dog::Teddy => "teddy",
            Dog::Zoe => "zoe",
        }
    }

    /// Label shown in the chart legend and on the vote buttons.
    pub fn label(self) -> &'static str {
        match self {
            Dog::Teddy => "Teddy",
            Dog::Zoe => "Zoe",
        }
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Dog {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teddy" => Ok(Dog::Teddy),
            "zoe" => Ok(Dog::Zoe),
            _ => Err(PortfolioError::UnknownDog(s.to_string())),
        }
    }
}

/// One entry of the `/dog-data` response. The endpoint has served both
/// numeric strings and plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(u64),
    Text(String),
}

impl RawCount {
    fn into_count(self) -> Result<u64> {
        match self {
            RawCount::Number(n) => Ok(n),
            RawCount::Text(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| PortfolioError::InvalidVoteCount(s)),
        }
    }
}

/// Vote counts for both dogs.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct VoteTally {
    pub teddy: u64,
    pub zoe: u64,
}

impl VoteTally {
    pub fn new(teddy: u64, zoe: u64) -> Self {
        Self { teddy, zoe }
    }

    /// Parse the `/dog-data` response body: `[teddyCount, zoeCount]`.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: Vec<RawCount> = match serde_json::from_str(body) {
            Ok(raw) => raw,
            Err(e) if e.is_data() => {
                // Valid JSON of the wrong shape, e.g. a negative or fractional count.
                return Err(PortfolioError::InvalidVoteCount(body.trim().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if raw.len() != 2 {
            return Err(PortfolioError::TallyLength(raw.len()));
        }
        let mut counts = raw.into_iter().map(RawCount::into_count);
        let teddy = counts.next().unwrap_or(Ok(0))?;
        let zoe = counts.next().unwrap_or(Ok(0))?;
        Ok(Self { teddy, zoe })
    }

    pub fn count_for(&self, dog: Dog) -> u64 {
        match dog {
            Dog::Teddy => self.teddy,
            Dog::Zoe => self.zoe,
        }
    }

    /// Rows for `google.visualization.arrayToDataTable`, header first.
    pub fn chart_rows(&self) -> Value {
        let mut rows = vec![json!(["Dog", "Votes"])];
        rows.extend(
            Dog::ALL
                .iter()
                .map(|dog| json!([dog.label(), self.count_for(*dog)])),
        );
        Value::Array(rows)
    }
}

/// Chart area sizing for the pie chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ChartArea {
    pub width: String,
    pub height: String,
}

/// Fixed drawing options for the vote pie chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartOptions {
    pub title: String,
    pub chart_area: ChartArea,
    pub font_size: u32,
}

impl PieChartOptions {
    /// Untitled, full-bleed chart with the given font size.
    pub fn full_bleed(font_size: u32) -> Self {
        Self {
            title: String::new(),
            chart_area: ChartArea {
                width: "100%".to_string(),
                height: "100%".to_string(),
            },
            font_size,
        }
    }
}

impl Default for PieChartOptions {
    fn default() -> Self {
        Self::full_bleed(DEFAULT_CHART_FONT_SIZE)
    }
}

/// Whether the visitor can still vote during this page session.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum VoteState {
    #[default]
    Enabled,
    Disabled,
}

impl VoteState {
    /// Cast a vote. Returns `true` if the vote should be sent; once a vote is
    /// cast the state stays `Disabled` for the rest of the session.
    pub fn cast(&mut self) -> bool {
        match self {
            VoteState::Enabled => {
                *self = VoteState::Disabled;
                true
            }
            VoteState::Disabled => false,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == VoteState::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_from_numeric_strings() {
        let tally = VoteTally::from_json(r#"["3","5"]"#).unwrap();
        assert_eq!(tally, VoteTally::new(3, 5));
        assert_eq!(tally.count_for(Dog::Teddy), 3);
        assert_eq!(tally.count_for(Dog::Zoe), 5);
    }

    #[test]
    fn test_tally_from_numbers_with_trailing_newline() {
        let tally = VoteTally::from_json("[4,5]\n").unwrap();
        assert_eq!(tally, VoteTally::new(4, 5));
    }

    #[test]
    fn test_tally_rejects_bad_shapes() {
        assert!(matches!(
            VoteTally::from_json(r#"["3"]"#),
            Err(PortfolioError::TallyLength(1))
        ));
        assert!(matches!(
            VoteTally::from_json(r#"["3","5","7"]"#),
            Err(PortfolioError::TallyLength(3))
        ));
        assert!(matches!(
            VoteTally::from_json(r#"["three","5"]"#),
            Err(PortfolioError::InvalidVoteCount(_))
        ));
        assert!(matches!(
            VoteTally::from_json("[-1,5]"),
            Err(PortfolioError::InvalidVoteCount(_))
        ));
        assert!(matches!(
            VoteTally::from_json("<html>"),
            Err(PortfolioError::Json(_))
        ));
    }

    #[test]
    fn test_chart_rows() {
        let rows = VoteTally::new(3, 5).chart_rows();
        assert_eq!(rows, json!([["Dog", "Votes"], ["Teddy", 3], ["Zoe", 5]]));
    }

    #[test]
    fn test_pie_chart_options_json() {
        let options = serde_json::to_value(PieChartOptions::default()).unwrap();
        assert_eq!(
            options,
            json!({
                "title": "",
                "chartArea": { "width": "100%", "height": "100%" },
                "fontSize": 16,
            })
        );
    }

    #[test]
    fn test_dog_names() {
        assert_eq!("teddy".parse::<Dog>().unwrap(), Dog::Teddy);
        assert_eq!("Zoe".parse::<Dog>().unwrap(), Dog::Zoe);
        assert!("rex".parse::<Dog>().is_err());
        assert_eq!(Dog::Teddy.to_string(), "teddy");
        assert_eq!(Dog::Zoe.label(), "Zoe");
    }

    #[test]
    fn test_vote_state_is_terminal_after_one_vote() {
        let mut state = VoteState::default();
        assert!(state.is_enabled());
        assert!(state.cast());
        assert_eq!(state, VoteState::Disabled);
        assert!(!state.cast());
        assert!(!state.is_enabled());
    }
}
