//! Plain-text formatting for command output.

use portfolio_core::landmark::LANDMARKS;
use portfolio_core::vote::{Dog, VoteTally};

/// One `N. item` line per entry, or a placeholder for an empty list.
pub fn numbered_list(items: &[String]) -> String {
    if items.is_empty() {
        return "(none)\n".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, item))
        .collect()
}

pub fn tally(tally: &VoteTally) -> String {
    Dog::ALL
        .iter()
        .map(|dog| format!("{}: {}\n", dog.label(), tally.count_for(*dog)))
        .collect()
}

pub fn landmarks() -> String {
    LANDMARKS
        .iter()
        .map(|l| {
            format!(
                "{} ({:.4}, {:.4})\n    {}\n",
                l.title, l.position.lat, l.position.lng, l.description
            )
        })
        .collect()
}
