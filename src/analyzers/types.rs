//! Data types used by the price aggregation.

use serde::Serialize;
use std::fmt;

/// Count and mean price for one difficulty label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyGroup {
    pub difficulty: String,
    pub count: usize,
    pub avg_price: f64,
}

impl fmt::Display for DifficultyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} sets, Average Price: ${:.2}",
            self.difficulty, self.count, self.avg_price
        )
    }
}

/// A price string that did not parse, and the product it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidPrice {
    pub product_id: String,
    pub price: String,
}

impl fmt::Display for InvalidPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: Invalid price '{}' for product ID {}. Skipping.",
            self.price, self.product_id
        )
    }
}

/// Per-difficulty statistics, in the order each difficulty was first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSummary {
    pub groups: Vec<DifficultyGroup>,
    pub skipped: Vec<InvalidPrice>,
}

impl PriceSummary {
    /// Number of prices that made it into a group.
    pub fn total_sets(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    pub fn group(&self, difficulty: &str) -> Option<&DifficultyGroup> {
        self.groups.iter().find(|g| g.difficulty == difficulty)
    }
}
