use serde::{Deserialize, Serialize};

/// Category spend in a month versus the month before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub category: String,
    pub current: f64,
    pub previous: f64,

    /// `current - previous`
    pub difference: f64,

    /// Percent change relative to `previous`; 100 for a new category, 0 when both are 0
    pub percent_change: f64,
}

/// Month-over-month expense comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthComparison {
    /// Categories sorted by current spend, largest first
    pub entries: Vec<ComparisonEntry>,

    /// Totals row, category set to `"Total"`
    pub totals: ComparisonEntry,
}
