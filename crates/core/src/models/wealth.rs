use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// One point of the wealth curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthPoint {
    pub bucket: Bucket,

    /// Income recorded in the bucket
    pub income: f64,

    /// Expenses recorded in the bucket
    pub expense: f64,

    /// `income - expense` for the bucket
    pub net_flow: f64,

    /// Running cash savings, never below zero
    pub cumulative_savings: f64,

    /// Mark-to-market value of lots acquired up to the end of the bucket
    pub investment_value: f64,

    /// `cumulative_savings + investment_value`
    pub total_wealth: f64,
}

/// Summary statistics over a wealth series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WealthStats {
    /// Total wealth at the first bucket
    pub first_value: f64,

    /// Total wealth at the last bucket
    pub current_value: f64,

    /// `current_value - first_value`
    pub absolute_change: f64,

    /// Percent change over the window (0 when `first_value` is 0)
    pub percent_change: f64,

    pub max_value: f64,
    pub min_value: f64,

    /// Arithmetic mean of total wealth
    pub mean_value: f64,

    /// `percent_change >= 0`
    pub is_positive: bool,
}

/// A composed wealth curve with its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthSeries {
    pub points: Vec<WealthPoint>,
    pub stats: WealthStats,
}
