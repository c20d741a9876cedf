use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// Running invested-vs-current totals after all purchases in a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulationPoint {
    /// Month of purchase activity
    pub bucket: Bucket,

    /// Cumulative cost basis
    pub invested: f64,

    /// Cumulative mark-to-market value
    pub current_value: f64,

    /// `current_value - invested`
    pub gain: f64,
}
