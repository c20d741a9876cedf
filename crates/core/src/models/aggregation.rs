use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::bucket::Bucket;

/// Income/expense totals for one month bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketAggregate {
    /// The month these totals cover
    pub bucket: Bucket,

    /// Sum of income records in the bucket
    pub income_total: f64,

    /// Sum of expense records in the bucket
    pub expense_total: f64,

    /// Expense totals by category (income has no categorical breakdown)
    pub per_category_expense: BTreeMap<String, f64>,
}

impl BucketAggregate {
    /// An empty bucket with zero totals.
    pub fn empty(bucket: Bucket) -> Self {
        Self {
            bucket,
            income_total: 0.0,
            expense_total: 0.0,
            per_category_expense: BTreeMap::new(),
        }
    }

    /// Income minus expense for this bucket.
    #[must_use]
    pub fn net_flow(&self) -> f64 {
        self.income_total - self.expense_total
    }
}

/// Result of aggregating a trailing window of buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedWindow {
    /// One aggregate per bucket, oldest first, including empty months
    pub buckets: Vec<BucketAggregate>,

    /// Net (income − expense) of every record dated before the first bucket
    pub carry_forward: f64,
}

impl AggregatedWindow {
    #[must_use]
    pub fn first_bucket(&self) -> Option<Bucket> {
        self.buckets.first().map(|b| b.bucket)
    }

    #[must_use]
    pub fn total_income(&self) -> f64 {
        self.buckets.iter().map(|b| b.income_total).sum()
    }

    #[must_use]
    pub fn total_expense(&self) -> f64 {
        self.buckets.iter().map(|b| b.expense_total).sum()
    }
}

/// A category's share of total expenses over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,

    /// Expense total for the category across the window
    pub total: f64,

    /// `total / window expense × 100`, 0 when the window has no expenses
    pub share_pct: f64,
}
