use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// Month-end projection for a single spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub category: String,

    /// Spend recorded so far in the current month
    pub spent_so_far: f64,

    /// Blended month-end projection
    pub projected_total: f64,

    /// Mean monthly spend over the trailing history window
    pub historical_average: f64,

    /// Monthly limit for the category (0 when none is set)
    pub budget_limit: f64,

    /// `projected_total / budget_limit × 100`, 0 when there is no limit
    pub percent_of_budget: f64,

    /// Projection exceeds a non-zero limit
    pub will_exceed: bool,

    /// Daily spend that keeps the category within its limit for the rest of the month
    pub suggested_daily_remaining: f64,
}

/// Aggregate row across all forecast categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ForecastTotals {
    pub spent_so_far: f64,
    pub projected_total: f64,
    pub historical_average: f64,
    pub budget_limit: f64,
    pub percent_of_budget: f64,
    pub will_exceed: bool,

    /// `budget_limit - projected_total` (negative when overspending)
    pub projected_savings: f64,

    pub suggested_daily_remaining: f64,
}

/// Forecast for the current, partially elapsed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetForecast {
    /// The month being forecast
    pub bucket: Bucket,

    /// Day of month the forecast was computed on
    pub days_elapsed: u32,

    pub days_in_month: u32,

    /// Categories sorted by projected total, largest first
    pub entries: Vec<ForecastEntry>,

    pub totals: ForecastTotals,
}
