use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of all investment lots at their current prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of lots included
    pub lot_count: usize,

    /// Sum of cost bases
    pub total_invested: f64,

    /// Sum of mark-to-market values
    pub total_current_value: f64,

    /// Absolute gain/loss: total_current_value - total_invested
    pub total_gain: f64,

    /// Percentage return: (total_gain / total_invested) * 100
    pub total_return_pct: f64,

    /// Per-lot breakdown, largest allocation first
    pub lots: Vec<LotSummary>,

    /// Allocation grouped by asset type, largest first
    pub allocation: Vec<AllocationSlice>,
}

/// Summary of a single lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotSummary {
    pub lot_id: Uuid,
    pub asset_name: String,
    pub asset_type: String,

    /// Cost basis (quantity × unit cost)
    pub invested: f64,

    /// Mark-to-market value (quantity × current price)
    pub current_value: f64,

    /// Absolute gain/loss for this lot
    pub gain: f64,

    /// Percentage return for this lot
    pub return_pct: f64,

    /// This lot's value / total portfolio value × 100
    pub allocation_pct: f64,
}

/// Share of the portfolio held in one asset type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub asset_type: String,
    pub current_value: f64,
    pub allocation_pct: f64,
}
