use std::collections::HashMap;

use crate::models::analytics::{AllocationSlice, LotSummary, PortfolioSummary};
use crate::models::investment::InvestmentLot;

/// Computes investment analytics: gain/loss, returns, allocation breakdown.
///
/// All values come from the prices stored on each lot; nothing is fetched.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a full portfolio summary.
    ///
    /// Computes:
    /// - Total invested (sum of cost bases) and total current value
    /// - Gain/loss and % return (overall and per lot)
    /// - Allocation percentages per lot and per asset type
    pub fn portfolio_summary(&self, lots: &[InvestmentLot]) -> PortfolioSummary {
        let total_invested: f64 = lots.iter().map(InvestmentLot::cost_basis).sum();
        let total_current_value: f64 = lots.iter().map(InvestmentLot::market_value).sum();

        // 1. Per-lot details
        let mut lot_summaries: Vec<LotSummary> = lots
            .iter()
            .map(|lot| {
                let invested = lot.cost_basis();
                let current_value = lot.market_value();
                let gain = current_value - invested;
                LotSummary {
                    lot_id: lot.id,
                    asset_name: lot.asset_name.clone(),
                    asset_type: lot.asset_type.clone(),
                    invested,
                    current_value,
                    gain,
                    return_pct: pct(gain, invested),
                    allocation_pct: pct(current_value, total_current_value),
                }
            })
            .collect();

        // Sort by allocation (largest first)
        lot_summaries.sort_by(|a, b| {
            b.allocation_pct
                .partial_cmp(&a.allocation_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // 2. Group by asset type
        let mut by_type: HashMap<&str, f64> = HashMap::new();
        for lot in lots {
            *by_type.entry(lot.asset_type.as_str()).or_insert(0.0) += lot.market_value();
        }
        let mut allocation: Vec<AllocationSlice> = by_type
            .into_iter()
            .map(|(asset_type, current_value)| AllocationSlice {
                asset_type: asset_type.to_string(),
                current_value,
                allocation_pct: pct(current_value, total_current_value),
            })
            .collect();
        allocation.sort_by(|a, b| {
            b.current_value
                .partial_cmp(&a.current_value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.asset_type.cmp(&b.asset_type))
        });

        // 3. Overall gain/loss
        let total_gain = total_current_value - total_invested;

        tracing::debug!(
            lots = lots.len(),
            total_invested,
            total_current_value,
            "summarized portfolio"
        );

        PortfolioSummary {
            lot_count: lots.len(),
            total_invested,
            total_current_value,
            total_gain,
            total_return_pct: pct(total_gain, total_invested),
            lots: lot_summaries,
            allocation,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

/// `part / whole × 100`, 0 when `whole` is not positive.
fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}
