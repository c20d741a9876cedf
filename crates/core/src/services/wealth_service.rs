use crate::models::aggregation::BucketAggregate;
use crate::models::bucket::Bucket;
use crate::models::investment::InvestmentLot;
use crate::models::wealth::{WealthPoint, WealthSeries, WealthStats};

/// Combines cumulative cash flow with investment value into a wealth curve.
///
/// Investment lots are valued at their *current* price in every bucket from
/// the month they were acquired onward. Historical prices are not
/// reconstructed, so past points read as "what those lots are worth today".
pub struct WealthService;

impl WealthService {
    pub fn new() -> Self {
        Self
    }

    /// Compose the wealth curve for a window of aggregates.
    ///
    /// For each bucket:
    /// 1. Advance cumulative savings by the bucket's net flow, seeded by
    ///    `carry_forward`, floored at zero
    /// 2. Sum the market value of lots acquired on or before the bucket's last day
    /// 3. Add both into total wealth
    ///
    /// Lots are pre-sorted by purchase month so each bucket only advances a
    /// cursor: O(buckets + lots log lots).
    pub fn compose_wealth(
        &self,
        aggregates: &[BucketAggregate],
        carry_forward: f64,
        lots: &[InvestmentLot],
    ) -> WealthSeries {
        let mut lot_months: Vec<(Bucket, f64)> = lots
            .iter()
            .map(|lot| (Bucket::of(lot.purchased_on), lot.market_value()))
            .collect();
        lot_months.sort_by(|a, b| a.0.cmp(&b.0));

        let mut cursor = 0;
        let mut investment_value = 0.0;
        let mut cumulative_savings = carry_forward;
        let mut points = Vec::with_capacity(aggregates.len());

        for aggregate in aggregates {
            // A negative cash position never eats into invested wealth
            cumulative_savings = (cumulative_savings + aggregate.net_flow()).max(0.0);

            while cursor < lot_months.len() && lot_months[cursor].0 <= aggregate.bucket {
                investment_value += lot_months[cursor].1;
                cursor += 1;
            }

            points.push(WealthPoint {
                bucket: aggregate.bucket,
                income: aggregate.income_total,
                expense: aggregate.expense_total,
                net_flow: aggregate.net_flow(),
                cumulative_savings,
                investment_value,
                total_wealth: cumulative_savings + investment_value,
            });
        }

        let stats = self.summarize(&points);

        tracing::debug!(
            points = points.len(),
            lots = lots.len(),
            current_value = stats.current_value,
            percent_change = stats.percent_change,
            "composed wealth series"
        );

        WealthSeries { points, stats }
    }

    /// Summary statistics over total wealth. An empty series yields zeros.
    pub fn summarize(&self, points: &[WealthPoint]) -> WealthStats {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return WealthStats {
                is_positive: true,
                ..WealthStats::default()
            };
        };

        let first_value = first.total_wealth;
        let current_value = last.total_wealth;
        let absolute_change = current_value - first_value;
        let percent_change = if first_value > 0.0 {
            (absolute_change / first_value) * 100.0
        } else {
            0.0
        };

        let values = points.iter().map(|p| p.total_wealth);
        let max_value = values.clone().fold(f64::NEG_INFINITY, f64::max);
        let min_value = values.clone().fold(f64::INFINITY, f64::min);
        let mean_value = values.sum::<f64>() / points.len() as f64;

        WealthStats {
            first_value,
            current_value,
            absolute_change,
            percent_change,
            max_value,
            min_value,
            mean_value,
            is_positive: percent_change >= 0.0,
        }
    }
}

impl Default for WealthService {
    fn default() -> Self {
        Self::new()
    }
}
