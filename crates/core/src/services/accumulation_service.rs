use crate::models::accumulation::AccumulationPoint;
use crate::models::bucket::Bucket;
use crate::models::investment::InvestmentLot;

/// Builds the cumulative invested-vs-current-value curve from investment lots.
pub struct AccumulationService;

impl AccumulationService {
    pub fn new() -> Self {
        Self
    }

    /// Walk lots in purchase order, keeping running cost basis and market value.
    ///
    /// Emits one point per month with purchase activity; lots bought in the
    /// same month collapse into a single point holding the totals after all
    /// of them. No lots means an empty series.
    pub fn accumulate_investments(&self, lots: &[InvestmentLot]) -> Vec<AccumulationPoint> {
        let mut sorted: Vec<&InvestmentLot> = lots.iter().collect();
        // Stable: lots on the same date keep their input order
        sorted.sort_by_key(|lot| lot.purchased_on);

        let mut points: Vec<AccumulationPoint> = Vec::new();
        let mut invested = 0.0;
        let mut current_value = 0.0;

        for lot in sorted {
            invested += lot.cost_basis();
            current_value += lot.market_value();
            let bucket = Bucket::of(lot.purchased_on);

            let point = AccumulationPoint {
                bucket,
                invested,
                current_value,
                gain: current_value - invested,
            };

            match points.last_mut() {
                Some(last) if last.bucket == bucket => *last = point,
                _ => points.push(point),
            }
        }

        tracing::debug!(lots = lots.len(), points = points.len(), "accumulated investments");

        points
    }
}

impl Default for AccumulationService {
    fn default() -> Self {
        Self::new()
    }
}
