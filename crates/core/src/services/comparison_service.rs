use std::collections::BTreeSet;

use crate::models::comparison::{ComparisonEntry, MonthComparison};
use crate::models::record::MonetaryRecord;
use crate::services::aggregation_service::AggregationService;

/// Label of the totals row.
pub const TOTAL_ROW_LABEL: &str = "Total";

/// Diffs category spend between a month and the month before it.
pub struct ComparisonService {
    aggregation_service: AggregationService,
}

impl ComparisonService {
    pub fn new() -> Self {
        Self {
            aggregation_service: AggregationService::new(),
        }
    }

    /// Compare expenses of `current` against `previous`, category by category.
    ///
    /// Covers every category present in either month. Income records are ignored.
    pub fn compare_months(
        &self,
        current: &[MonetaryRecord],
        previous: &[MonetaryRecord],
    ) -> MonthComparison {
        let current_totals = self.aggregation_service.expenses_by_category(current);
        let previous_totals = self.aggregation_service.expenses_by_category(previous);

        let categories: BTreeSet<&String> =
            current_totals.keys().chain(previous_totals.keys()).collect();

        let mut entries: Vec<ComparisonEntry> = categories
            .into_iter()
            .map(|category| {
                compare(
                    category,
                    current_totals.get(category).copied().unwrap_or(0.0),
                    previous_totals.get(category).copied().unwrap_or(0.0),
                )
            })
            .collect();

        entries.sort_by(|a, b| {
            b.current
                .partial_cmp(&a.current)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let totals = compare(
            TOTAL_ROW_LABEL,
            entries.iter().map(|e| e.current).sum(),
            entries.iter().map(|e| e.previous).sum(),
        );

        tracing::debug!(
            categories = entries.len(),
            difference = totals.difference,
            "compared months"
        );

        MonthComparison { entries, totals }
    }
}

impl Default for ComparisonService {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(category: &str, current: f64, previous: f64) -> ComparisonEntry {
    let difference = current - previous;
    // A category with no prior spend counts as a full 100% increase
    let percent_change = if previous > 0.0 {
        (difference / previous) * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    };

    ComparisonEntry {
        category: category.to_string(),
        current,
        previous,
        difference,
        percent_change,
    }
}
