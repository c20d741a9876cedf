use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::investment::InvestmentLot;
use super::record::MonetaryRecord;

/// Snapshot of the caller's data the engine computes over.
///
/// Contains: income/expense records, investment lots, and the monthly budget
/// limit of each spending category. The engine never persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// All income/expense records, in any order
    pub records: Vec<MonetaryRecord>,

    /// All investment lots, in any order
    pub lots: Vec<InvestmentLot>,

    /// Monthly limit per expense category
    #[serde(default)]
    pub budgets: BTreeMap<String, f64>,
}

impl Ledger {
    /// Earliest date across records and lots.
    #[must_use]
    pub fn earliest_date(&self) -> Option<chrono::NaiveDate> {
        self.records
            .iter()
            .map(|r| r.occurred_on)
            .chain(self.lots.iter().map(|l| l.purchased_on))
            .min()
    }
}
