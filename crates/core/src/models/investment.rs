use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single investment purchase (a "lot").
///
/// Prices are supplied by the caller: `unit_cost` is what was paid per unit,
/// `unit_current_price` is the latest known market price per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentLot {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable asset name (e.g., "PETR4", "Treasury 2029")
    pub asset_name: String,

    /// Free-form asset class (e.g., "Stocks", "REITs", "Fixed Income")
    pub asset_type: String,

    /// Units held, always positive
    pub quantity: f64,

    /// Price paid per unit
    pub unit_cost: f64,

    /// Current market price per unit
    pub unit_current_price: f64,

    /// Acquisition date
    pub purchased_on: NaiveDate,
}

impl InvestmentLot {
    pub fn new(
        asset_name: impl Into<String>,
        asset_type: impl Into<String>,
        quantity: f64,
        unit_cost: f64,
        unit_current_price: f64,
        purchased_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_name: asset_name.into(),
            asset_type: asset_type.into(),
            quantity,
            unit_cost,
            unit_current_price,
            purchased_on,
        }
    }

    /// Amount paid for the lot: `quantity × unit_cost`.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.unit_cost
    }

    /// Value at today's price: `quantity × unit_current_price`.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.quantity * self.unit_current_price
    }

    /// Unrealized gain (negative for a loss).
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.market_value() - self.cost_basis()
    }
}
