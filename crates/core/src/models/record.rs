use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a cash-flow record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Money coming in (salary, refunds, ...)
    Income,
    /// Money going out, always tagged with a spending category
    Expense,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Income => write!(f, "Income"),
            RecordKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single dated income or expense transaction.
///
/// Records are owned by the external transaction store; the engine only
/// reads snapshots of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Income or Expense
    pub kind: RecordKind,

    /// Spending category (e.g., "Food", "Housing"). Only meaningful for expenses.
    pub category: String,

    /// Non-negative amount in the display currency
    pub amount: f64,

    /// Date of the transaction (daily granularity)
    pub occurred_on: NaiveDate,

    /// Optional free-text description (e.g., "Rent", "Groceries")
    #[serde(default)]
    pub description: Option<String>,
}

impl MonetaryRecord {
    pub fn new(
        kind: RecordKind,
        category: impl Into<String>,
        amount: f64,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            category: category.into(),
            amount,
            occurred_on,
            description: None,
        }
    }

    pub fn income(category: impl Into<String>, amount: f64, occurred_on: NaiveDate) -> Self {
        Self::new(RecordKind::Income, category, amount, occurred_on)
    }

    pub fn expense(category: impl Into<String>, amount: f64, occurred_on: NaiveDate) -> Self {
        Self::new(RecordKind::Expense, category, amount, occurred_on)
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// Amount with sign applied: positive for income, negative for expense.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }
}
