pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    accumulation::AccumulationPoint,
    aggregation::{AggregatedWindow, CategoryShare},
    analytics::PortfolioSummary,
    annuity::{AnnuityRequest, AnnuitySolution},
    bucket::{Bucket, WindowLength},
    comparison::MonthComparison,
    export::ExportTable,
    forecast::BudgetForecast,
    investment::InvestmentLot,
    ledger::Ledger,
    record::MonetaryRecord,
    settings::Settings,
    wealth::WealthSeries,
};
use services::{
    accumulation_service::AccumulationService, aggregation_service::AggregationService,
    analytics_service::AnalyticsService, annuity_service::AnnuityService,
    comparison_service::ComparisonService, export_service::ExportService,
    forecast_service::ForecastService, wealth_service::WealthService,
};
use std::collections::BTreeMap;

use errors::CoreError;

/// Main entry point for the Finance Tracker core library.
///
/// Holds a snapshot of the caller's records, lots and budgets plus the engine
/// settings, and routes every computation to the matching service. Nothing
/// here reads the clock: each date-dependent call takes an explicit `now`.
#[must_use]
pub struct FinanceTracker {
    ledger: Ledger,
    settings: Settings,
    aggregation_service: AggregationService,
    wealth_service: WealthService,
    forecast_service: ForecastService,
    comparison_service: ComparisonService,
    accumulation_service: AccumulationService,
    annuity_service: AnnuityService,
    analytics_service: AnalyticsService,
    export_service: ExportService,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("records", &self.ledger.records.len())
            .field("lots", &self.ledger.lots.len())
            .field("budgets", &self.ledger.budgets.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl FinanceTracker {
    /// Create an empty tracker with validated settings.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(Ledger::default(), settings))
    }

    /// Create an empty tracker with default settings.
    pub fn with_defaults() -> Self {
        Self::build(Ledger::default(), Settings::default())
    }

    /// Create a tracker over an existing snapshot. The snapshot is validated.
    pub fn from_ledger(ledger: Ledger, settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        validate_records(&ledger.records)?;
        validate_lots(&ledger.lots)?;
        validate_budgets(&ledger.budgets)?;
        Ok(Self::build(ledger, settings))
    }

    // ── Snapshot ────────────────────────────────────────────────────

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace all income/expense records.
    /// Amounts must be finite and non-negative; nothing is replaced otherwise.
    pub fn set_records(&mut self, records: Vec<MonetaryRecord>) -> Result<(), CoreError> {
        validate_records(&records)?;
        self.ledger.records = records;
        Ok(())
    }

    /// Replace all investment lots.
    /// Quantities must be positive and prices non-negative.
    pub fn set_lots(&mut self, lots: Vec<InvestmentLot>) -> Result<(), CoreError> {
        validate_lots(&lots)?;
        self.ledger.lots = lots;
        Ok(())
    }

    /// Replace all category budgets.
    pub fn set_budgets(&mut self, budgets: BTreeMap<String, f64>) -> Result<(), CoreError> {
        validate_budgets(&budgets)?;
        self.ledger.budgets = budgets;
        Ok(())
    }

    /// Set or overwrite the monthly limit of one category.
    pub fn set_budget(&mut self, category: impl Into<String>, limit: f64) -> Result<(), CoreError> {
        let category = category.into();
        validate_amount(&format!("Budget for '{category}'"), limit)?;
        self.ledger.budgets.insert(category, limit);
        Ok(())
    }

    /// Remove a category budget. Returns `true` if one was set.
    pub fn remove_budget(&mut self, category: &str) -> bool {
        self.ledger.budgets.remove(category).is_some()
    }

    // ── Cash flow & wealth ──────────────────────────────────────────

    /// Aggregate records over the trailing window ending at the month of `now`.
    /// `None` uses the configured default window.
    pub fn aggregate(&self, now: NaiveDate, window: Option<WindowLength>) -> AggregatedWindow {
        let window_end = Bucket::of(now);
        let window_len = window
            .unwrap_or(self.settings.default_window)
            .resolve(self.ledger.earliest_date(), window_end);
        self.aggregation_service
            .aggregate(&self.ledger.records, window_end, window_len)
    }

    /// Wealth curve (savings + investments) over the trailing window.
    pub fn wealth_report(&self, now: NaiveDate, window: Option<WindowLength>) -> WealthSeries {
        let aggregated = self.aggregate(now, window);
        self.wealth_service.compose_wealth(
            &aggregated.buckets,
            aggregated.carry_forward,
            &self.ledger.lots,
        )
    }

    /// Expense totals per category over the trailing window.
    pub fn category_breakdown(
        &self,
        now: NaiveDate,
        window: Option<WindowLength>,
    ) -> Vec<CategoryShare> {
        let aggregated = self.aggregate(now, window);
        self.aggregation_service
            .category_breakdown(&aggregated.buckets)
    }

    // ── Budgets ─────────────────────────────────────────────────────

    /// Forecast month-end spend for the month containing `now`.
    pub fn forecast_budget(&self, now: NaiveDate) -> BudgetForecast {
        let bucket = Bucket::of(now);
        let history_months = i64::from(self.settings.forecast.history_months);

        let current = self
            .aggregation_service
            .records_between(&self.ledger.records, bucket, bucket);
        let prior = self.aggregation_service.records_between(
            &self.ledger.records,
            bucket.offset(-history_months),
            bucket.prev(),
        );

        self.forecast_service
            .forecast_budget(&current, &prior, &self.ledger.budgets, now)
    }

    /// Compare expenses of `reference` against the month before it.
    pub fn compare_months(&self, reference: Bucket) -> MonthComparison {
        let current = self
            .aggregation_service
            .records_between(&self.ledger.records, reference, reference);
        let previous_bucket = reference.prev();
        let previous = self.aggregation_service.records_between(
            &self.ledger.records,
            previous_bucket,
            previous_bucket,
        );
        self.comparison_service.compare_months(&current, &previous)
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Cumulative invested-vs-current-value curve, one point per purchase month.
    #[must_use]
    pub fn accumulate_investments(&self) -> Vec<AccumulationPoint> {
        self.accumulation_service
            .accumulate_investments(&self.ledger.lots)
    }

    /// Gain/loss, returns and allocation of all lots.
    #[must_use]
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.analytics_service.portfolio_summary(&self.ledger.lots)
    }

    // ── Simulation ──────────────────────────────────────────────────

    /// Run the compound-interest solver. `None` when the request is incomplete.
    #[must_use]
    pub fn solve_annuity(&self, request: &AnnuityRequest) -> Option<AnnuitySolution> {
        self.annuity_service.solve_annuity(request)
    }

    // ── Export ──────────────────────────────────────────────────────

    pub fn wealth_table(&self, now: NaiveDate, window: Option<WindowLength>) -> ExportTable {
        self.export_service
            .wealth_table(&self.wealth_report(now, window))
    }

    pub fn category_table(&self, now: NaiveDate, window: Option<WindowLength>) -> ExportTable {
        self.export_service
            .category_table(&self.category_breakdown(now, window))
    }

    pub fn forecast_table(&self, now: NaiveDate) -> ExportTable {
        self.export_service
            .forecast_table(&self.forecast_budget(now))
    }

    pub fn comparison_table(&self, reference: Bucket) -> ExportTable {
        self.export_service
            .comparison_table(&self.compare_months(reference))
    }

    pub fn accumulation_table(&self) -> ExportTable {
        self.export_service
            .accumulation_table(&self.accumulate_investments())
    }

    /// Year-by-year projection table, or `None` when the request is incomplete.
    pub fn projection_table(&self, request: &AnnuityRequest) -> Option<ExportTable> {
        self.solve_annuity(request)
            .map(|solution| self.export_service.projection_table(&solution))
    }

    /// Export the snapshot as JSON (unencrypted, for debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger, settings: Settings) -> Self {
        let forecast_service = ForecastService::new(settings.forecast.clone());
        let export_service = ExportService::new(settings.currency.clone());

        Self {
            ledger,
            settings,
            aggregation_service: AggregationService::new(),
            wealth_service: WealthService::new(),
            forecast_service,
            comparison_service: ComparisonService::new(),
            accumulation_service: AccumulationService::new(),
            annuity_service: AnnuityService::new(),
            analytics_service: AnalyticsService::new(),
            export_service,
        }
    }
}

fn validate_amount(what: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        tracing::warn!(value, "{what} rejected");
        return Err(CoreError::ValidationError(format!(
            "{what} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(())
}

fn validate_records(records: &[MonetaryRecord]) -> Result<(), CoreError> {
    for record in records {
        validate_amount(&format!("Amount of record {}", record.id), record.amount)?;
    }
    Ok(())
}

fn validate_lots(lots: &[InvestmentLot]) -> Result<(), CoreError> {
    for lot in lots {
        if !lot.quantity.is_finite() || lot.quantity <= 0.0 {
            tracing::warn!(lot = %lot.id, quantity = lot.quantity, "lot rejected");
            return Err(CoreError::ValidationError(format!(
                "Quantity of lot {} must be positive (got {})",
                lot.id, lot.quantity
            )));
        }
        validate_amount(&format!("Unit cost of lot {}", lot.id), lot.unit_cost)?;
        validate_amount(
            &format!("Current price of lot {}", lot.id),
            lot.unit_current_price,
        )?;
    }
    Ok(())
}

fn validate_budgets(budgets: &BTreeMap<String, f64>) -> Result<(), CoreError> {
    for (category, limit) in budgets {
        validate_amount(&format!("Budget for '{category}'"), *limit)?;
    }
    Ok(())
}
