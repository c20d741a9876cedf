use crate::models::accumulation::AccumulationPoint;
use crate::models::aggregation::CategoryShare;
use crate::models::annuity::AnnuitySolution;
use crate::models::comparison::{ComparisonEntry, MonthComparison};
use crate::models::export::ExportTable;
use crate::models::forecast::BudgetForecast;
use crate::models::wealth::WealthSeries;
use crate::services::comparison_service::TOTAL_ROW_LABEL;

/// Round a monetary value to cents. Only applied when leaving the engine.
#[must_use]
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0.00" in rendered output
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn money(value: f64) -> String {
    format!("{:.2}", round_currency(value))
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Flattens engine outputs into row tables for CSV/PDF sinks.
///
/// Money and percentages are rendered with two decimals.
pub struct ExportService {
    currency: String,
}

impl ExportService {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn wealth_table(&self, series: &WealthSeries) -> ExportTable {
        let rows = series
            .points
            .iter()
            .map(|p| {
                vec![
                    p.bucket.to_string(),
                    money(p.income),
                    money(p.expense),
                    money(p.net_flow),
                    money(p.cumulative_savings),
                    money(p.investment_value),
                    money(p.total_wealth),
                ]
            })
            .collect();

        ExportTable {
            title: format!("Wealth evolution ({})", self.currency),
            headers: headers(&[
                "Month",
                "Income",
                "Expense",
                "Net",
                "Savings",
                "Investments",
                "Total Wealth",
            ]),
            rows,
        }
    }

    pub fn category_table(&self, shares: &[CategoryShare]) -> ExportTable {
        ExportTable {
            title: format!("Expenses by category ({})", self.currency),
            headers: headers(&["Category", "Total", "Share %"]),
            rows: shares
                .iter()
                .map(|s| vec![s.category.clone(), money(s.total), money(s.share_pct)])
                .collect(),
        }
    }

    /// Forecast entries followed by a totals row.
    pub fn forecast_table(&self, forecast: &BudgetForecast) -> ExportTable {
        let mut rows: Vec<Vec<String>> = forecast
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.category.clone(),
                    money(e.spent_so_far),
                    money(e.projected_total),
                    money(e.historical_average),
                    money(e.budget_limit),
                    money(e.percent_of_budget),
                    yes_no(e.will_exceed),
                    money(e.suggested_daily_remaining),
                ]
            })
            .collect();

        let t = &forecast.totals;
        rows.push(vec![
            TOTAL_ROW_LABEL.to_string(),
            money(t.spent_so_far),
            money(t.projected_total),
            money(t.historical_average),
            money(t.budget_limit),
            money(t.percent_of_budget),
            yes_no(t.will_exceed),
            money(t.suggested_daily_remaining),
        ]);

        ExportTable {
            title: format!("Budget forecast {} ({})", forecast.bucket, self.currency),
            headers: headers(&[
                "Category",
                "Spent",
                "Projected",
                "Historical Average",
                "Budget",
                "% of Budget",
                "Will Exceed",
                "Daily Remaining",
            ]),
            rows,
        }
    }

    /// Comparison entries followed by the totals row.
    pub fn comparison_table(&self, comparison: &MonthComparison) -> ExportTable {
        let row = |e: &ComparisonEntry| {
            vec![
                e.category.clone(),
                money(e.current),
                money(e.previous),
                money(e.difference),
                money(e.percent_change),
            ]
        };

        let mut rows: Vec<Vec<String>> = comparison.entries.iter().map(row).collect();
        rows.push(row(&comparison.totals));

        ExportTable {
            title: format!("Month comparison ({})", self.currency),
            headers: headers(&["Category", "Current", "Previous", "Difference", "% Change"]),
            rows,
        }
    }

    pub fn accumulation_table(&self, points: &[AccumulationPoint]) -> ExportTable {
        ExportTable {
            title: format!("Investment accumulation ({})", self.currency),
            headers: headers(&["Month", "Invested", "Current Value", "Gain"]),
            rows: points
                .iter()
                .map(|p| {
                    vec![
                        p.bucket.to_string(),
                        money(p.invested),
                        money(p.current_value),
                        money(p.gain),
                    ]
                })
                .collect(),
        }
    }

    pub fn projection_table(&self, solution: &AnnuitySolution) -> ExportTable {
        ExportTable {
            title: format!("{} simulation ({})", solution.mode, self.currency),
            headers: headers(&["Year", "Total Value", "Total Contributed", "Earnings"]),
            rows: solution
                .yearly_series
                .iter()
                .map(|r| {
                    vec![
                        r.year.to_string(),
                        money(r.total_value),
                        money(r.total_contributed),
                        money(r.earnings),
                    ]
                })
                .collect(),
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new("USD")
    }
}
