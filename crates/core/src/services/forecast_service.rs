use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::bucket::Bucket;
use crate::models::forecast::{BudgetForecast, ForecastEntry, ForecastTotals};
use crate::models::record::MonetaryRecord;
use crate::models::settings::ForecastPolicy;
use crate::services::aggregation_service::AggregationService;

/// Projects month-end spend per category for the current month.
///
/// The projection blends the current daily pace with the trailing monthly
/// average. Early in the month the pace is too noisy, so until
/// `min_days_for_pace` has passed the projection is the average alone.
pub struct ForecastService {
    aggregation_service: AggregationService,
    policy: ForecastPolicy,
}

impl ForecastService {
    pub fn new(policy: ForecastPolicy) -> Self {
        Self {
            aggregation_service: AggregationService::new(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &ForecastPolicy {
        &self.policy
    }

    /// Forecast the bucket containing `now`.
    ///
    /// - `current`: records of the current month (income is ignored)
    /// - `prior`: records of the trailing `history_months` complete months
    /// - `budgets`: monthly limit per category; missing means no limit
    ///
    /// Categories with no spend this month and no history are left out.
    /// Entries are sorted by projected total, largest first.
    pub fn forecast_budget(
        &self,
        current: &[MonetaryRecord],
        prior: &[MonetaryRecord],
        budgets: &BTreeMap<String, f64>,
        now: NaiveDate,
    ) -> BudgetForecast {
        let bucket = Bucket::of(now);
        let days_elapsed = now.day();
        let days_in_month = bucket.days_in_month();
        let days_remaining = days_in_month.saturating_sub(days_elapsed);

        let spent = self.aggregation_service.expenses_by_category(current);
        let history = self.aggregation_service.expenses_by_category(prior);

        let categories: BTreeSet<&String> = spent.keys().chain(history.keys()).collect();

        let mut entries: Vec<ForecastEntry> = Vec::new();
        for category in categories {
            let spent_so_far = spent.get(category).copied().unwrap_or(0.0);
            let historical_average = history.get(category).copied().unwrap_or(0.0)
                / f64::from(self.policy.history_months.max(1));

            if spent_so_far == 0.0 && historical_average == 0.0 {
                continue;
            }

            let projected_total =
                self.project(spent_so_far, historical_average, days_elapsed, days_in_month);
            let budget_limit = budgets.get(category).copied().unwrap_or(0.0);

            entries.push(ForecastEntry {
                category: category.clone(),
                spent_so_far,
                projected_total,
                historical_average,
                budget_limit,
                percent_of_budget: percent_of_budget(projected_total, budget_limit),
                will_exceed: budget_limit > 0.0 && projected_total > budget_limit,
                suggested_daily_remaining: suggested_daily(
                    spent_so_far,
                    budget_limit,
                    days_remaining,
                ),
            });
        }

        // Categories arrive alphabetical; the stable sort keeps that for ties
        entries.sort_by(|a, b| {
            b.projected_total
                .partial_cmp(&a.projected_total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let totals = self.totals(&entries, days_remaining);

        tracing::debug!(
            bucket = %bucket,
            days_elapsed,
            categories = entries.len(),
            projected = totals.projected_total,
            over_budget = entries.iter().filter(|e| e.will_exceed).count(),
            "forecast current month"
        );

        BudgetForecast {
            bucket,
            days_elapsed,
            days_in_month,
            entries,
            totals,
        }
    }

    /// Blended month-end projection for one category.
    pub fn project(
        &self,
        spent_so_far: f64,
        historical_average: f64,
        days_elapsed: u32,
        days_in_month: u32,
    ) -> f64 {
        let daily_rate = if days_elapsed == 0 {
            0.0
        } else {
            spent_so_far / f64::from(days_elapsed)
        };
        let projected_from_pace = daily_rate * f64::from(days_in_month);

        if days_elapsed > self.policy.min_days_for_pace {
            self.policy.pace_weight * projected_from_pace
                + self.policy.history_weight * historical_average
        } else {
            historical_average
        }
    }

    fn totals(&self, entries: &[ForecastEntry], days_remaining: u32) -> ForecastTotals {
        let spent_so_far: f64 = entries.iter().map(|e| e.spent_so_far).sum();
        let projected_total: f64 = entries.iter().map(|e| e.projected_total).sum();
        let historical_average: f64 = entries.iter().map(|e| e.historical_average).sum();
        let budget_limit: f64 = entries.iter().map(|e| e.budget_limit).sum();

        ForecastTotals {
            spent_so_far,
            projected_total,
            historical_average,
            budget_limit,
            percent_of_budget: percent_of_budget(projected_total, budget_limit),
            will_exceed: budget_limit > 0.0 && projected_total > budget_limit,
            projected_savings: budget_limit - projected_total,
            suggested_daily_remaining: suggested_daily(spent_so_far, budget_limit, days_remaining),
        }
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new(ForecastPolicy::default())
    }
}

fn percent_of_budget(projected: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        (projected / limit) * 100.0
    } else {
        0.0
    }
}

fn suggested_daily(spent: f64, limit: f64, days_remaining: u32) -> f64 {
    if limit > 0.0 && days_remaining > 0 {
        ((limit - spent) / f64::from(days_remaining)).max(0.0)
    } else {
        0.0
    }
}
