use crate::models::annuity::{
    AnnuityMode, AnnuityRequest, AnnuitySolution, GoalOutcome, ProjectionRow,
};

/// Most whole-year rows emitted in the yearly projection.
///
/// Longer terms are still solved exactly; only the table stops here.
pub const MAX_SERIES_YEARS: u32 = 1000;

/// Closed-form compound-interest engine for goal and contribution simulations.
///
/// Uses the future value of a lump sum plus a monthly annuity:
///
/// `FV = PV·(1+i)^n + PMT·((1+i)^n − 1)/i`, with `i = annual_rate / 12` and
/// `n = years × 12`.
///
/// A zero rate takes the linear branch (`PMT·n`), where the annuity factor
/// would otherwise be 0/0.
pub struct AnnuityService;

impl AnnuityService {
    pub fn new() -> Self {
        Self
    }

    /// Solve for the unknown of `request`.
    ///
    /// Returns `None` when the request cannot be evaluated: missing or
    /// non-positive term (or target, in goal mode), or non-finite inputs.
    /// The caller keeps its previous state in that case.
    pub fn solve_annuity(&self, request: &AnnuityRequest) -> Option<AnnuitySolution> {
        let solution = match *request {
            AnnuityRequest::Goal {
                initial_value,
                target,
                years,
                annual_rate,
            } => self.solve_for_contribution(initial_value, target, years, annual_rate),
            AnnuityRequest::Contribution {
                initial_value,
                monthly_contribution,
                years,
                annual_rate,
            } => self.solve_for_future_value(initial_value, monthly_contribution, years, annual_rate),
        };

        match &solution {
            Some(s) => tracing::debug!(
                mode = %s.mode,
                term_months = s.term_months,
                result = s.result,
                "solved annuity"
            ),
            None => tracing::warn!(mode = %request.mode(), "annuity request not solvable"),
        }

        solution
    }

    fn solve_for_contribution(
        &self,
        initial_value: f64,
        target: Option<f64>,
        years: Option<f64>,
        annual_rate: f64,
    ) -> Option<AnnuitySolution> {
        let years = valid_years(years)?;
        let target = target.filter(|t| t.is_finite() && *t > 0.0)?;
        if !initial_value.is_finite() || !annual_rate.is_finite() {
            return None;
        }

        let monthly_rate = annual_rate / 12.0;
        let term_months = years * 12.0;
        let value_of_initial = initial_value * growth_factor(monthly_rate, term_months);

        let (goal_outcome, monthly_contribution) = if value_of_initial >= target {
            let outcome = if initial_value >= target {
                GoalOutcome::AlreadyReached
            } else {
                GoalOutcome::ReachedByGrowth
            };
            (outcome, 0.0)
        } else {
            let factor = annuity_factor(monthly_rate, term_months);
            if !factor.is_finite() || factor <= 0.0 {
                return None;
            }
            let pmt = ((target - value_of_initial) / factor).max(0.0);
            (GoalOutcome::ContributionRequired, pmt)
        };

        Some(self.build_solution(
            AnnuityMode::SolveForContribution,
            initial_value,
            monthly_contribution,
            years,
            annual_rate,
            Some(goal_outcome),
        ))
    }

    fn solve_for_future_value(
        &self,
        initial_value: f64,
        monthly_contribution: f64,
        years: Option<f64>,
        annual_rate: f64,
    ) -> Option<AnnuitySolution> {
        let years = valid_years(years)?;
        if !initial_value.is_finite() || !monthly_contribution.is_finite() || !annual_rate.is_finite() {
            return None;
        }

        Some(self.build_solution(
            AnnuityMode::SolveForFutureValue,
            initial_value,
            monthly_contribution,
            years,
            annual_rate,
            None,
        ))
    }

    fn build_solution(
        &self,
        mode: AnnuityMode,
        initial_value: f64,
        monthly_contribution: f64,
        years: f64,
        annual_rate: f64,
        goal_outcome: Option<GoalOutcome>,
    ) -> AnnuitySolution {
        let monthly_rate = annual_rate / 12.0;
        let term_months = years * 12.0;
        let future_value = future_value(initial_value, monthly_contribution, monthly_rate, term_months);
        let total_contributed = initial_value + monthly_contribution * term_months;

        let result = match mode {
            AnnuityMode::SolveForContribution => monthly_contribution,
            AnnuityMode::SolveForFutureValue => future_value,
        };

        AnnuitySolution {
            mode,
            initial_value,
            annual_rate,
            term_months,
            monthly_contribution,
            future_value,
            result,
            total_contributed,
            earnings: future_value - total_contributed,
            goal_outcome,
            yearly_series: self.project_yearly(initial_value, monthly_contribution, years, annual_rate),
        }
    }

    /// Year-by-year projection for whole years `0..=years`, capped at
    /// [`MAX_SERIES_YEARS`] rows after year 0.
    ///
    /// Each row is an independent evaluation of the formula at `n = year × 12`,
    /// not a running recurrence.
    pub fn project_yearly(
        &self,
        initial_value: f64,
        monthly_contribution: f64,
        years: f64,
        annual_rate: f64,
    ) -> Vec<ProjectionRow> {
        let monthly_rate = annual_rate / 12.0;
        let whole_years = years.clamp(0.0, f64::from(MAX_SERIES_YEARS)).floor() as u32;

        (0..=whole_years)
            .map(|year| {
                let months = f64::from(year * 12);
                let total_value =
                    future_value(initial_value, monthly_contribution, monthly_rate, months);
                let total_contributed = initial_value + monthly_contribution * months;
                ProjectionRow {
                    year,
                    total_value,
                    total_contributed,
                    earnings: total_value - total_contributed,
                }
            })
            .collect()
    }
}

impl Default for AnnuityService {
    fn default() -> Self {
        Self::new()
    }
}

fn valid_years(years: Option<f64>) -> Option<f64> {
    years.filter(|y| y.is_finite() && *y > 0.0)
}

/// `(1+i)^n`
#[must_use]
pub fn growth_factor(monthly_rate: f64, months: f64) -> f64 {
    (1.0 + monthly_rate).powf(months)
}

/// `((1+i)^n − 1)/i`, or `n` at a zero rate.
#[must_use]
pub fn annuity_factor(monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        months
    } else {
        (growth_factor(monthly_rate, months) - 1.0) / monthly_rate
    }
}

/// Value after `months` of compounding `initial_value` and contributing
/// `monthly_contribution` at the end of each month.
#[must_use]
pub fn future_value(initial_value: f64, monthly_contribution: f64, monthly_rate: f64, months: f64) -> f64 {
    initial_value * growth_factor(monthly_rate, months)
        + monthly_contribution * annuity_factor(monthly_rate, months)
}
