use serde::{Deserialize, Serialize};

/// Which unknown the solver computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnuityMode {
    /// Goal mode: monthly contribution needed to reach a target
    SolveForContribution,
    /// Contribution mode: future value of a fixed monthly contribution
    SolveForFutureValue,
}

impl std::fmt::Display for AnnuityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnuityMode::SolveForContribution => write!(f, "Goal"),
            AnnuityMode::SolveForFutureValue => write!(f, "Contribution"),
        }
    }
}

/// Parameters for a compound-interest simulation.
///
/// `annual_rate` is a nominal annual rate expressed as a fraction
/// (`0.10` = 10% a year), compounded monthly. `years` and `target` are
/// optional so an incomplete form can be passed through as-is; the solver
/// returns `None` for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnuityRequest {
    /// Find the monthly contribution that reaches `target`.
    Goal {
        initial_value: f64,
        target: Option<f64>,
        years: Option<f64>,
        annual_rate: f64,
    },
    /// Find the value reached by contributing `monthly_contribution`.
    Contribution {
        initial_value: f64,
        monthly_contribution: f64,
        years: Option<f64>,
        annual_rate: f64,
    },
}

impl AnnuityRequest {
    #[must_use]
    pub fn mode(&self) -> AnnuityMode {
        match self {
            AnnuityRequest::Goal { .. } => AnnuityMode::SolveForContribution,
            AnnuityRequest::Contribution { .. } => AnnuityMode::SolveForFutureValue,
        }
    }
}

/// How a goal-mode target is reached.
///
/// Keeps "nothing left to contribute" cases apart from a computed
/// contribution, so the caller can word its message correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalOutcome {
    /// The initial value already meets the target today.
    AlreadyReached,
    /// Compounding the initial value alone reaches the target by the end of the term.
    ReachedByGrowth,
    /// A positive monthly contribution is required.
    ContributionRequired,
}

/// One row of the year-by-year projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Whole years elapsed (0 = start)
    pub year: u32,

    /// Portfolio value after `year × 12` months
    pub total_value: f64,

    /// Initial value plus contributions made so far
    pub total_contributed: f64,

    /// `total_value - total_contributed`
    pub earnings: f64,
}

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuitySolution {
    pub mode: AnnuityMode,
    pub initial_value: f64,

    /// Nominal annual rate as a fraction
    pub annual_rate: f64,

    /// `years × 12`
    pub term_months: f64,

    /// Given (contribution mode) or solved (goal mode) monthly contribution
    pub monthly_contribution: f64,

    /// Value at the end of the term
    pub future_value: f64,

    /// The solved unknown: monthly contribution in goal mode, future value in
    /// contribution mode
    pub result: f64,

    /// `initial_value + monthly_contribution × term_months`
    pub total_contributed: f64,

    /// `future_value - total_contributed`
    pub earnings: f64,

    /// Set in goal mode only
    pub goal_outcome: Option<GoalOutcome>,

    /// One row per whole year, year 0 included
    pub yearly_series: Vec<ProjectionRow>,
}
