use serde::{Deserialize, Serialize};

use super::bucket::WindowLength;
use crate::errors::CoreError;

/// Default weight of the current-month pace in the blended projection.
pub const DEFAULT_PACE_WEIGHT: f64 = 0.6;

/// Default weight of the historical average in the blended projection.
pub const DEFAULT_HISTORY_WEIGHT: f64 = 0.4;

/// Days of the month that must elapse before the current pace is trusted.
/// Up to and including this day the projection is the historical average alone.
pub const DEFAULT_MIN_DAYS_FOR_PACE: u32 = 7;

/// Complete prior months averaged into the historical baseline.
pub const DEFAULT_HISTORY_MONTHS: u32 = 3;

/// Policy constants of the budget forecast heuristic.
///
/// These are tuning knobs, not derived from data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastPolicy {
    /// Weight of `spent / days_elapsed × days_in_month`
    pub pace_weight: f64,

    /// Weight of the trailing monthly average
    pub history_weight: f64,

    /// Pace is blended in only when `days_elapsed > min_days_for_pace`
    pub min_days_for_pace: u32,

    /// Number of complete prior months in the average (also its divisor)
    pub history_months: u32,
}

impl Default for ForecastPolicy {
    fn default() -> Self {
        Self {
            pace_weight: DEFAULT_PACE_WEIGHT,
            history_weight: DEFAULT_HISTORY_WEIGHT,
            min_days_for_pace: DEFAULT_MIN_DAYS_FOR_PACE,
            history_months: DEFAULT_HISTORY_MONTHS,
        }
    }
}

impl ForecastPolicy {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, weight) in [("pace_weight", self.pace_weight), ("history_weight", self.history_weight)] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(CoreError::InvalidSettings(format!(
                    "{name} must be within [0, 1], got {weight}"
                )));
            }
        }
        if ((self.pace_weight + self.history_weight) - 1.0).abs() > 1e-9 {
            return Err(CoreError::InvalidSettings(format!(
                "pace_weight + history_weight must equal 1, got {}",
                self.pace_weight + self.history_weight
            )));
        }
        if self.history_months == 0 {
            return Err(CoreError::InvalidSettings(
                "history_months must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display currency code used in export titles (e.g., "BRL", "USD").
    pub currency: String,

    /// Window used when a caller does not pick one.
    pub default_window: WindowLength,

    /// Budget forecast heuristic constants.
    pub forecast: ForecastPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            default_window: WindowLength::default(),
            forecast: ForecastPolicy::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Currency code must be 3 ASCII letters; forecast policy must be consistent.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidSettings(format!(
                "Invalid currency code '{}': must be exactly 3 ASCII letters (e.g., USD, EUR, BRL)",
                self.currency
            )));
        }
        self.forecast.validate()
    }
}
