use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A flat, already-formatted table handed to CSV/PDF sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTable {
    /// Human-readable title (e.g., "Wealth evolution (USD)")
    pub title: String,

    pub headers: Vec<String>,

    /// Each row has exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render as CSV text: one header line, then one line per row.
    pub fn to_csv(&self) -> Result<String, CoreError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| CoreError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CoreError::Export(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize table: {e}")))
    }
}
