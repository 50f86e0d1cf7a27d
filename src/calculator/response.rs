//! Calculation response bodies

use serde::{Deserialize, Serialize};

use super::errors::{CalcError, Language};

/// Success body: `{"resultado": <number>}`
///
/// Non-finite results serialize as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub resultado: f64,
}

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create from a calculator error
    pub fn from_error(err: CalcError, language: Language) -> Self {
        Self {
            error: err.message(language),
        }
    }
}
