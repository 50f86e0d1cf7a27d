//! HTTP mapping of calculator errors
//!
//! Every calculator error is a client error: 400 with `{"error": ".."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::calculator::{CalcError, ErrorResponse, Language};

/// A rejected calculation, ready to be sent to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcRejection {
    pub error: CalcError,
    pub language: Language,
}

impl CalcRejection {
    /// Create a rejection answered in the given language
    pub fn new(error: CalcError, language: Language) -> Self {
        Self { error, language }
    }

    /// Get HTTP status code for this rejection
    pub fn status_code(&self) -> StatusCode {
        match self.error {
            CalcError::MissingBody
            | CalcError::MissingField
            | CalcError::InvalidNumber
            | CalcError::DivisionByZero
            | CalcError::InvalidOperation => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for CalcRejection {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from_error(self.error, self.language));
        (status, body).into_response()
    }
}
