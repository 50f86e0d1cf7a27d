//! Calculator HTTP Routes
//!
//! `POST /calcular` with a JSON body `{"num1", "num2", "operacao"}`.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::calculator::Calculator;

use super::errors::CalcRejection;

/// Path of the calculation endpoint
pub const CALCULATE_PATH: &str = "/calcular";

/// Create calculator routes
pub fn calculator_routes(calculator: Calculator) -> Router {
    Router::new()
        .route(CALCULATE_PATH, post(calculate_handler))
        .with_state(calculator)
}

/// Calculation handler
///
/// Takes the raw body so that missing or malformed JSON becomes a
/// calculator error instead of an extractor rejection.
async fn calculate_handler(State(calculator): State<Calculator>, body: Bytes) -> Response {
    match calculator.handle(&body) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => CalcRejection::new(error, calculator.language()).into_response(),
    }
}
