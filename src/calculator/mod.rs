//! Calculator core
//!
//! Validates a calculation request and applies one of four operations.
//!
//! # Request handling flow
//!
//! 1. Body absent, empty or falsy → `MissingBody`
//! 2. Any of `num1`, `num2`, `operacao` missing or null → `MissingField`
//! 3. `num1`/`num2` not coercible to f64 → `InvalidNumber`
//! 4. `operacao` not an exact match → `InvalidOperation`
//! 5. `divisao` with zero divisor → `DivisionByZero`
//!
//! # Supported Operations
//!
//! - soma
//! - subtracao
//! - multiplicacao
//! - divisao

mod errors;
mod handler;
mod operation;
mod request;
mod response;

pub use errors::{CalcError, CalcResult, Language};
pub use handler::Calculator;
pub use operation::Operation;
pub use request::{coerce_f64, CalculationRequest};
pub use response::{CalculationResult, ErrorResponse};
