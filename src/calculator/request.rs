//! Calculation request parsing
//!
//! Requests arrive as raw JSON bytes. Checks run in a fixed order:
//! body, required fields, numeric coercion, operation lookup. The first
//! failing check decides the error.

use std::borrow::Cow;

use serde_json::{Map, Number, Value};

use super::errors::{CalcError, CalcResult};
use super::operation::Operation;

/// Field names on the wire
pub const FIELD_NUM1: &str = "num1";
pub const FIELD_NUM2: &str = "num2";
pub const FIELD_OPERACAO: &str = "operacao";

/// A validated calculation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub num1: f64,
    pub num2: f64,
    pub operacao: Operation,
}

impl CalculationRequest {
    /// Parse a request from a raw body
    pub fn parse(body: &[u8]) -> CalcResult<Self> {
        // Unparseable bodies are treated the same as absent ones
        let value: Value = serde_json::from_slice(body).map_err(|_| CalcError::MissingBody)?;
        Self::from_value(&value)
    }

    /// Parse a request from an already decoded JSON value
    pub fn from_value(value: &Value) -> CalcResult<Self> {
        if !is_truthy(value) {
            return Err(CalcError::MissingBody);
        }

        let fields = value.as_object().ok_or(CalcError::MissingField)?;
        let num1 = required(fields, FIELD_NUM1)?;
        let num2 = required(fields, FIELD_NUM2)?;
        let operacao = required(fields, FIELD_OPERACAO)?;

        let num1 = coerce_f64(num1)?;
        let num2 = coerce_f64(num2)?;

        let operacao = operacao
            .as_str()
            .ok_or(CalcError::InvalidOperation)?
            .parse::<Operation>()?;

        Ok(Self {
            num1,
            num2,
            operacao,
        })
    }
}

/// A field is present only if its key exists and its value is not null
fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> CalcResult<&'a Value> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(CalcError::MissingField),
        Some(value) => Ok(value),
    }
}

/// Whether a JSON value counts as "data was sent"
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => number_to_f64(n).is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Coerce a JSON value to f64
///
/// Numbers and booleans convert directly. Strings are trimmed and parsed as
/// decimal floats, with `inf`/`infinity`/`nan` accepted in any case.
pub fn coerce_f64(value: &Value) -> CalcResult<f64> {
    match value {
        Value::Number(n) => number_to_f64(n).ok_or(CalcError::InvalidNumber),
        Value::Bool(true) => Ok(1.0),
        Value::Bool(false) => Ok(0.0),
        Value::String(s) => parse_f64(s),
        _ => Err(CalcError::InvalidNumber),
    }
}

/// Numbers keep their source text, so literals beyond the f64 range round
/// to an infinity instead of failing to decode
fn number_to_f64(n: &Number) -> Option<f64> {
    n.to_string().parse::<f64>().ok()
}

fn parse_f64(s: &str) -> CalcResult<f64> {
    let digits = strip_digit_separators(s.trim()).ok_or(CalcError::InvalidNumber)?;
    digits.parse::<f64>().map_err(|_| CalcError::InvalidNumber)
}

/// Remove `_` separators, each of which must sit between two ASCII digits
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        let between_digits = before.is_some_and(u8::is_ascii_digit)
            && after.is_some_and(u8::is_ascii_digit);
        if !between_digits {
            return None;
        }
    }

    Some(Cow::Owned(s.replace('_', "")))
}
