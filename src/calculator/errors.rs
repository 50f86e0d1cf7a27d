//! Calculator error types
//!
//! Every calculator error is a client-input error. None is fatal to the
//! server; each one terminates only the request that produced it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language of the messages returned to clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Portuguese
    Pt,
}

impl Language {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(format!("unsupported language '{}', expected 'en' or 'pt'", other)),
        }
    }
}

/// Calculator errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Body absent, empty, unparseable or falsy
    #[error("No data sent")]
    MissingBody,

    /// One of num1, num2, operacao is missing or null
    #[error("Fields num1, num2 and operacao are required.")]
    MissingField,

    /// num1 or num2 cannot be coerced to a float
    #[error("num1 and num2 must be numbers.")]
    InvalidNumber,

    /// divisao with num2 == 0
    #[error("Division by zero not allowed.")]
    DivisionByZero,

    /// operacao is not one of the supported operations
    #[error("Invalid operation. Use: soma, subtracao, multiplicacao or divisao.")]
    InvalidOperation,
}

impl CalcError {
    /// Stable error code used in logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::MissingBody => "CALC_MISSING_BODY",
            CalcError::MissingField => "CALC_MISSING_FIELD",
            CalcError::InvalidNumber => "CALC_INVALID_NUMBER",
            CalcError::DivisionByZero => "CALC_DIVISION_BY_ZERO",
            CalcError::InvalidOperation => "CALC_INVALID_OPERATION",
        }
    }

    /// Client-facing message in the given language
    pub fn message(&self, language: Language) -> String {
        match language {
            Language::En => self.to_string(),
            Language::Pt => self.message_pt().to_string(),
        }
    }

    fn message_pt(&self) -> &'static str {
        match self {
            CalcError::MissingBody => "Nenhum dado enviado",
            CalcError::MissingField => "Os campos num1, num2 e operacao são obrigatórios.",
            CalcError::InvalidNumber => "num1 e num2 devem ser números.",
            CalcError::DivisionByZero => "Divisão por zero não é permitida.",
            CalcError::InvalidOperation => {
                "Operação inválida. Utilize: soma, subtracao, multiplicacao ou divisao."
            }
        }
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
