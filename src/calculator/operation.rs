//! Arithmetic operations selectable through the `operacao` field

use std::fmt;
use std::str::FromStr;

use super::errors::{CalcError, CalcResult};

/// Supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `soma`: addition
    Soma,
    /// `subtracao`: subtraction
    Subtracao,
    /// `multiplicacao`: multiplication
    Multiplicacao,
    /// `divisao`: division, zero divisor rejected
    Divisao,
}

impl Operation {
    /// All operations in the order they are advertised to clients
    pub const ALL: [Operation; 4] = [
        Operation::Soma,
        Operation::Subtracao,
        Operation::Multiplicacao,
        Operation::Divisao,
    ];

    /// Wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Soma => "soma",
            Operation::Subtracao => "subtracao",
            Operation::Multiplicacao => "multiplicacao",
            Operation::Divisao => "divisao",
        }
    }

    /// Apply the operation to two operands
    ///
    /// Division checks the divisor before dividing; `-0.0` counts as zero.
    pub fn apply(&self, num1: f64, num2: f64) -> CalcResult<f64> {
        match self {
            Operation::Soma => Ok(num1 + num2),
            Operation::Subtracao => Ok(num1 - num2),
            Operation::Multiplicacao => Ok(num1 * num2),
            Operation::Divisao => {
                if num2 == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(num1 / num2)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact, case-sensitive match on the wire name
impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or(CalcError::InvalidOperation)
    }
}
