//! The four binary operators and their arithmetic

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator selected on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol shown on the button
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the ASCII spelling used in scripts and element ids
    #[must_use]
    pub const fn ascii_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses a button symbol or its ASCII alias
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        match symbol.trim() {
            "+" => Ok(Self::Add),
            "−" | "-" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// Applies `op` to `a` and `b`.
///
/// Plain IEEE-754 double arithmetic, except that a zero divisor yields
/// [`CalcError::DivisionByZero`].
pub fn apply(op: Operator, a: f64, b: f64) -> CalcResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Applies an operator given by symbol.
///
/// Unrecognized symbols yield [`CalcError::UnknownOperator`].
pub fn apply_symbol(symbol: &str, a: f64, b: f64) -> CalcResult<f64> {
    apply(Operator::from_symbol(symbol)?, a, b)
}
