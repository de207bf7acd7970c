//! Core calculator: operators, display formatting and the input state machine
//!
//! Nothing in here knows about a rendering surface. Input arrives as
//! [`InputEvent`]s, and the only output is the display string derived from
//! [`CalculationState`].

pub mod format;
mod operations;
pub mod state;

pub use operations::{apply, apply_symbol, Operator};
pub use state::{update, CalculationState, Entry, InputEvent, Phase};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error values.
///
/// These are display-level values, not program faults: the state machine
/// shows the message and stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("why are you messing with me?")]
    DivisionByZero,

    /// Operator symbol not one of + − × ÷
    #[error("Error, invalid operator")]
    UnknownOperator(String),

    /// Typed entry could not be read as a number
    #[error("Error, invalid number")]
    InvalidEntry(String),
}

impl CalcError {
    /// Fixed text rendered on the display for this error
    #[must_use]
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}
