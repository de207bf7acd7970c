//! Pocket Calc - four-function button calculator
//!
//! The calculator is a small input state machine: every button press is an
//! [`InputEvent`](core::InputEvent) applied to an owned
//! [`CalculationState`](core::CalculationState), and the display text is
//! derived from that state afterwards. Rendering lives behind the
//! [`DisplaySink`](display::DisplaySink) trait, so the machine is testable
//! without any UI.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press(InputEvent::Digit(5));
//! calc.press(InputEvent::Operator(Operator::Add));
//! calc.press(InputEvent::Digit(3));
//! assert_eq!(calc.press(InputEvent::Equals), "8");
//!
//! // Or as a pure fold over events
//! let state = [InputEvent::Digit(6), InputEvent::Operator(Operator::Divide),
//!              InputEvent::Digit(0), InputEvent::Equals]
//!     .into_iter()
//!     .fold(CalculationState::new(), update);
//! assert_eq!(state.display_value(), CalcError::DivisionByZero.display_text());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod config;
pub mod core;
pub mod display;

/// Browser front end; the wasm-bindgen entry point needs the `wasm` feature
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::format::{format_number, truncate_display};
    pub use crate::core::{
        apply, apply_symbol, update, CalcError, CalcResult, CalculationState, Entry, InputEvent,
        Operator, Phase,
    };
    pub use crate::display::{DisplaySink, TextDisplay};
    pub use crate::wasm::{CalcKeypad, MockDom, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(InputEvent::Digit(2)), "2");
        assert_eq!(apply(Operator::Multiply, 2.0, 21.0), Ok(42.0));
    }

    #[test]
    fn test_driver_and_calculator_agree() {
        let mut driver = WasmDriver::new();
        let mut calc = Calculator::new();
        for label in "9 + × 2 =".split_whitespace() {
            let event = InputEvent::from_label(label).unwrap();
            driver.press(event);
            calc.press(event);
        }
        assert_eq!(driver.display_text(), calc.display());
        assert_eq!(calc.display(), "18");
    }
}
