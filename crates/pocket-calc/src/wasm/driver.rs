//! WASM Driver - keypad clicks in, display element out
//!
//! Wires [`CalcKeypad`] to a [`Calculator`] and renders into a [`MockDom`],
//! the same way the browser binding does against the real document.

use super::dom::{DomEvent, MockDom};
use super::keypad::{element_id, CalcKeypad};
use crate::calculator::Calculator;
use crate::config::{CalculatorConfig, ConfigError};
use crate::core::InputEvent;

/// WASM Driver wrapping calculator, keypad and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator,
    keypad: CalcKeypad,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::from_calculator(Calculator::new())
    }

    /// Creates a driver with a custom configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        Calculator::with_config(config).map(Self::from_calculator)
    }

    fn from_calculator(calculator: Calculator) -> Self {
        let keypad = CalcKeypad::new();
        let dom = MockDom::calculator(keypad.create_keypad_element());
        Self {
            calculator,
            keypad,
            dom,
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates clicking the element with `element_id`.
    ///
    /// Returns the new display text, or `None` if the id is not a keypad button.
    pub fn click(&mut self, element_id: &str) -> Option<String> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let event = self.keypad.handle_click(element_id)?;
        self.calculator.press_into(event, &mut self.dom);
        Some(self.dom.display_text().to_string())
    }

    /// Clicks the button that emits `event`
    pub fn press(&mut self, event: InputEvent) -> Option<String> {
        self.click(&element_id(event))
    }

    /// Clicks buttons by label, e.g. `"5 + 3 ="`.
    ///
    /// Unknown labels are skipped.
    pub fn press_labels(&mut self, labels: &str) -> String {
        for label in labels.split_whitespace() {
            if let Some(event) = InputEvent::from_label(label) {
                self.press(event);
            }
        }
        self.display_text()
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_text(&self) -> String {
        self.dom.display_text().to_string()
    }
}
