//! Browser WASM bindings for the calculator
//!
//! The page owns the DOM: it forwards each button click id to
//! [`BrowserCalculator::press`] and writes the returned text into the
//! `.current-operand` element.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::calculator::Calculator;
use crate::config::CalculatorConfig;
use crate::wasm::keypad::CalcKeypad;

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: CalcKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::with_max_display_length(CalculatorConfig::DEFAULT_MAX_DISPLAY_LENGTH)
    }

    /// Create a calculator with a custom display width
    #[wasm_bindgen(js_name = withMaxDisplayLength)]
    pub fn with_max_display_length(max_display_length: usize) -> Self {
        let config = CalculatorConfig::new().with_max_display_length(max_display_length.max(1));
        Self {
            calculator: Calculator::with_config(config).unwrap_or_default(),
            keypad: CalcKeypad::new(),
        }
    }

    /// Handle a keypad button click by element ID.
    ///
    /// Returns the new display text; unknown ids leave the display unchanged.
    pub fn press(&mut self, button_id: &str) -> String {
        match self.keypad.handle_click(button_id) {
            Some(event) => self.calculator.press(event),
            None => {
                console::warn_1(&format!("unknown calculator button: {button_id}").into());
                self.calculator.display()
            }
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display()
    }

    /// Reset to the initial state
    pub fn clear(&mut self) -> String {
        self.calculator.reset();
        self.calculator.display()
    }

    /// Element ids of every keypad button, in layout order
    #[wasm_bindgen(js_name = buttonIds)]
    pub fn button_ids(&self) -> Vec<String> {
        self.keypad.buttons().iter().map(|b| b.id.clone()).collect()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
