//! Browser front end: keypad input source and DOM display sink
//!
//! Everything except [`BrowserCalculator`] is plain Rust, so the wiring is
//! testable against [`MockDom`] without a browser.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID};
pub use driver::WasmDriver;
pub use keypad::{element_id, CalcKeypad, KeypadButtonDef};
