//! Input state machine
//!
//! A [`CalculationState`] is mutated by one [`InputEvent`] at a time. Each
//! event is handled to completion; afterwards [`CalculationState::display_value`]
//! gives the text for the display.
//!
//! ```text
//!            digit/./±/del                 digit/.
//!          ┌────────────┐            ┌────────────────┐
//!          ▼            │            ▼                │
//!       ┌──────┐  op  ┌─────────────────┐  digit  ┌────────────────┐
//!       │ Idle │─────▶│ AwaitingSecond  │────────▶│ EnteringSecond │
//!       └──────┘      └─────────────────┘         └────────────────┘
//!          ▲              │ op (replace)               │ op (chain) / =
//!          └──── = ───────┴──────────── AC ────────────┘
//! ```

use crate::core::format::{
    format_number, number_text, option_number_text, parse_entry, truncate_display,
};
use crate::core::{apply, CalcError, CalcResult, Operator};
use serde::{Deserialize, Serialize};

/// The value behind the display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Entry {
    /// Digits being keyed, kept as text so `"0."` and trailing zeros survive
    Typed(String),
    /// A computed result
    Value(#[serde(with = "number_text")] f64),
    /// A display-level error value
    Error(CalcError),
}

impl Default for Entry {
    fn default() -> Self {
        Self::Typed("0".to_string())
    }
}

impl Entry {
    /// Display text for this entry (untruncated)
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Typed(text) => text.clone(),
            Self::Value(v) => format_number(*v),
            Self::Error(e) => e.display_text(),
        }
    }

    /// Numeric value of this entry
    pub fn number(&self) -> CalcResult<f64> {
        match self {
            Self::Typed(text) => parse_entry(text),
            Self::Value(v) => Ok(*v),
            Self::Error(e) => Err(e.clone()),
        }
    }

    /// Returns true if an error value is showing
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// A discrete button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    DecimalPoint,
    /// Binary operator
    Operator(Operator),
    /// Equals
    Equals,
    /// All clear
    Clear,
    /// Delete last character
    Delete,
    /// Negate the current entry
    ToggleSign,
}

impl InputEvent {
    /// Button label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::ToggleSign => "+/-".to_string(),
        }
    }

    /// Parses a button label. Operators accept their ASCII aliases.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if let [b] = label.as_bytes() {
            if b.is_ascii_digit() {
                return Some(Self::Digit(b - b'0'));
            }
        }
        match label {
            "." => Some(Self::DecimalPoint),
            "=" => Some(Self::Equals),
            "AC" | "ac" | "C" | "c" => Some(Self::Clear),
            "DEL" | "del" => Some(Self::Delete),
            "+/-" | "±" | "neg" => Some(Self::ToggleSign),
            other => Operator::from_symbol(other).ok().map(Self::Operator),
        }
    }
}

/// Where the machine is in a two-operand calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator chosen
    Idle,
    /// Operator chosen, no digits yet for the second operand
    AwaitingSecond,
    /// Digits being appended to the second operand
    EnteringSecond,
}

/// The running calculation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationState {
    #[serde(with = "option_number_text")]
    first_operand: Option<f64>,
    operator: Option<Operator>,
    #[serde(with = "option_number_text")]
    second_operand: Option<f64>,
    awaiting_second_operand: bool,
    entry: Entry,
}

impl CalculationState {
    /// Creates the initial state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First operand, once captured
    #[must_use]
    pub const fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Pending operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Second operand of the most recent evaluation
    #[must_use]
    pub const fn second_operand(&self) -> Option<f64> {
        self.second_operand
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub const fn awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Current entry
    #[must_use]
    pub const fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Full display text, never empty
    #[must_use]
    pub fn display_value(&self) -> String {
        self.entry.text()
    }

    /// Display text cut to `max_len` characters
    #[must_use]
    pub fn display(&self, max_len: usize) -> String {
        truncate_display(&self.display_value(), max_len)
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.operator, self.awaiting_second_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::AwaitingSecond,
            (Some(_), false) => Phase::EnteringSecond,
        }
    }

    /// Applies one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(d) => self.append_digit(d),
            InputEvent::DecimalPoint => self.append_decimal_point(),
            InputEvent::Operator(op) => self.choose_operator(op),
            InputEvent::Equals => self.evaluate(),
            InputEvent::Clear => self.clear_all(),
            InputEvent::Delete => self.delete_last_char(),
            InputEvent::ToggleSign => self.toggle_sign(),
        }
    }

    /// Appends a digit, or starts a new number when one is awaited.
    ///
    /// Values above 9 are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.awaiting_second_operand {
            self.entry = Entry::Typed(ch.to_string());
            self.awaiting_second_operand = false;
            return;
        }

        match &mut self.entry {
            Entry::Typed(text) if text == "0" => *text = ch.to_string(),
            Entry::Typed(text) => text.push(ch),
            Entry::Value(_) | Entry::Error(_) => self.entry = Entry::Typed(ch.to_string()),
        }
    }

    /// Appends `.` unless the entry already has one
    pub fn append_decimal_point(&mut self) {
        if self.awaiting_second_operand {
            self.entry = Entry::Typed("0.".to_string());
            self.awaiting_second_operand = false;
            return;
        }

        match &mut self.entry {
            Entry::Typed(text) => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            Entry::Value(_) | Entry::Error(_) => self.entry = Entry::Typed("0.".to_string()),
        }
    }

    /// Selects `op` as the pending operator.
    ///
    /// Pressed right after another operator it only replaces that choice.
    /// With a second operand already keyed, the pending operation is
    /// evaluated first and its result becomes the new first operand.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.entry.is_error() {
            tracing::debug!(operator = %op, "operator ignored while an error is displayed");
            return;
        }

        if self.operator.is_some() && self.awaiting_second_operand {
            self.operator = Some(op);
            return;
        }

        match self.operator {
            None => match self.entry.number() {
                Ok(value) => self.first_operand = Some(value),
                Err(e) => return self.fail(e),
            },
            Some(pending) => match self.compute(pending) {
                Ok(result) => {
                    self.entry = Entry::Value(result);
                    self.first_operand = Some(result);
                }
                Err(e) => return self.fail(e),
            },
        }

        self.operator = Some(op);
        self.awaiting_second_operand = true;
    }

    /// Equals. Does nothing without a pending operator and a keyed second operand.
    pub fn evaluate(&mut self) {
        let Some(op) = self.operator else {
            return;
        };
        if self.awaiting_second_operand {
            return;
        }

        match self.compute(op) {
            Ok(result) => {
                self.entry = Entry::Value(result);
                self.first_operand = Some(result);
                self.operator = None;
                self.awaiting_second_operand = true;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Resets to the initial state
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Removes the last character; a single remaining character becomes `"0"`.
    ///
    /// A bare `-` or `-0` left behind also becomes `"0"`.
    pub fn delete_last_char(&mut self) {
        let mut text = match &self.entry {
            Entry::Error(_) => return,
            Entry::Value(v) if !v.is_finite() => String::new(),
            entry => entry.text(),
        };

        if text.chars().count() <= 1 {
            text = "0".to_string();
        } else {
            text.pop();
            if text == "-" || text == "-0" {
                text = "0".to_string();
            }
        }
        self.entry = Entry::Typed(text);
    }

    /// Adds or removes a leading minus sign. No-op on zero.
    pub fn toggle_sign(&mut self) {
        match &mut self.entry {
            Entry::Error(_) => {}
            Entry::Value(v) => {
                if *v != 0.0 {
                    *v = -*v;
                }
            }
            Entry::Typed(text) => {
                if text == "0" {
                    return;
                }
                if let Some(rest) = text.strip_prefix('-') {
                    *text = rest.to_string();
                } else {
                    text.insert(0, '-');
                }
            }
        }
    }

    /// Evaluates `first_operand op entry`, recording the second operand
    fn compute(&mut self, op: Operator) -> CalcResult<f64> {
        let b = self.entry.number()?;
        self.second_operand = Some(b);
        // operator is only ever set together with first_operand
        let a = self.first_operand.unwrap_or_default();
        apply(op, a, b)
    }

    /// Shows an error value and drops the pending calculation
    fn fail(&mut self, error: CalcError) {
        tracing::warn!(%error, "calculation produced an error value");
        self.entry = Entry::Error(error);
        self.first_operand = None;
        self.operator = None;
        self.second_operand = None;
        self.awaiting_second_operand = true;
    }
}

/// Pure transition: consumes a state and an event, returns the next state
#[must_use]
pub fn update(mut state: CalculationState, event: InputEvent) -> CalculationState {
    state.handle(event);
    state
}
