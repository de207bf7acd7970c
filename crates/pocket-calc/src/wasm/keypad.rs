//! Calculator keypad: button layout and click-to-event mapping
//!
//! This is the input source for the browser front end. Each button has a
//! stable element id, and a click on that id maps to one [`InputEvent`].

use super::dom::DomElement;
use crate::core::{InputEvent, Operator};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button emits
    pub event: InputEvent,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            id: element_id(event),
            row,
            col,
        }
    }

    /// CSS class grouping this button with its kind
    #[must_use]
    pub const fn kind_class(&self) -> &'static str {
        match self.event {
            InputEvent::Digit(_) | InputEvent::DecimalPoint => "operand-btn",
            InputEvent::Operator(_) => "operator-btn",
            InputEvent::Equals => "equals-btn",
            InputEvent::Clear | InputEvent::Delete | InputEvent::ToggleSign => "function-btn",
        }
    }
}

/// Element id for the button that emits `event`
#[must_use]
pub fn element_id(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(d) => format!("btn-{d}"),
        InputEvent::DecimalPoint => "btn-decimal".to_string(),
        InputEvent::Operator(op) => format!("btn-{}", op_name(op)),
        InputEvent::Equals => "btn-equals".to_string(),
        InputEvent::Clear => "btn-clear".to_string(),
        InputEvent::Delete => "btn-delete".to_string(),
        InputEvent::ToggleSign => "btn-negate".to_string(),
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Keypad layout
///
/// ```text
/// [ AC ] [DEL ] [+/- ] [ ÷ ]
/// [ 7  ] [ 8  ] [ 9  ] [ × ]
/// [ 4  ] [ 5  ] [ 6  ] [ − ]
/// [ 1  ] [ 2  ] [ 3  ] [ + ]
/// [ 0  ] [ .  ] [ =  ]
/// ```
#[derive(Debug, Clone)]
pub struct CalcKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for CalcKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcKeypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        use InputEvent::{Clear, DecimalPoint, Delete, Digit, Equals, ToggleSign};
        let op = InputEvent::Operator;

        let grid: [&[InputEvent]; 5] = [
            &[Clear, Delete, ToggleSign, op(Operator::Divide)],
            &[Digit(7), Digit(8), Digit(9), op(Operator::Multiply)],
            &[Digit(4), Digit(5), Digit(6), op(Operator::Subtract)],
            &[Digit(1), Digit(2), Digit(3), op(Operator::Add)],
            &[Digit(0), DecimalPoint, Equals],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, event)| KeypadButtonDef::new(*event, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that emits `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Processes a button click and returns its event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputEvent> {
        self.find_button_by_id(element_id).map(|btn| btn.event)
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id("calc-keypad").with_class("keypad"),
            |keypad, btn| {
                keypad.with_child(
                    DomElement::new("button")
                        .with_id(&btn.id)
                        .with_text(&btn.event.label())
                        .with_class(btn.kind_class())
                        .with_class(&format!("keypad-row-{}", btn.row))
                        .with_class(&format!("keypad-col-{}", btn.col)),
                )
            },
        )
    }

    /// Renders the layout as plain text, one row per line
    #[must_use]
    pub fn render_text(&self) -> String {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .filter_map(|col| self.get_button_at(row, col))
                    .map(|btn| format!("[{:^5}]", btn.event.label()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
