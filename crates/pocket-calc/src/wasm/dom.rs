//! Mock DOM for testing the browser front end
//!
//! Stands in for the real document so the keypad wiring and the display
//! element can be exercised without a browser.

use crate::display::DisplaySink;
use std::collections::HashMap;

/// Element id of the calculator display
pub const DISPLAY_ID: &str = "calc-display";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM holding the calculator display and keypad
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator document: a display showing `"0"` plus `keypad`
    #[must_use]
    pub fn calculator(keypad: DomElement) -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("current-operand")
                .with_text("0"),
        );
        for button in &keypad.children {
            dom.register_element(button.clone());
        }
        dom.register_element(keypad);
        dom
    }

    /// Registers an element for ID lookup. Elements without an ID are ignored.
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Text of the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.get_element_text(DISPLAY_ID).unwrap_or_default()
    }
}

impl DisplaySink for MockDom {
    fn show(&mut self, text: &str) {
        self.set_element_text(DISPLAY_ID, text);
    }
}
