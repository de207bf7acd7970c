//! Display sink abstraction
//!
//! The calculator writes its (already truncated) display text to a
//! [`DisplaySink`] after every event. The sink never sees the state.

/// A writable text surface
pub trait DisplaySink {
    /// Replaces the shown text
    fn show(&mut self, text: &str);
}

/// In-memory display that records every render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDisplay {
    text: String,
    renders: Vec<String>,
}

impl TextDisplay {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every text shown so far, oldest first
    #[must_use]
    pub fn renders(&self) -> &[String] {
        &self.renders
    }
}

impl DisplaySink for TextDisplay {
    fn show(&mut self, text: &str) {
        self.text = text.to_string();
        self.renders.push(self.text.clone());
    }
}

impl DisplaySink for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
