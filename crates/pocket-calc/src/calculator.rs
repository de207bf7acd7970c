//! Calculator: owns the state machine and renders to a display sink

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{update, CalculationState, InputEvent, Phase};
use crate::display::DisplaySink;

/// Owning wrapper around [`CalculationState`] plus its configuration
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculationState,
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom configuration.
    ///
    /// Fails if the configuration does not pass [`CalculatorConfig::validate`].
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CalculationState::new(),
            config,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &CalculationState {
        &self.state
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Applies one event and returns the text for the display
    pub fn press(&mut self, event: InputEvent) -> String {
        tracing::debug!(?event, "input");
        let state = std::mem::take(&mut self.state);
        self.state = update(state, event);
        tracing::trace!(
            phase = ?self.state.phase(),
            display = %self.state.display_value(),
            "state updated"
        );
        self.display()
    }

    /// Applies one event and writes the result to `sink`
    pub fn press_into(&mut self, event: InputEvent, sink: &mut impl DisplaySink) {
        let text = self.press(event);
        sink.show(&text);
    }

    /// Applies a sequence of events, returning the final display text
    pub fn press_all<I>(&mut self, events: I) -> String
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.press(event);
        }
        self.display()
    }

    /// Display text, truncated to the configured width
    #[must_use]
    pub fn display(&self) -> String {
        self.state.display(self.config.max_display_length)
    }

    /// Current phase of the calculation
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Resets the calculation, keeping the configuration
    pub fn reset(&mut self) {
        self.press(InputEvent::Clear);
    }

    /// JSON snapshot of the state, for debugging
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.state)
    }
}
