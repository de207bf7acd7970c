//! pocket-calc CLI library
//!
//! Input source for the calculator that reads key labels from the command
//! line. Everything that produces output returns a `String`, and `main`
//! prints it.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod error;
pub mod logging;

pub use commands::{Cli, Commands, RunArgs};
pub use error::{CliError, CliResult};

use console::style;
use pocket_calc::prelude::*;
use std::path::Path;

/// Builds the configuration from an optional file plus flag overrides
pub fn load_config(
    path: Option<&Path>,
    max_display_length: Option<usize>,
) -> CliResult<CalculatorConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration");
            CalculatorConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => CalculatorConfig::default(),
    };
    if let Some(len) = max_display_length {
        config = config.with_max_display_length(len);
    }
    config.validate()?;
    Ok(config)
}

/// Maps key labels to input events, failing on the first unknown label
pub fn parse_keys<S: AsRef<str>>(keys: &[S]) -> CliResult<Vec<InputEvent>> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            InputEvent::from_label(key).ok_or_else(|| CliError::UnknownKey {
                key: key.to_string(),
            })
        })
        .collect()
}

/// Executes a parsed command line and returns the text to print
pub fn execute(cli: &Cli) -> CliResult<String> {
    let config = load_config(cli.config.as_deref(), cli.max_display_length)?;
    match &cli.command {
        Commands::Run(args) => run_keys(config, args),
        Commands::Keypad => Ok(CalcKeypad::new().render_text()),
    }
}

fn run_keys(config: CalculatorConfig, args: &RunArgs) -> CliResult<String> {
    let events = parse_keys(&args.keys)?;
    let mut calc = Calculator::with_config(config)?;
    let mut display = TextDisplay::new();
    for event in &events {
        calc.press_into(*event, &mut display);
    }

    let mut lines = Vec::new();
    if args.trace {
        for (event, text) in events.iter().zip(display.renders()) {
            lines.push(format!(
                "{:>4}  {}",
                style(event.label()).cyan(),
                style(text).bold()
            ));
        }
    }
    if args.json {
        lines.push(calc.snapshot_json()?);
    } else if !args.trace {
        lines.push(display.text().to_string());
    }
    Ok(lines.join("\n"))
}
