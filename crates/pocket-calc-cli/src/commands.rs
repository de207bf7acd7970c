//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// pocket-calc: replay button presses on a four-function calculator
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the display width
    #[arg(long, global = true)]
    pub max_display_length: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    Run(RunArgs),

    /// Print the keypad layout
    Keypad,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Key labels, e.g. `5 + 3 =`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Print the final state as JSON instead of the display
    #[arg(long)]
    pub json: bool,
}
