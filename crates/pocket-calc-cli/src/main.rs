//! pocket-calc: replay calculator button presses from the command line
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc run 5 + 3 =          # prints 8
//! pocket-calc run --trace 1 2 DEL  # display after every key
//! pocket-calc run --json 4 +       # state snapshot
//! pocket-calc keypad               # keypad layout
//! ```

use clap::Parser;
use pocket_calc_cli::{execute, logging, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
