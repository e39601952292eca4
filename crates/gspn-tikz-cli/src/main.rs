//! gspn-tikz CLI - Draw GreatSPN Petri nets with TikZ

mod cli;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is initialized inside run(), once flags are known
    let cli_args = cli::Cli::parse();

    let mut app = cli::GspnTikzApp::new();

    match app.run(cli_args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
