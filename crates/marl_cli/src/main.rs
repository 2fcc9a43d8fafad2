//! `marl-report` — render serialized Marl diagnostics in a terminal.
//!
//! Marl tools that run detached from a terminal serialize their diagnostics
//! as JSON records. This binary reads those records from a file or from
//! stdin and renders them the way the tools would have: a colored header
//! divider, the source location, the description, a numbered code snippet
//! with a caret, and the hint.

#![warn(missing_docs)]

mod report;

use std::process;

use clap::{Parser, ValueEnum};

/// Render serialized Marl diagnostics as colored terminal output.
#[derive(Parser, Debug)]
#[command(name = "marl-report", version, about = "Marl diagnostic renderer")]
pub struct Cli {
    /// Path to a JSON file holding one diagnostic record or an array of
    /// records. Reads stdin when omitted.
    pub input: Option<String>,

    /// Program name shown at the end of each header divider.
    #[arg(short, long)]
    pub program_name: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

fn main() {
    let cli = Cli::parse();

    match report::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
