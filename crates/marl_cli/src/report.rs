//! Record loading and rendering for `marl-report`.

use std::fs;
use std::io::Read;

use marl_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};

use crate::{Cli, ReportFormat};

/// Errors that can occur while loading diagnostic records.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The input could not be read.
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not valid diagnostic JSON.
    #[error("failed to decode records: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Runs `marl-report`: loads records, renders them, and returns the exit code.
///
/// Returns 1 if any record is error-level, 0 otherwise.
pub fn run(cli: &Cli) -> Result<i32, ReportError> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let records = parse_records(&text)?;

    match cli.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(cli.program_name.clone());
            for record in &records {
                print!("{}", renderer.render(record));
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&records)?;
            println!("{json}");
        }
    }

    let has_errors = records.iter().any(|r| r.level.is_error());
    Ok(if has_errors { 1 } else { 0 })
}

/// Parses input as an array of records, falling back to a single record.
pub fn parse_records(text: &str) -> Result<Vec<Diagnostic>, serde_json::Error> {
    match serde_json::from_str::<Vec<Diagnostic>>(text) {
        Ok(records) => Ok(records),
        Err(_) => Ok(vec![serde_json::from_str::<Diagnostic>(text)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marl_diagnostics::{Level, SourcePosition};
    use std::io::Write;

    fn sample_records() -> Vec<Diagnostic> {
        vec![
            Diagnostic::error("type-error", "expected a list")
                .with_position(SourcePosition::new(10, 4, "foo.marl"))
                .with_code_context("  x = 5", Some("  y = []".to_string()), None)
                .with_hint("did you mean []?"),
            Diagnostic::warning("unused-binding", "binding 'x' is never used"),
        ]
    }

    #[test]
    fn parse_single_record() {
        let diag = Diagnostic::warning("deprecated-key", "key 'urls' is deprecated");
        let json = serde_json::to_string(&diag).unwrap();
        let records = parse_records(&json).unwrap();
        assert_eq!(records, vec![diag]);
    }

    #[test]
    fn parse_record_array() {
        let json = serde_json::to_string(&sample_records()).unwrap();
        let records = parse_records(&json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "type-error");
        assert_eq!(records[1].level, Level::Warning);
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(parse_records("{not json").is_err());
        assert!(parse_records("[{\"level\": \"error\"}]").is_err());
    }

    #[test]
    fn run_reports_errors_in_exit_code() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_records()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let cli = Cli {
            input: Some(file.path().to_string_lossy().into_owned()),
            program_name: Some("marl-eval".to_string()),
            format: ReportFormat::Text,
        };
        assert_eq!(run(&cli).unwrap(), 1);
    }

    #[test]
    fn run_exits_zero_without_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let warning = vec![Diagnostic::warning("unused-binding", "never used")];
        let json = serde_json::to_string(&warning).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let cli = Cli {
            input: Some(file.path().to_string_lossy().into_owned()),
            program_name: None,
            format: ReportFormat::Json,
        };
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn run_surfaces_missing_file() {
        let cli = Cli {
            input: Some("/nonexistent/diags.json".to_string()),
            program_name: None,
            format: ReportFormat::Text,
        };
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
        assert!(format!("{err}").starts_with("failed to read records:"));
    }
}
