//! Rendering backends for human-readable and machine-readable output.

use crate::color::{colorize, ColorClass, ANSI_BLUE, ANSI_RESET};
use crate::diagnostic::Diagnostic;
use crate::snippet::render_code_lines;

/// The left margin every rendered line starts with.
const PREFIX: &str = "    ";
/// The column the header divider pads out to.
const TARGET_WIDTH: usize = 80;
/// The divider never shrinks below this many dashes.
const MIN_DASHES: usize = 3;

/// Trait for rendering diagnostics into formatted output strings.
///
/// Implementations format diagnostics for different output targets:
/// terminal (human-readable) and JSON (machine-readable).
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics as ANSI-colored text blocks for the terminal.
///
/// Produces output like:
/// ```text
///     error: --- type-error --------------------------------------- marl-eval
///     in file: foo.marl (10:4)
///
///     expected a list
///
///         9|   y = []
///        10|   x = 5
///           |    ^
///        11|   z = 1
///
///     did you mean []?
/// ```
/// (escape sequences omitted). Blank separator lines consist of the left
/// margin only. Rendering never fails; malformed fields render literally.
pub struct TerminalRenderer {
    /// Name of the invoking program, shown at the end of the divider.
    pub program_name: Option<String>,
}

impl TerminalRenderer {
    /// Creates a terminal renderer.
    ///
    /// `program_name` is decided once by the host at startup and never
    /// changes afterwards.
    pub fn new(program_name: Option<String>) -> Self {
        Self { program_name }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        let tag = diag.level.tag();
        let program_name = self.program_name.as_deref().unwrap_or("");

        // Divider. The dash count pads the line out to the target width and
        // floors at MIN_DASHES once the header content alone exceeds it. The
        // tag length counts its escape bytes.
        let used = PREFIX.len() + tag.len() + 3 + diag.name.len() + program_name.len();
        let dash_count = if used > TARGET_WIDTH - MIN_DASHES {
            MIN_DASHES
        } else {
            TARGET_WIDTH - used
        };
        let dashes = "-".repeat(dash_count);
        out.push_str(&format!(
            "{PREFIX}{tag}{ANSI_BLUE} --- {} {} {}{ANSI_RESET}\n",
            diag.name, dashes, program_name
        ));

        // Location.
        if let Some(position) = &diag.position {
            if position.is_in_file() {
                let located = if diag.has_code_context() {
                    format!("{} {}", position.source_name, position)
                } else {
                    position.source_name.clone()
                };
                out.push_str(&format!(
                    "{PREFIX}in file: {}\n",
                    colorize(&located, ColorClass::Info)
                ));
            } else {
                out.push_str(&format!("{PREFIX}from command line argument\n"));
            }
            push_blank_line(&mut out);
        }

        // Description.
        out.push_str(&format!("{PREFIX}{}\n", diag.description));
        push_blank_line(&mut out);

        // Code snippet.
        if diag.has_code_context() {
            render_code_lines(&mut out, PREFIX, diag);
            push_blank_line(&mut out);
        }

        // Hint.
        if let Some(hint) = &diag.hint {
            out.push_str(&format!("{PREFIX}{hint}\n"));
            push_blank_line(&mut out);
        }

        out
    }
}

/// Renders diagnostics as pretty-printed JSON records.
///
/// The output round-trips through [`Diagnostic`]'s serde implementation, so
/// a record rendered by one tool can be re-read by another.
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        serde_json::to_string_pretty(diag).unwrap_or_else(|_| "{}".to_string())
    }
}

fn push_blank_line(out: &mut String) {
    out.push_str(PREFIX);
    out.push('\n');
}
