//! Source-context rendering: numbered code lines and the column caret.

use crate::color::{colorize, ColorClass};
use crate::diagnostic::Diagnostic;

/// Appends the numbered source lines around a diagnostic's position to `out`.
///
/// Emits up to four lines, each starting with `prefix`: the previous source
/// line, the offending line, a caret pointing at the offending column (only
/// when the column is known), and the next source line. Line numbers are
/// right-justified in a fixed five-character field; a wider number simply
/// widens its line. Emits nothing when the diagnostic carries no position.
pub fn render_code_lines(out: &mut String, prefix: &str, diag: &Diagnostic) {
    let Some(position) = &diag.position else {
        return;
    };

    if let Some(previous) = &diag.previous_line {
        out.push_str(&format!(
            "{} {:>5}| {}\n",
            prefix,
            position.line.saturating_sub(1),
            previous
        ));
    }

    out.push_str(&format!(
        "{} {:>5}| {}\n",
        prefix, position.line, diag.current_line
    ));

    if position.has_column() {
        let spaces = " ".repeat(position.column as usize);
        out.push_str(&format!(
            "{}      |{}{}\n",
            prefix,
            spaces,
            colorize("^", ColorClass::Error)
        ));
    }

    if let Some(next) = &diag.next_line {
        out.push_str(&format!(
            "{} {:>5}| {}\n",
            prefix,
            position.line.saturating_add(1),
            next
        ));
    }
}
