//! Diagnostic levels with an explicit fallback for unrecognized values.

use crate::color::{colorize, ColorClass};
use serde::{Deserialize, Serialize};

/// The level of a diagnostic message.
///
/// `Error` and `Warning` are the levels Marl tools emit today. A record
/// produced by a newer tool may carry a numeric level this version does not
/// know; such values deserialize into [`Other`](Level::Other) and render as
/// a literal fallback tag instead of aborting the render.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A problem that prevents the tool from producing a result.
    Error,
    /// A suspicious condition that does not stop the tool.
    Warning,
    /// An unrecognized level value, preserved verbatim.
    #[serde(untagged)]
    Other(u32),
}

impl Level {
    /// Returns `true` if this level is [`Error`](Level::Error).
    pub fn is_error(self) -> bool {
        self == Level::Error
    }

    /// Returns the tag that opens this level's header line.
    ///
    /// `Error` and `Warning` render as colored keywords. An unrecognized
    /// level renders as the uncolored literal `invalid error level: <value>`.
    pub fn tag(self) -> String {
        match self {
            Level::Error => colorize("error:", ColorClass::Error),
            Level::Warning => colorize("warning:", ColorClass::Warning),
            Level::Other(value) => format!("invalid error level: {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ANSI_RED, ANSI_RESET, ANSI_YELLOW};

    #[test]
    fn is_error() {
        assert!(Level::Error.is_error());
        assert!(!Level::Warning.is_error());
        assert!(!Level::Other(7).is_error());
    }

    #[test]
    fn error_tag_is_colored() {
        assert_eq!(Level::Error.tag(), format!("{ANSI_RED}error:{ANSI_RESET}"));
    }

    #[test]
    fn warning_tag_is_colored() {
        assert_eq!(
            Level::Warning.tag(),
            format!("{ANSI_YELLOW}warning:{ANSI_RESET}")
        );
    }

    #[test]
    fn unknown_level_tag_is_literal() {
        assert_eq!(Level::Other(5).tag(), "invalid error level: 5");
    }

    #[test]
    fn serde_known_levels() {
        assert_eq!(serde_json::to_string(&Level::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Level::Warning).unwrap(),
            "\"warning\""
        );
        let level: Level = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Level::Warning);
    }

    #[test]
    fn serde_unknown_level() {
        let level: Level = serde_json::from_str("42").unwrap();
        assert_eq!(level, Level::Other(42));
        assert_eq!(serde_json::to_string(&level).unwrap(), "42");
    }
}
