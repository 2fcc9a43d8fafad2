//! Diagnostic rendering for Marl tools.
//!
//! This crate turns structured [`Diagnostic`] records into ANSI-colored
//! terminal blocks: a dashed header divider, the source location, the
//! description, a numbered code snippet with a caret pointing at the
//! offending column, and an optional hint. [`DiagnosticRenderer`]
//! implementations produce either the terminal form or machine-readable
//! JSON.
//!
//! Rendering is pure and infallible: records are immutable values supplied
//! fully formed by the producing tool, optional fields silently suppress
//! their output section, and unrecognized level values render as a literal
//! fallback instead of aborting.

#![warn(missing_docs)]

pub mod color;
pub mod diagnostic;
pub mod level;
pub mod position;
pub mod renderer;
pub mod snippet;

pub use color::{colorize, ColorClass};
pub use diagnostic::Diagnostic;
pub use level::Level;
pub use position::SourcePosition;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TerminalRenderer};
