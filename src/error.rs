//! Parse errors for the strict `FromStr` entry points.
//!
//! The lenient resolver operations never fail; they return `None` or a
//! caller-supplied fallback. These errors only surface when a caller asks
//! for a strongly-typed value via `str::parse`.

use thiserror::Error;

/// Failure to parse an alignment token, pair, direction or layout direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token outside `top|center|middle|bottom|left|right`.
    #[error("unknown alignment token `{0}`")]
    UnknownToken(String),

    /// A direction outside `up|down|left|right`.
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),

    /// A layout direction outside `ltr|rtl`.
    #[error("unknown layout direction `{0}`")]
    UnknownLayoutDirection(String),

    /// An alignment pair needs exactly two tokens (or the `center` shorthand).
    #[error("expected 2 alignment tokens, found {0}")]
    TokenCount(usize),

    /// Two valid tokens that do not name a cell of the matrix (e.g. `top bottom`).
    #[error("`{0}` is not a cell of the alignment matrix")]
    NotAnAlignment(String),
}
