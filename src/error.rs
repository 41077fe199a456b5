use thiserror::Error;

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons `parse` refuses an input.
///
/// Malformed individual tags never produce an error; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is empty or whitespace only.
    #[error("JSDoc string cannot be empty")]
    Empty,

    /// No `/** ... */` block and no leading `*` decoration.
    #[error("Invalid JSDoc comment format: must be wrapped in /** */")]
    InvalidFormat,
}
