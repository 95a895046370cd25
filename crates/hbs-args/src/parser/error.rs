//! Parse error types for helper argument strings.

use thiserror::Error;

/// An error that occurred while parsing a helper argument string.
///
/// Every variant is fatal: no partial argument list is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Some remaining text matched neither a named nor a positional argument.
    #[error("malformed arguments string: \"{input}\"")]
    Malformed { input: String },

    /// A positional argument appeared after a named one.
    #[error("positional arguments cannot follow named arguments")]
    PositionalAfterNamed { input: String },

    /// A name was given twice while duplicates are rejected.
    #[error("duplicate named argument \"{name}\"")]
    DuplicateName { name: String, input: String },
}

impl ParseError {
    /// The full argument string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::Malformed { input }
            | ParseError::PositionalAfterNamed { input }
            | ParseError::DuplicateName { input, .. } => input,
        }
    }
}
