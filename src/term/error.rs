//! Error types for product-term parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when parsing a single product term
///
/// This error type is returned by [`Term::parse`](super::Term::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermParseError {
    /// A complement marker `~` was not followed by a variable
    DanglingComplement {
        /// The term text that failed to parse
        term: Arc<str>,
        /// Character position of the offending `~`
        position: usize,
    },
}

impl TermParseError {
    /// Character position within the term where parsing failed
    pub fn position(&self) -> usize {
        match self {
            TermParseError::DanglingComplement { position, .. } => *position,
        }
    }
}

impl fmt::Display for TermParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermParseError::DanglingComplement { term, position } => write!(
                f,
                "Complement marker '~' at position {} is not followed by a variable. Term: {:?}",
                position, term
            ),
        }
    }
}

impl std::error::Error for TermParseError {}

impl From<TermParseError> for io::Error {
    fn from(err: TermParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
