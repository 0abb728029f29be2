//! Error types for the minimization pipeline
//!
//! Parsing errors carry their own detail types ([`TermParseError`],
//! [`ExpressionParseError`]); this module wraps them, together with the
//! failures of the pipeline itself, into a single [`MinimizationError`].

use crate::expression::ExpressionParseError;
use crate::term::TermParseError;
use std::fmt;
use std::io;

/// The main error type for a minimization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// The input expression could not be parsed
    ///
    /// Reported before any reduction starts.
    Parse(ExpressionParseError),

    /// The reduction produced no terms, so there is nothing to render
    EmptyExpression,
}

impl MinimizationError {
    /// Check if the error comes from a malformed or empty term
    pub fn is_malformed_term(&self) -> bool {
        matches!(
            self,
            MinimizationError::Parse(
                ExpressionParseError::MalformedTerm { .. } | ExpressionParseError::EmptyTerm { .. }
            )
        )
    }

    /// Check if the error means there were no terms at all
    pub fn is_empty_expression(&self) -> bool {
        matches!(
            self,
            MinimizationError::EmptyExpression
                | MinimizationError::Parse(ExpressionParseError::EmptyExpression { .. })
        )
    }

    /// The term-level parse failure, if that is what caused this error
    pub fn term_error(&self) -> Option<&TermParseError> {
        match self {
            MinimizationError::Parse(ExpressionParseError::MalformedTerm { source, .. }) => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::Parse(e) => write!(f, "{}", e),
            MinimizationError::EmptyExpression => {
                write!(f, "Minimization produced no terms to render")
            }
        }
    }
}

impl std::error::Error for MinimizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizationError::Parse(e) => Some(e),
            MinimizationError::EmptyExpression => None,
        }
    }
}

impl From<ExpressionParseError> for MinimizationError {
    fn from(err: ExpressionParseError) -> Self {
        MinimizationError::Parse(err)
    }
}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        match err {
            MinimizationError::Parse(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            MinimizationError::EmptyExpression => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}
