//! Error types for sum-of-products expression parsing

use crate::term::TermParseError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when parsing a sum-of-products expression
///
/// This error type is returned by [`SopExpr::parse`](super::SopExpr::parse)
/// and [`SopExpr::from_terms`](super::SopExpr::from_terms).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// A term could not be parsed
    MalformedTerm {
        /// The original input string
        input: Arc<str>,
        /// Zero-based index of the term among the `+`-separated terms
        index: usize,
        /// Why the term failed to parse
        source: TermParseError,
    },
    /// A `+` separator with nothing between it and its neighbour, e.g. `"x + "`
    EmptyTerm {
        /// The original input string
        input: Arc<str>,
        /// Zero-based index of the empty term
        index: usize,
    },
    /// The expression has no terms at all
    EmptyExpression {
        /// The original input string
        input: Arc<str>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::MalformedTerm {
                input,
                index,
                source,
            } => write!(
                f,
                "Malformed term {} in expression: {}. Input: {:?}",
                index, source, input
            ),
            ExpressionParseError::EmptyTerm { input, index } => write!(
                f,
                "Term {} of the expression is empty. Input: {:?}",
                index, input
            ),
            ExpressionParseError::EmptyExpression { input } => {
                write!(f, "Expression contains no terms. Input: {:?}", input)
            }
        }
    }
}

impl std::error::Error for ExpressionParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpressionParseError::MalformedTerm { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_malformed_term_has_source() {
        let err = ExpressionParseError::MalformedTerm {
            input: Arc::from("xy + z~"),
            index: 1,
            source: TermParseError::DanglingComplement {
                term: Arc::from("z~"),
                position: 1,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("Malformed term 1"));
        assert!(msg.contains("position 1"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_empty_expression_message() {
        let err = ExpressionParseError::EmptyExpression {
            input: Arc::from("   "),
        };
        assert!(err.to_string().contains("no terms"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_expression_parse_error_to_io_error() {
        let err = ExpressionParseError::EmptyTerm {
            input: Arc::from("x + "),
            index: 1,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
