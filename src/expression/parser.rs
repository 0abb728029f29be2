//! Parsing support for sum-of-products expressions

use super::error::ExpressionParseError;
use super::{SopExpr, TERM_SEPARATOR};
use crate::term::Term;
use std::str::FromStr;
use std::sync::Arc;

impl SopExpr {
    /// Parse an expression from a string
    ///
    /// The input is split on `+` and every piece is trimmed and parsed with
    /// [`Term::parse`]. Terms keep their input order; duplicates are kept
    /// too and only collapse once the expression is minimized.
    ///
    /// # Errors
    ///
    /// - [`ExpressionParseError::EmptyExpression`] for empty or all-whitespace input
    /// - [`ExpressionParseError::EmptyTerm`] when a piece between separators is blank
    /// - [`ExpressionParseError::MalformedTerm`] when a piece fails to parse
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        if input.trim().is_empty() {
            return Err(ExpressionParseError::EmptyExpression {
                input: Arc::from(input),
            });
        }

        let terms = input
            .split(TERM_SEPARATOR)
            .enumerate()
            .map(|(index, piece)| parse_term(input, index, piece))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SopExpr { terms })
    }
}

fn parse_term(input: &str, index: usize, piece: &str) -> Result<Term, ExpressionParseError> {
    let piece = piece.trim();
    if piece.is_empty() {
        return Err(ExpressionParseError::EmptyTerm {
            input: Arc::from(input),
            index,
        });
    }

    Term::parse(piece).map_err(|source| ExpressionParseError::MalformedTerm {
        input: Arc::from(input),
        index,
        source,
    })
}

impl FromStr for SopExpr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SopExpr::parse(s)
    }
}
