//! Sum-of-products expressions
//!
//! [`SopExpr`] is an OR of [`Term`]s. It is the parsed form of user input and
//! the form in which minimization results are returned.
//!
//! # Parsing
//!
//! ```
//! use quine_logic::SopExpr;
//!
//! # fn main() -> std::io::Result<()> {
//! let expr = SopExpr::parse("xyz + x~yz + x~y + x~y~z")?;
//! assert_eq!(expr.len(), 4);
//! assert_eq!(expr.to_string(), "xyz + x~yz + x~y + x~y~z");
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluating
//!
//! ```
//! use quine_logic::SopExpr;
//! use std::collections::HashMap;
//!
//! # fn main() -> std::io::Result<()> {
//! let expr = SopExpr::parse("xy + ~z")?;
//!
//! let mut assignment = HashMap::new();
//! assignment.insert('x', true);
//! assignment.insert('y', false);
//! assignment.insert('z', false);
//! assert!(expr.evaluate(&assignment));
//!
//! assert!(expr.equivalent_to(&SopExpr::parse("~z + yx")?));
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod parser;


pub use error::ExpressionParseError;

use crate::reduce::TermSet;
use crate::term::Term;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Separator between the terms of an expression
pub const TERM_SEPARATOR: char = '+';

/// A sum-of-products expression with at least one term
///
/// Terms keep the order in which they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SopExpr {
    terms: Vec<Term>,
}

impl SopExpr {
    /// Create an expression from a list of terms
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionParseError::EmptyExpression`] if `terms` is empty.
    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Result<Self, ExpressionParseError> {
        let terms: Vec<Term> = terms.into_iter().collect();
        if terms.is_empty() {
            return Err(ExpressionParseError::EmptyExpression {
                input: Arc::from(""),
            });
        }
        Ok(SopExpr { terms })
    }

    /// The terms in expression order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false`: an expression has at least one term
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// All variables mentioned by any term, in ascending order
    pub fn variables(&self) -> BTreeSet<char> {
        self.terms.iter().flat_map(|term| term.variables()).collect()
    }

    /// Collect the distinct terms into a ones-ordered [`TermSet`]
    pub fn to_term_set(&self) -> TermSet {
        TermSet::from_terms(self.terms.iter().cloned())
    }
}
