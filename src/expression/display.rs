//! Display formatting and display ordering for expressions

use super::SopExpr;
use crate::term::Term;
use std::fmt;

impl SopExpr {
    /// Reorder the terms by ascending [`Term::display_rank`]
    ///
    /// The sort is stable, so terms with equal rank keep their relative order.
    /// Ordering is cosmetic and never changes the function the expression
    /// denotes.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::SopExpr;
    ///
    /// let mut expr = SopExpr::parse("xz + x~y").unwrap();
    /// expr.sort_for_display();
    /// assert_eq!(expr.to_string(), "x~y + xz");
    /// ```
    pub fn sort_for_display(&mut self) {
        self.terms.sort_by_key(Term::display_rank);
    }
}

/// Renders the terms joined with `" + "`, e.g. `x~y + xz`
impl fmt::Display for SopExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
