//! Evaluation and equivalence checking for expressions

use super::SopExpr;
use std::collections::HashMap;

impl SopExpr {
    /// Evaluate the expression under a variable assignment
    ///
    /// The expression is true when any of its terms is true. Variables
    /// missing from the assignment are treated as `false`.
    pub fn evaluate(&self, assignment: &HashMap<char, bool>) -> bool {
        self.terms.iter().any(|term| term.evaluate(assignment))
    }

    /// Check if two expressions denote the same boolean function
    ///
    /// Compares both expressions on every assignment of the union of their
    /// variables, so the cost is exponential in the number of variables.
    /// Intended for checking minimization results on small inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::SopExpr;
    ///
    /// let original = SopExpr::parse("xy + x~y").unwrap();
    /// let reduced = SopExpr::parse("x").unwrap();
    /// assert!(original.equivalent_to(&reduced));
    /// assert!(!original.equivalent_to(&SopExpr::parse("y").unwrap()));
    /// ```
    pub fn equivalent_to(&self, other: &SopExpr) -> bool {
        let mut variables = self.variables();
        variables.extend(other.variables());
        let variables: Vec<char> = variables.into_iter().collect();

        let mut values = vec![false; variables.len()];
        loop {
            let assignment: HashMap<char, bool> =
                variables.iter().copied().zip(values.iter().copied()).collect();
            if self.evaluate(&assignment) != other.evaluate(&assignment) {
                return false;
            }

            // Advance to the next assignment, binary-counter style
            let mut carry = true;
            for value in values.iter_mut() {
                if !carry {
                    break;
                }
                carry = *value;
                *value = !*value;
            }
            if carry {
                return true;
            }
        }
    }
}
