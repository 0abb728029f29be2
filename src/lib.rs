//! # Quine-McCluskey Term Combination
//!
//! This crate minimizes sum-of-products boolean expressions by repeatedly
//! merging pairs of product terms that differ in the polarity of exactly one
//! variable, the first phase of the classic Quine-McCluskey procedure. Every
//! merge is recorded, so a run produces both the minimized expression and a
//! readable trace of how it was reached.
//!
//! ## Expression Syntax
//!
//! - Variables are single characters (case-sensitive).
//! - A product term is a run of variables, e.g. `xyz`.
//! - A preceding `~` complements a variable, e.g. `x~y`.
//! - Terms are joined with `+`; whitespace around terms is ignored.
//!
//! Writing a variable twice with opposite polarity inside one term drops it
//! from that term, so `x~x` is the constant-true term.
//!
//! ## Quick Start
//!
//! ```
//! use quine_logic::minimize_str;
//!
//! # fn main() -> Result<(), quine_logic::MinimizationError> {
//! let result = minimize_str("xyz + x~yz + x~y + x~y~z")?;
//! assert_eq!(result.final_expression(), "x~y + xz");
//!
//! for line in result.trace_lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with Parsed Expressions
//!
//! [`SopExpr`] is the parsed form of an expression. It implements the
//! [`Minimizable`] trait, which is the entry point for custom configuration:
//!
//! ```
//! use quine_logic::{Minimizable, QmConfig, SopExpr};
//!
//! # fn main() -> std::io::Result<()> {
//! let expr: SopExpr = "xy + x~y".parse()?;
//!
//! let config = QmConfig {
//!     trace: false,
//!     ..Default::default()
//! };
//! let result = expr.minimize_with_config(&config)?;
//!
//! assert_eq!(result.final_expression(), "x");
//! assert!(result.expression().equivalent_to(&expr));
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! There is no global state. Each minimization owns its term set and trace,
//! so independent runs can execute on separate threads without coordination.

pub mod error;
pub mod expression;
pub mod minimize;
pub mod reduce;
pub mod term;
pub mod trace;

// Re-export high-level public API
pub use error::MinimizationError;
pub use expression::{ExpressionParseError, SopExpr};
pub use minimize::{minimize_str, Minimizable, Minimization};
pub use reduce::{Reducer, Reduction, TermSet};
pub use term::{Term, TermParseError};
pub use trace::{Trace, TraceStep};

/// Configuration for a minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmConfig {
    /// Record every reduction step in the returned trace
    pub trace: bool,
    /// Sort the resulting terms by display rank
    pub display_order: bool,
    /// Log a one-line summary of the run at info level
    pub summary: bool,
    /// Stop after this many iterations even if a fixed point was not reached
    pub max_iterations: Option<usize>,
}

impl Default for QmConfig {
    fn default() -> Self {
        QmConfig {
            trace: true,
            display_order: true,
            summary: false,
            max_iterations: None,
        }
    }
}

impl QmConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
