//! Minimization pipeline and the [`Minimizable`] trait
//!
//! A request runs parse → reduce → display order → render. Each request
//! builds its own [`TermSet`](crate::TermSet) and [`Trace`], so concurrent
//! requests never share state.

use crate::error::MinimizationError;
use crate::expression::SopExpr;
use crate::reduce::Reducer;
use crate::trace::{Trace, TraceStep};
use crate::QmConfig;
use log::{debug, info};

/// Result of one minimization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimization {
    expression: SopExpr,
    trace: Trace,
    iterations: usize,
    reached_fixed_point: bool,
}

impl Minimization {
    /// The minimized expression
    pub fn expression(&self) -> &SopExpr {
        &self.expression
    }

    /// Consume the result, keeping only the minimized expression
    pub fn into_expression(self) -> SopExpr {
        self.expression
    }

    /// The minimized expression rendered as text, e.g. `x~y + xz`
    pub fn final_expression(&self) -> String {
        self.expression.to_string()
    }

    /// The recorded steps
    ///
    /// Empty when the run was configured with `trace: false`.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Reduction iterations performed, including the final unchanged one
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// `false` only when `max_iterations` stopped the run early
    pub fn reached_fixed_point(&self) -> bool {
        self.reached_fixed_point
    }

    /// The trace as lines of text, ending with `Final Expression: …`
    ///
    /// The final line is present even when tracing was disabled.
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines = self.trace.lines();
        if !self.trace.is_enabled() {
            lines.push(TraceStep::Final(self.final_expression()).to_string());
        }
        lines
    }
}

/// Types that can be minimized by term combination
///
/// All methods take `&self` and return a new [`Minimization`], leaving the
/// input untouched.
///
/// ```
/// use quine_logic::{Minimizable, SopExpr};
///
/// # fn main() -> std::io::Result<()> {
/// let expr = SopExpr::parse("xy + x~y")?;
/// let result = expr.minimize()?;
///
/// assert_eq!(result.final_expression(), "x");
/// assert_eq!(expr.len(), 2);
///
/// // Plain strings are parsed first
/// assert_eq!("ab + a~b".minimize()?.final_expression(), "a");
/// # Ok(())
/// # }
/// ```
pub trait Minimizable {
    /// Minimize with the default [`QmConfig`]
    fn minimize(&self) -> Result<Minimization, MinimizationError> {
        let config = QmConfig::default();
        self.minimize_with_config(&config)
    }

    /// Minimize with a custom configuration
    ///
    /// This is the method implementations must provide.
    fn minimize_with_config(&self, config: &QmConfig) -> Result<Minimization, MinimizationError>;
}

impl Minimizable for SopExpr {
    fn minimize_with_config(&self, config: &QmConfig) -> Result<Minimization, MinimizationError> {
        let mut trace = if config.trace {
            Trace::new()
        } else {
            Trace::disabled()
        };

        let terms = self.to_term_set();
        debug!("minimizing {} ({} distinct terms)", self, terms.len());

        let reduction = Reducer::new()
            .with_max_iterations(config.max_iterations)
            .run(terms, &mut trace);

        let mut expression = SopExpr::from_terms(reduction.terms.into_vec())
            .map_err(|_| MinimizationError::EmptyExpression)?;
        if config.display_order {
            expression.sort_for_display();
        }
        trace.push(TraceStep::Final(expression.to_string()));

        if config.summary {
            info!(
                "{} -> {} ({} terms -> {} terms, {} iterations)",
                self,
                expression,
                self.len(),
                expression.len(),
                reduction.iterations
            );
        }

        Ok(Minimization {
            expression,
            trace,
            iterations: reduction.iterations,
            reached_fixed_point: reduction.reached_fixed_point,
        })
    }
}

impl Minimizable for str {
    fn minimize_with_config(&self, config: &QmConfig) -> Result<Minimization, MinimizationError> {
        SopExpr::parse(self)?.minimize_with_config(config)
    }
}

/// Parse and minimize `input` with the default configuration
///
/// # Errors
///
/// Returns [`MinimizationError::Parse`] if the input is empty or contains a
/// malformed term.
///
/// # Examples
///
/// ```
/// use quine_logic::minimize_str;
///
/// let result = minimize_str("xy + x~y").unwrap();
/// assert_eq!(
///     result.trace_lines(),
///     vec![
///         "x~y + xy",
///         "xy + x~y = x",
///         "Minterm Expansion: x",
///         "",
///         "x",
///         "No further reductions found.",
///         "Final Expression: x",
///     ]
/// );
///
/// assert!(minimize_str("x + ~").is_err());
/// ```
pub fn minimize_str(input: &str) -> Result<Minimization, MinimizationError> {
    input.minimize()
}
