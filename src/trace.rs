//! Step-by-step record of a minimization run
//!
//! Every run owns a fresh [`Trace`]. The reduction engine appends
//! [`TraceStep`]s to it as it works, and the final expression is added once
//! the display order has been applied. Each step renders to exactly one line
//! of text.

use crate::term::Term;
use std::fmt;

/// Terminal line written when an iteration makes no change
pub const NO_FURTHER_REDUCTIONS: &str = "No further reductions found.";

/// Line written when the configured iteration cap stops the engine
pub const ITERATION_LIMIT_REACHED: &str = "Iteration limit reached.";

/// One recorded step of a minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    /// The term set at the start of an iteration, rendered as an expression
    Snapshot(String),
    /// Two terms merged into one
    Combination {
        /// Term in which the eliminated variable is uncomplemented
        left: Term,
        /// Term in which the eliminated variable is complemented
        right: Term,
        /// The merged term
        result: Term,
    },
    /// The term set after a non-terminal iteration
    Expansion(String),
    /// Blank separator between iterations
    Separator,
    /// The term set did not change: the fixed point was reached
    FixedPoint,
    /// The iteration cap was hit before the fixed point
    IterationLimit,
    /// The minimized expression in display order
    Final(String),
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Snapshot(expr) => write!(f, "{}", expr),
            TraceStep::Combination {
                left,
                right,
                result,
            } => write!(f, "{} + {} = {}", left, right, result),
            TraceStep::Expansion(expr) => write!(f, "Minterm Expansion: {}", expr),
            TraceStep::Separator => Ok(()),
            TraceStep::FixedPoint => write!(f, "{}", NO_FURTHER_REDUCTIONS),
            TraceStep::IterationLimit => write!(f, "{}", ITERATION_LIMIT_REACHED),
            TraceStep::Final(expr) => write!(f, "Final Expression: {}", expr),
        }
    }
}

/// Append-only log of [`TraceStep`]s
///
/// A disabled trace silently drops everything pushed to it, which lets the
/// engine record unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
    enabled: bool,
}

impl Trace {
    /// Create an empty, recording trace
    pub fn new() -> Self {
        Trace {
            steps: Vec::new(),
            enabled: true,
        }
    }

    /// Create a trace that records nothing
    pub fn disabled() -> Self {
        Trace {
            steps: Vec::new(),
            enabled: false,
        }
    }

    /// Whether pushed steps are kept
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a step (no-op when disabled)
    pub fn push(&mut self, step: TraceStep) {
        if self.enabled {
            self.steps.push(step);
        }
    }

    /// All recorded steps in order
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the recorded combinations as `(left, right, result)`
    pub fn combinations(&self) -> impl Iterator<Item = (&Term, &Term, &Term)> {
        self.steps.iter().filter_map(|step| match step {
            TraceStep::Combination {
                left,
                right,
                result,
            } => Some((left, right, result)),
            _ => None,
        })
    }

    /// Render every step to its line of text
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}
