//! Fixed-point reduction engine
//!
//! The [`Reducer`] repeatedly merges pairs of terms that differ in exactly one
//! variable's polarity until an iteration leaves the term set unchanged.
//!
//! # One Iteration
//!
//! 1. Snapshot the current [`TermSet`] and record its rendering.
//! 2. Scan every pair `(i, j)` with `i <= j`. Pairs whose ones counts differ
//!    by exactly one and that pass [`Term::is_combinable`] are merged; both
//!    inputs become obsolete. A term may take part in several merges.
//! 3. Insert the merged terms by ones count, remove one occurrence of a term
//!    per merge it took part in and drop duplicates. A term that is merged
//!    and also produced in the same iteration can therefore survive.
//! 4. Stop if the result holds the same terms as the snapshot; otherwise
//!    record the expansion and start the next iteration.
//!
//! Every merge removes one variable, so with `V` distinct variables at most
//! `V` iterations change anything and the engine always terminates.

mod term_set;


pub use term_set::TermSet;

use crate::term::Term;
use crate::trace::{Trace, TraceStep};
use log::{debug, trace, warn};

/// Outcome of a reduction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Terms at the fixed point, in ones-count order
    pub terms: TermSet,
    /// Iterations performed, including the final unchanged one
    pub iterations: usize,
    /// `false` only when the iteration cap stopped the run early
    pub reached_fixed_point: bool,
}

/// Terms produced by one pairwise scan
#[derive(Debug, Default)]
struct ScanResult {
    combined: Vec<Term>,
    /// One entry per merge a term took part in
    obsolete: Vec<Term>,
}

/// The term-combination engine
///
/// # Examples
///
/// ```
/// use quine_logic::{Reducer, Term, TermSet, Trace};
///
/// let terms = TermSet::from_terms(["xy", "x~y"].map(|t| Term::parse(t).unwrap()));
/// let mut trace = Trace::new();
///
/// let reduction = Reducer::new().run(terms, &mut trace);
///
/// assert_eq!(reduction.terms.to_string(), "x");
/// assert_eq!(reduction.iterations, 2);
/// assert_eq!(trace.combinations().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reducer {
    max_iterations: Option<usize>,
}

impl Reducer {
    /// Create a reducer that runs until the fixed point
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after `limit` iterations even without a fixed point
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Reduce `terms` to a fixed point, recording each step into `trace`
    pub fn run(&self, terms: TermSet, trace: &mut Trace) -> Reduction {
        let mut terms = terms;
        let mut iterations = 0;

        loop {
            if self.max_iterations.is_some_and(|limit| iterations >= limit) {
                warn!(
                    "stopping after {} iterations without reaching a fixed point",
                    iterations
                );
                trace.push(TraceStep::IterationLimit);
                return Reduction {
                    terms,
                    iterations,
                    reached_fixed_point: false,
                };
            }
            iterations += 1;

            let snapshot = terms.clone();
            trace.push(TraceStep::Snapshot(snapshot.to_string()));
            debug!("iteration {}: {} terms: {}", iterations, snapshot.len(), snapshot);

            let ScanResult { combined, obsolete } = scan_pairs(&snapshot, trace);

            for term in combined {
                terms.insert(term);
            }
            terms.remove_each(&obsolete);
            terms.dedup();

            if terms.set_eq(&snapshot) {
                debug!("fixed point after {} iterations", iterations);
                trace.push(TraceStep::FixedPoint);
                return Reduction {
                    terms,
                    iterations,
                    reached_fixed_point: true,
                };
            }

            trace.push(TraceStep::Expansion(terms.to_string()));
            trace.push(TraceStep::Separator);
        }
    }
}

/// Merge every combinable pair of `terms`
fn scan_pairs(terms: &TermSet, steps: &mut Trace) -> ScanResult {
    let mut result = ScanResult::default();
    let terms = terms.as_slice();

    for (i, first) in terms.iter().enumerate() {
        let first_ones = first.ones();
        for second in &terms[i..] {
            let second_ones = second.ones();
            if first_ones.abs_diff(second_ones) != 1 {
                trace!(
                    "skip {} / {}: {} vs {} ones",
                    first,
                    second,
                    first_ones,
                    second_ones
                );
                continue;
            }
            if !first.is_combinable(second) {
                continue;
            }

            let combined = first.combine(second);
            let (left, right) = if first_ones > second_ones {
                (first, second)
            } else {
                (second, first)
            };
            trace!("{} + {} = {}", left, right, combined);
            steps.push(TraceStep::Combination {
                left: left.clone(),
                right: right.clone(),
                result: combined.clone(),
            });

            result.obsolete.push(first.clone());
            result.obsolete.push(second.clone());
            result.combined.push(combined);
        }
    }

    result
}
