//! Product terms over single-character variables
//!
//! A [`Term`] is one AND-term of a sum-of-products expression. It maps each
//! variable it mentions to a polarity:
//! - `true` means the variable appears uncomplemented (e.g. `x`)
//! - `false` means the variable appears complemented (e.g. `~x`)
//!
//! A variable that is absent from the map is a don't-care for the term. This
//! is distinct from a `false` entry: `x` and `x~y` are different terms.
//!
//! Variables are kept in a [`BTreeMap`], so rendering always lists them in
//! ascending character order regardless of how the term was written.

mod error;


pub use error::TermParseError;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Marker that complements the variable following it
pub const COMPLEMENT: char = '~';

/// A product term: a conjunction of literals
///
/// # Examples
///
/// ```
/// use quine_logic::Term;
///
/// let term = Term::parse("x~yz").unwrap();
/// assert_eq!(term.len(), 3);
/// assert_eq!(term.ones(), 2);
/// assert_eq!(term.get('y'), Some(false));
/// assert_eq!(term.to_string(), "x~yz");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    literals: BTreeMap<char, bool>,
}

impl Term {
    /// Create the empty term (the constant TRUE, covers everything)
    pub fn new() -> Self {
        Term {
            literals: BTreeMap::new(),
        }
    }

    /// Parse a single product term
    ///
    /// The text is trimmed and scanned left to right. A `~` complements the
    /// character right after it; every other character is an uncomplemented
    /// variable. Repeating a variable with the same polarity has no effect,
    /// while repeating it with the opposite polarity removes it from the term.
    ///
    /// # Errors
    ///
    /// Returns [`TermParseError::DanglingComplement`] when a `~` is the last
    /// character of the term.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Term;
    ///
    /// assert_eq!(Term::parse("xx").unwrap(), Term::parse("x").unwrap());
    /// assert!(Term::parse("x~x").unwrap().is_empty());
    /// assert!(Term::parse("x~").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TermParseError> {
        let text = text.trim();
        let mut term = Term::new();
        let mut chars = text.chars().enumerate();

        while let Some((position, c)) = chars.next() {
            if c == COMPLEMENT {
                match chars.next() {
                    Some((_, var)) => term.add_occurrence(var, false),
                    None => {
                        return Err(TermParseError::DanglingComplement {
                            term: Arc::from(text),
                            position,
                        })
                    }
                }
            } else {
                term.add_occurrence(c, true);
            }
        }

        Ok(term)
    }

    /// Record one occurrence of a literal
    ///
    /// An occurrence of a variable already present with the opposite polarity
    /// cancels it.
    fn add_occurrence(&mut self, var: char, polarity: bool) {
        match self.literals.get(&var) {
            None => {
                self.literals.insert(var, polarity);
            }
            Some(&existing) if existing != polarity => {
                self.literals.remove(&var);
            }
            Some(_) => {}
        }
    }

    /// Number of variables mentioned by the term
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if the term mentions no variables (the constant TRUE)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Polarity of `var` in this term, or `None` if it is a don't-care
    pub fn get(&self, var: char) -> Option<bool> {
        self.literals.get(&var).copied()
    }

    /// Iterate over `(variable, polarity)` pairs in ascending variable order
    pub fn literals(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.literals.iter().map(|(&var, &polarity)| (var, polarity))
    }

    /// Iterate over the variables mentioned by the term in ascending order
    pub fn variables(&self) -> impl Iterator<Item = char> + '_ {
        self.literals.keys().copied()
    }

    /// Number of uncomplemented literals
    ///
    /// This is the grouping key of the reduction: only terms whose counts
    /// differ by exactly one can merge.
    pub fn ones(&self) -> usize {
        self.literals.values().filter(|&&polarity| polarity).count()
    }

    /// Check whether two terms can be merged
    ///
    /// Two terms combine iff they mention exactly the same variables and
    /// disagree on the polarity of exactly one of them. Terms over different
    /// variable sets never combine; absence is not a wildcard here.
    pub fn is_combinable(&self, other: &Term) -> bool {
        self.differing_variable(other).is_some()
    }

    /// The single variable on which two combinable terms disagree
    ///
    /// Returns `None` if the terms are not combinable.
    pub fn differing_variable(&self, other: &Term) -> Option<char> {
        if self.literals.len() != other.literals.len() {
            return None;
        }

        let mut differing = None;
        for (var, polarity) in &self.literals {
            match other.literals.get(var) {
                None => return None,
                Some(other_polarity) if other_polarity != polarity => {
                    if differing.is_some() {
                        return None;
                    }
                    differing = Some(*var);
                }
                Some(_) => {}
            }
        }
        differing
    }

    /// Merge two combinable terms, dropping the variable they disagree on
    ///
    /// # Panics
    ///
    /// Panics if the terms are not combinable (see [`Term::is_combinable`]).
    /// The reduction engine checks combinability before every merge, so this
    /// only fires on a broken internal invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Term;
    ///
    /// let a = Term::parse("x~yz").unwrap();
    /// let b = Term::parse("xyz").unwrap();
    /// assert_eq!(a.combine(&b).to_string(), "xz");
    /// ```
    pub fn combine(&self, other: &Term) -> Term {
        assert!(
            self.is_combinable(other),
            "cannot combine non-combinable terms {:?} and {:?}",
            self,
            other
        );

        let literals = self
            .literals
            .iter()
            .filter(|&(var, polarity)| other.literals.get(var) == Some(polarity))
            .map(|(&var, &polarity)| (var, polarity))
            .collect();
        Term { literals }
    }

    /// Display rank used to order the final expression
    ///
    /// Sum of the numeric values of the variable characters of the rendered
    /// term (`~` markers are skipped). ASCII digits count as 0-9, ASCII
    /// letters of either case as 10-35, and any other character as -1. This
    /// includes non-ASCII digits and letters such as `'Ａ'` or `'٣'`; the
    /// rank only affects display order.
    pub fn display_rank(&self) -> i64 {
        self.literals.keys().map(|&var| numeric_value(var)).sum()
    }

    /// Evaluate the term under a variable assignment
    ///
    /// Variables missing from the assignment are treated as `false`.
    pub fn evaluate(&self, assignment: &HashMap<char, bool>) -> bool {
        self.literals
            .iter()
            .all(|(var, &polarity)| assignment.get(var).copied().unwrap_or(false) == polarity)
    }
}

fn numeric_value(c: char) -> i64 {
    c.to_digit(36).map_or(-1, i64::from)
}

/// Build a term from literal occurrences
///
/// Occurrences follow the same rules as [`Term::parse`]: a repeated variable
/// with the opposite polarity cancels.
impl FromIterator<(char, bool)> for Term {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        let mut term = Term::new();
        for (var, polarity) in iter {
            term.add_occurrence(var, polarity);
        }
        term
    }
}

impl FromStr for Term {
    type Err = TermParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::parse(s)
    }
}

/// Renders the term in input syntax, e.g. `x~yz`
///
/// The empty term renders as the empty string.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, polarity) in &self.literals {
            if !polarity {
                write!(f, "{}", COMPLEMENT)?;
            }
            write!(f, "{}", var)?;
        }
        Ok(())
    }
}
