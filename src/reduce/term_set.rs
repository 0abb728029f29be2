//! Ordered collection of product terms grouped by ones count

use crate::term::Term;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Terms kept sorted by ascending [`Term::ones`]
///
/// Insertion is stable: a new term goes after every existing term with the
/// same ones count. Sets built with [`TermSet::from_terms`] hold distinct
/// terms; the reduction engine restores distinctness with
/// [`TermSet::dedup`] after each round of insertions.
///
/// # Examples
///
/// ```
/// use quine_logic::{Term, TermSet};
///
/// let set = TermSet::from_terms(["xyz", "x~y", "x~yz", "x~y"].map(|t| Term::parse(t).unwrap()));
///
/// // The duplicate `x~y` is gone and terms are grouped by ones count
/// assert_eq!(set.to_string(), "x~y + x~yz + xyz");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<Term>,
}

impl TermSet {
    /// Create an empty term set
    pub fn new() -> Self {
        TermSet { terms: Vec::new() }
    }

    /// Build a set of distinct terms in ones-count order
    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut set = TermSet::new();
        for term in terms {
            set.insert(term);
        }
        set.dedup();
        set
    }

    /// Insert a term after all terms with an equal or lower ones count
    pub fn insert(&mut self, term: Term) {
        let ones = term.ones();
        let index = self.terms.partition_point(|t| t.ones() <= ones);
        self.terms.insert(index, term);
    }

    /// Remove the first occurrence of each entry of `obsolete`
    ///
    /// A term listed `n` times loses up to `n` copies. Entries with no
    /// remaining occurrence are ignored.
    pub fn remove_each(&mut self, obsolete: &[Term]) {
        for term in obsolete {
            if let Some(index) = self.terms.iter().position(|t| t == term) {
                self.terms.remove(index);
            }
        }
    }

    /// Drop repeated terms, keeping the first occurrence of each
    pub fn dedup(&mut self) {
        let mut seen = HashSet::with_capacity(self.terms.len());
        self.terms.retain(|term| seen.insert(term.clone()));
    }

    /// Check whether both sets hold the same terms, ignoring order
    pub fn set_eq(&self, other: &TermSet) -> bool {
        let ours: HashSet<&Term> = self.terms.iter().collect();
        let theirs: HashSet<&Term> = other.terms.iter().collect();
        ours == theirs
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the set holds no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if `term` is in the set
    pub fn contains(&self, term: &Term) -> bool {
        self.terms.contains(term)
    }

    /// Iterate over the terms in ones-count order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// The terms in ones-count order
    pub fn as_slice(&self) -> &[Term] {
        &self.terms
    }

    /// Consume the set, returning its terms in ones-count order
    pub fn into_vec(self) -> Vec<Term> {
        self.terms
    }

    /// All variables mentioned by any term
    pub fn variables(&self) -> BTreeSet<char> {
        self.terms.iter().flat_map(|term| term.variables()).collect()
    }

    /// Largest number of variables in any single term
    pub fn max_term_len(&self) -> usize {
        self.terms.iter().map(Term::len).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Renders the terms joined with `" + "` in their current order
impl fmt::Display for TermSet {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn term(text: &str) -> Term {
        Term::parse(text).unwrap()
    }

    fn rendered(set: &TermSet) -> Vec<String> {
        set.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_insert_groups_by_ones() {
        let mut set = TermSet::new();
        set.insert(term("xyz"));
        set.insert(term("x~yz"));
        set.insert(term("x~y"));
        set.insert(term("x~y~z"));
        assert_eq!(rendered(&set), vec!["x~y", "x~y~z", "x~yz", "xyz"]);
    }

    #[test]
    fn test_insert_is_stable_within_group() {
        let mut set = TermSet::new();
        set.insert(term("a"));
        set.insert(term("b"));
        set.insert(term("~c"));
        set.insert(term("d"));
        assert_eq!(rendered(&set), vec!["~c", "a", "b", "d"]);
    }

    #[test]
    fn test_from_terms_dedups() {
        let set = TermSet::from_terms([term("xy"), term("xy"), term("yx")]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_each_removes_one_copy_per_entry() {
        let mut set = TermSet::new();
        set.insert(term("xy"));
        set.insert(term("x"));
        set.insert(term("xy"));

        set.remove_each(&[term("xy")]);
        assert_eq!(rendered(&set), vec!["x", "xy"]);

        set.remove_each(&[term("xy"), term("xy"), term("z")]);
        assert_eq!(rendered(&set), vec!["x"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut set = TermSet::new();
        set.insert(term("a"));
        set.insert(term("b"));
        set.insert(term("a"));
        set.dedup();
        assert_eq!(rendered(&set), vec!["a", "b"]);
    }

    #[test]
    fn test_set_eq_ignores_order() {
        let mut left = TermSet::new();
        left.insert(term("a"));
        left.insert(term("b"));

        let mut right = TermSet::new();
        right.insert(term("b"));
        right.insert(term("a"));

        assert_ne!(left, right);
        assert!(left.set_eq(&right));

        right.insert(term("c"));
        assert!(!left.set_eq(&right));
    }

    #[test]
    fn test_display() {
        let set = TermSet::from_terms([term("xz"), term("x~y")]);
        assert_eq!(set.to_string(), "x~y + xz");
        assert_eq!(TermSet::new().to_string(), "");
    }

    #[test]
    fn test_variables_and_max_len() {
        let set = TermSet::from_terms([term("xz"), term("x~y~w")]);
        assert_eq!(set.variables().into_iter().collect::<String>(), "wxyz");
        assert_eq!(set.max_term_len(), 3);
        assert_eq!(TermSet::new().max_term_len(), 0);
    }
}
