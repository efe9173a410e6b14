use crate::ast::{Formula, Term};
use crate::tableau::Quantified;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

/// Tracks which universals have been instantiated with which terms on a branch
#[derive(Debug, Clone, Default)]
pub struct Instances {
    /// every term seen on the branch, in the order it was seen
    terms: IndexSet<Term>,
    /// every universal active on the branch
    universals: IndexSet<Quantified>,
    /// whether each pairing has already been instantiated
    pairs: IndexMap<(Quantified, Term), bool>,
}

impl Instances {
    pub fn new() -> Instances {
        Instances::default()
    }
    pub fn has_universals(&self) -> bool {
        !self.universals.is_empty()
    }
    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }
    /// Record a term seen on the branch, pairing it with every active universal.
    /// Returns `false` if it was already known
    pub fn observe_term(&mut self, term: Term) -> bool {
        if !self.terms.insert(term.clone()) {
            return false;
        }
        for universal in self.universals.iter() {
            self.pairs.entry((universal.clone(), term.clone())).or_insert(false);
        }
        true
    }
    /// Record an active universal, pairing it with every known term, shortest first.
    /// Returns `false` if it was already known
    pub fn observe_universal(&mut self, universal: Quantified) -> bool {
        if !self.universals.insert(universal.clone()) {
            return false;
        }
        for term in self.terms.iter().sorted_by_key(|term| term.size()) {
            self.pairs.entry((universal.clone(), term.clone())).or_insert(false);
        }
        true
    }
    /// Take the first pairing not yet instantiated, mark it, and produce its instance
    pub fn next_unused(&mut self) -> Option<Formula> {
        let (universal, term) = self.pairs
            .iter_mut()
            .find(|(_, used)| !**used)
            .map(|(key, used)| {
                *used = true;
                key
            })?;
        debug!("instantiating {:?} with {}", universal.body, term);
        Some(universal.instantiate(term))
    }
}
