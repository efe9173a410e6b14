mod rules;
pub use rules::*;

mod trail;
pub use trail::*;

mod instances;
pub use instances::*;

use crate::ast::{any_existing_term, fresh_variable, Formula, Term};

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::VecDeque;
use std::fmt;

/// One branch of a tableau, and everything below it
#[derive(Debug, Clone)]
pub struct Tableau {
    /// formulas placed on this branch, in order
    nodes: Vec<Formula>,
    /// formulas waiting to be placed
    stack: VecDeque<Formula>,
    /// disjunctions waiting for the branch to split on them
    skip: VecDeque<Disjunction>,
    /// formulas placed on the ancestors of this branch
    prev: Trail,
    junction: Option<Box<(Tableau, Tableau)>>,
    instances: Instances,
    /// every node before this index has been checked for contradictions
    checked: usize,
}

/// How a branch ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// the branch reached a contradiction
    Closed,
    /// the branch is saturated without a contradiction
    Open,
    /// the branch split in two
    Branched,
}

/// A limit on the number of steps taken across a whole tableau
#[derive(Debug, Clone)]
pub struct Budget {
    remaining: Option<usize>,
    exhausted: bool,
}

impl Budget {
    pub fn unlimited() -> Budget {
        Budget { remaining: None, exhausted: false }
    }
    pub fn limited(steps: usize) -> Budget {
        Budget { remaining: Some(steps), exhausted: false }
    }
    pub fn from_limit(limit: Option<usize>) -> Budget {
        Budget { remaining: limit, exhausted: false }
    }
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
    /// Spend one step, returning `false` if there are none left
    pub fn consume(&mut self) -> bool {
        match self.remaining {
            None => true,
            Some(0) => {
                if !self.exhausted {
                    warn!("step budget exhausted, leaving the remaining branches unsettled");
                    self.exhausted = true;
                }
                false
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                true
            }
        }
    }
}

impl Tableau {
    /// A root tableau with `formulas` waiting to be placed
    pub fn new(formulas: impl IntoIterator<Item = Formula>) -> Tableau {
        Tableau {
            nodes: vec![],
            stack: formulas.into_iter().collect(),
            skip: VecDeque::new(),
            prev: Trail::new(),
            junction: None,
            instances: Instances::new(),
            checked: 0,
        }
    }
    pub fn nodes(&self) -> &[Formula] {
        self.nodes.as_slice()
    }
    pub fn junction(&self) -> Option<(&Tableau, &Tableau)> {
        self.junction.as_deref().map(|(left, right)| (left, right))
    }
    /// How this branch ended, or `None` if it is still being expanded
    pub fn status(&self) -> Option<Status> {
        if self.junction.is_some() {
            return Some(Status::Branched);
        }
        match self.nodes.last() {
            Some(last) if last.is_bottom() => Some(Status::Closed),
            Some(last) if last.is_top() => Some(Status::Open),
            _ => None,
        }
    }
    pub fn is_settled(&self) -> bool {
        self.status().is_some()
    }

    /// Expand the tableau until every branch is settled.
    /// Does not terminate on formulas that produce infinitely many terms
    pub fn evaluate(self) -> Tableau {
        self.evaluate_within(&mut Budget::unlimited())
    }

    /// Expand the tableau until every branch is settled or the budget runs out
    pub fn evaluate_within(mut self, budget: &mut Budget) -> Tableau {
        loop {
            if let Some(junction) = self.junction.take() {
                let (left, right) = *junction;
                let left = left.evaluate_within(budget);
                let right = right.evaluate_within(budget);
                self.junction = Some(Box::new((left, right)));
                return self;
            }
            if self.is_settled() || !budget.consume() {
                return self;
            }
            self = self.step();
        }
    }

    /// Take a single step of expansion. Settled tableaux are returned unchanged
    pub fn step(mut self) -> Tableau {
        if self.is_settled() {
            return self;
        }
        trace!("step with {} nodes, {} pending, {} deferred", self.nodes.len(), self.stack.len(), self.skip.len());
        if self.close_on_contradiction() {
            return self;
        }
        if let Some(formula) = self.stack.pop_front() {
            self.place(formula);
            return self;
        }
        if let Some(disjunction) = self.skip.pop_front() {
            self.split(disjunction);
            return self;
        }
        if self.instances.has_universals() && !self.instances.has_terms() {
            let term = any_existing_term(self.prev.iter().chain(self.nodes.iter()));
            debug!("no terms on the branch, instantiating with {}", term);
            self.instances.observe_term(term);
        }
        while let Some(instance) = self.instances.next_unused() {
            if self.on_branch(&instance) {
                trace!("{} is already on the branch", instance);
                continue;
            }
            self.stack.push_back(instance);
            return self;
        }
        self.nodes.push(Formula::top());
        self
    }

    /// True if `formula` was already placed here or on an ancestor
    fn on_branch(&self, formula: &Formula) -> bool {
        self.prev
            .iter()
            .chain(self.nodes.iter())
            .any(|other| other.is_same(formula))
    }

    /// Check every node placed since the last check against everything above it
    fn close_on_contradiction(&mut self) -> bool {
        while self.checked < self.nodes.len() {
            let formula = self.nodes[self.checked].clone();
            let conflict = self.prev
                .iter()
                .chain(self.nodes[..self.checked].iter())
                .find(|other| formula.contradicts(other))
                .cloned();
            self.checked += 1;
            if let Some(other) = conflict {
                debug!("{} contradicts {}, closing", formula, other);
                self.close();
                return true;
            }
        }
        false
    }

    fn close(&mut self) {
        self.nodes.push(Formula::bottom());
        self.checked = self.nodes.len();
        self.stack.clear();
        self.skip.clear();
    }

    /// Put `formula` on the branch and queue up whatever it expands to
    fn place(&mut self, formula: Formula) {
        trace!("placing {}", formula);
        match expand(&formula) {
            Expansion::Trivial => {
                if !formula.is_top() {
                    self.nodes.push(formula);
                }
            }
            Expansion::Close => {
                debug!("{} closes the branch", formula);
                if !formula.is_bottom() {
                    self.nodes.push(formula);
                }
                self.close();
            }
            Expansion::Literal(term) => {
                self.nodes.push(formula);
                if let Some(term) = term {
                    self.instances.observe_term(term);
                }
            }
            Expansion::Linear(formulas) => {
                self.nodes.push(formula);
                self.stack.extend(formulas);
            }
            Expansion::Branch(disjunction) => {
                self.nodes.push(formula);
                self.skip.push_back(disjunction);
            }
            Expansion::Universal(universal) => {
                self.nodes.push(formula);
                self.instances.observe_universal(universal);
            }
            Expansion::Existential(existential) => {
                let witnessed = self.on_branch(&formula);
                self.nodes.push(formula);
                if witnessed {
                    return;
                }
                let deferred = self.skip.iter().map(Disjunction::formula).collect::<Vec<_>>();
                let var = fresh_variable(
                    self.prev.iter()
                        .chain(self.nodes.iter())
                        .chain(self.stack.iter())
                        .chain(deferred.iter())
                );
                debug!("witnessing {:?} with {:?}", existential.body, var);
                self.stack.push_back(existential.instantiate(&Term::variable(var)));
            }
        }
    }

    /// Split the branch on `disjunction`, leaving the children unevaluated
    fn split(&mut self, disjunction: Disjunction) {
        debug!("branching on {}", disjunction.formula());
        let mut inherited = self.nodes.clone();
        inherited.push(disjunction.formula());
        let prev = self.prev.extend(inherited);
        let left = self.child(&prev, disjunction.left);
        let right = self.child(&prev, disjunction.right);
        self.skip.clear();
        self.junction = Some(Box::new((left, right)));
    }

    fn child(&self, prev: &Trail, first: Formula) -> Tableau {
        let mut stack = VecDeque::new();
        stack.push_back(first);
        Tableau {
            nodes: vec![],
            stack,
            skip: self.skip.clone(),
            prev: prev.clone(),
            junction: None,
            instances: self.instances.clone(),
            checked: 0,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for node in self.nodes.iter() {
            writeln!(f, "{:indent$}{}", "", node, indent = depth * 2)?;
        }
        if let Some((left, right)) = self.junction() {
            left.fmt_indented(f, depth + 1)?;
            right.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Serialize for Tableau {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tableau", 2)?;
        state.serialize_field("nodes", &self.nodes)?;
        state.serialize_field("junction", &self.junction())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{parse_formula, Formula, Term, Variable};
    use crate::tableau::{Budget, Status, Tableau};

    fn p() -> Formula { Formula::atom("P") }
    fn q() -> Formula { Formula::atom("Q") }

    fn evaluate(sources: &[&str]) -> Tableau {
        let formulas = sources
            .iter()
            .map(|source| parse_formula(source).expect("should parse"));
        Tableau::new(formulas).evaluate()
    }
    fn shown(tableau: &Tableau) -> Vec<String> {
        tableau.nodes().iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn open_simple_0() {
        let tableau = Tableau::new(vec![p()]).evaluate();
        assert_eq!(tableau.nodes(), &[p(), Formula::top()]);
        assert_eq!(tableau.status(), Some(Status::Open));
    }
    #[test]
    fn closed_simple_0() {
        let tableau = Tableau::new(vec![p(), p().negate()]).evaluate();
        assert_eq!(tableau.nodes(), &[p(), p().negate(), Formula::bottom()]);
        assert_eq!(tableau.status(), Some(Status::Closed));
    }
    #[test]
    fn closed_simple_1() {
        // the conflict is found through commutativity and double negation
        let tableau = evaluate(&["P∧Q", "¬(Q∧¬¬P)"]);
        assert_eq!(tableau.status(), Some(Status::Closed));
        assert_eq!(tableau.nodes().len(), 3);
    }
    #[test]
    fn constants_0() {
        assert_eq!(shown(&evaluate(&["⊤"])), vec!["⊤"]);
        assert_eq!(shown(&evaluate(&["¬⊥"])), vec!["¬⊥", "⊤"]);
        assert_eq!(shown(&evaluate(&["⊥"])), vec!["⊥"]);
        assert_eq!(shown(&evaluate(&["¬⊤", "P"])), vec!["¬⊤", "⊥"]);
    }
    #[test]
    fn linear_order_0() {
        // replacements are queued behind what was already pending
        let tableau = evaluate(&["P∧Q", "R"]);
        assert_eq!(shown(&tableau), vec!["(P∧Q)", "R", "P", "Q", "⊤"]);
    }
    #[test]
    fn branch_0() {
        let tableau = Tableau::new(vec![Formula::or(p(), q())]).evaluate();
        assert_eq!(tableau.nodes(), &[Formula::or(p(), q())]);
        assert_eq!(tableau.status(), Some(Status::Branched));
        let (left, right) = tableau.junction().expect("should branch");
        assert_eq!(left.nodes(), &[p(), Formula::top()]);
        assert_eq!(right.nodes(), &[q(), Formula::top()]);
    }
    #[test]
    fn branch_1() {
        // children see what their ancestors placed
        let tableau = evaluate(&["P→Q", "P", "¬Q"]);
        let (left, right) = tableau.junction().expect("should branch");
        assert_eq!(shown(left), vec!["¬P", "⊥"]);
        assert_eq!(shown(right), vec!["Q", "⊥"]);
    }
    #[test]
    fn branch_deferred_0() {
        // linear formulas are placed before any split
        let tableau = evaluate(&["P∨Q", "R∧S"]);
        assert_eq!(shown(&tableau), vec!["(P∨Q)", "(R∧S)", "R", "S"]);
        assert!(tableau.junction().is_some());
    }
    #[test]
    fn branch_nested_0() {
        let tableau = evaluate(&["P∨Q", "R∨S"]);
        let (left, right) = tableau.junction().expect("should branch");
        assert_eq!(shown(left), vec!["P"]);
        assert_eq!(shown(right), vec!["Q"]);
        // the remaining disjunction is split on both sides
        assert!(left.junction().is_some());
        assert!(right.junction().is_some());
    }
    #[test]
    fn idempotence_0() {
        let once = evaluate(&["(P∨Q)→(P∧Q)", "¬(P↔Q)"]);
        let twice = once.clone().evaluate();
        assert_eq!(once.to_string(), twice.to_string());
        let stepped = once.clone().step();
        assert_eq!(once.to_string(), stepped.to_string());
    }
    #[test]
    fn existential_0() {
        let tableau = evaluate(&["∃x.F(x)"]);
        assert_eq!(shown(&tableau), vec!["∃x.F(x)", "F(ζ0)", "⊤"]);
    }
    #[test]
    fn existential_fresh_0() {
        let tableau = evaluate(&["∃x.F(x)", "∃x.¬F(x)"]);
        assert_eq!(shown(&tableau), vec!["∃x.F(x)", "∃x.¬F(x)", "F(ζ0)", "¬F(ζ1)", "⊤"]);
    }
    #[test]
    fn existential_repeated_0() {
        // a second copy of an existential already has its witness
        let tableau = evaluate(&["∃x.F(x)", "∃x.F(x)"]);
        assert_eq!(shown(&tableau), vec!["∃x.F(x)", "∃x.F(x)", "F(ζ0)", "⊤"]);
    }
    #[test]
    fn universal_0() {
        let tableau = evaluate(&["∀x.F(x)", "¬F(a)"]);
        assert_eq!(shown(&tableau), vec!["∀x.F(x)", "¬F(a)", "F(a)", "⊥"]);
    }
    #[test]
    fn universal_without_terms_0() {
        // with nothing to instantiate with, the first term in sight is used
        let tableau = Tableau::new(vec![Formula::for_all(
            Variable::new("x"),
            Formula::predicate("F", Term::variable(Variable::new("x"))),
        )]).evaluate();
        assert_eq!(shown(&tableau), vec!["∀x.F(x)", "F(x)", "⊤"]);
    }
    #[test]
    fn universal_every_term_0() {
        let tableau = evaluate(&["∀x.F(x)", "G(a)", "G(b)"]);
        assert_eq!(shown(&tableau), vec!["∀x.F(x)", "G(a)", "G(b)", "F(a)", "F(b)", "⊤"]);
    }
    #[test]
    fn universal_repeated_instance_0() {
        // every instance is `∃y.F(y)`, which is only witnessed once
        let tableau = evaluate(&["∀x.∃y.F(y)", "¬G(a)"]);
        assert_eq!(shown(&tableau), vec!["∀x.∃y.F(y)", "¬G(a)", "∃y.F(y)", "F(ζ0)", "⊤"]);
    }
    #[test]
    fn universal_fallback_term_0() {
        // the first term is taken from the root of the tree down
        let tableau = evaluate(&["P∨∀w.E(w)", "Q∨∀x.F(x)"]);
        let (left, _) = tableau.junction().expect("should branch");
        let (_, left_right) = left.junction().expect("should branch");
        assert_eq!(shown(left_right), vec!["∀x.F(x)", "F(w)", "⊤"]);
    }
    #[test]
    fn negated_existential_0() {
        let tableau = evaluate(&["¬∃x.F(x)", "F(a)"]);
        assert_eq!(shown(&tableau), vec!["¬∃x.F(x)", "F(a)", "¬F(a)", "⊥"]);
    }

    #[test]
    fn budget_0() {
        // every instance produces a new term to instantiate with
        let mut budget = Budget::limited(50);
        let tableau = Tableau::new(vec![
            parse_formula("F(a)").expect("should parse"),
            parse_formula("∀x.F(s(x))").expect("should parse"),
        ]).evaluate_within(&mut budget);
        assert!(budget.is_exhausted());
        assert_eq!(tableau.status(), None);
    }
    #[test]
    fn budget_1() {
        let mut budget = Budget::limited(1_000);
        let tableau = evaluate(&["P∨Q"]).evaluate_within(&mut budget);
        assert!(!budget.is_exhausted());
        assert_eq!(tableau.status(), Some(Status::Branched));
    }

    #[test]
    fn show_0() {
        let tableau = evaluate(&["P∨Q"]);
        assert_eq!(tableau.to_string(), "(P∨Q)\n  P\n  ⊤\n  Q\n  ⊤\n");
    }
    #[test]
    fn serialize_0() {
        let tableau = evaluate(&["P∨Q"]);
        let json = serde_json::to_value(&tableau).expect("should serialize");
        let expected = serde_json::json!({
            "nodes": ["(P∨Q)"],
            "junction": [
                { "nodes": ["P", "⊤"], "junction": null },
                { "nodes": ["Q", "⊤"], "junction": null },
            ],
        });
        assert_eq!(json, expected);
    }
}
