use crate::ast::{substitute, Formula, FormulaKind, Term, Variable};

/// The two alternatives a branch splits into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disjunction {
    pub left: Formula,
    pub right: Formula,
}

impl Disjunction {
    pub fn new(left: Formula, right: Formula) -> Disjunction {
        Disjunction { left, right }
    }
    /// `left ∨ right`, as recorded for the children of the split
    pub fn formula(&self) -> Formula {
        Formula::or(self.left.clone(), self.right.clone())
    }
}

/// A quantified formula with its binder pulled out, ready to be instantiated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quantified {
    pub variable: Variable,
    pub body: Formula,
}

impl Quantified {
    pub fn new(variable: Variable, body: Formula) -> Quantified {
        Quantified { variable, body }
    }
    /// The body with `term` in place of the bound variable
    pub fn instantiate(&self, term: &Term) -> Formula {
        substitute(&self.body, &self.variable, term)
    }
}

/// What a formula contributes to the branch it is placed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Says nothing about the branch
    Trivial,
    /// The branch can not be satisfied
    Close,
    /// A (possibly negated) atom or predicate, carrying the predicate's term if any
    Literal(Option<Term>),
    /// Every formula holds on this branch
    Linear(Vec<Formula>),
    /// One of two alternatives holds, so the branch must split
    Branch(Disjunction),
    /// Holds of every term on the branch
    Universal(Quantified),
    /// Holds of some term, which must be new to the branch
    Existential(Quantified),
}

/// Decide which rule applies to `formula`
pub fn expand(formula: &Formula) -> Expansion {
    use FormulaKind::*;
    match formula.kind() {
        Top => Expansion::Trivial,
        Bottom => Expansion::Close,
        Atom(_) => Expansion::Literal(None),
        Predicate(_, arg) => Expansion::Literal(Some(arg.clone())),
        Not(inner) => expand_negation(inner),
        And(l, r) => split_conjunction(l, r),
        Or(l, r) => defer_disjunction(l, r),
        Implies(l, r) => unfold_implication(l, r),
        Iff(l, r) => unfold_biconditional(l, r),
        ForAll(var, body) => Expansion::Universal(Quantified::new(var.clone(), body.clone())),
        Exists(var, body) => Expansion::Existential(Quantified::new(var.clone(), body.clone())),
    }
}

/// Decide which rule applies to `¬inner`
fn expand_negation(inner: &Formula) -> Expansion {
    use FormulaKind::*;
    match inner.kind() {
        Top => Expansion::Close,
        Bottom => Expansion::Trivial,
        Atom(_) => Expansion::Literal(None),
        Predicate(_, arg) => Expansion::Literal(Some(arg.clone())),
        Not(a) => eliminate_double_negation(a),
        And(a, b) => negate_conjunction(a, b),
        Or(a, b) => negate_disjunction(a, b),
        Implies(a, b) => negate_implication(a, b),
        Iff(a, b) => negate_biconditional(a, b),
        ForAll(var, body) => negate_universal(var, body),
        Exists(var, body) => negate_existential(var, body),
    }
}

/// `¬¬A` gives `A`
pub fn eliminate_double_negation(a: &Formula) -> Expansion {
    Expansion::Linear(vec![a.clone()])
}

/// `A → B` splits into `¬A` and `B`
pub fn unfold_implication(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Branch(Disjunction::new(a.clone().negate(), b.clone()))
}

/// `A ↔ B` splits into `A∧B` and `¬A∧¬B`
pub fn unfold_biconditional(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Branch(Disjunction::new(
        Formula::and(a.clone(), b.clone()),
        Formula::and(a.clone().negate(), b.clone().negate()),
    ))
}

/// `¬(A∧B)` splits into `¬A` and `¬B`
pub fn negate_conjunction(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Branch(Disjunction::new(a.clone().negate(), b.clone().negate()))
}

/// `¬(A∨B)` gives both `¬A` and `¬B`
pub fn negate_disjunction(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Linear(vec![a.clone().negate(), b.clone().negate()])
}

/// `¬(A→B)` gives both `A` and `¬B`
pub fn negate_implication(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Linear(vec![a.clone(), b.clone().negate()])
}

/// `¬(A↔B)` gives both `A∨B` and `¬A∨¬B`, which branch later
pub fn negate_biconditional(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Linear(vec![
        Formula::or(a.clone(), b.clone()),
        Formula::or(a.clone().negate(), b.clone().negate()),
    ])
}

/// `A∧B` gives both `A` and `B`
pub fn split_conjunction(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Linear(vec![a.clone(), b.clone()])
}

/// `A∨B` splits, once nothing linear is left on the branch
pub fn defer_disjunction(a: &Formula, b: &Formula) -> Expansion {
    Expansion::Branch(Disjunction::new(a.clone(), b.clone()))
}

/// `¬∀x.φ` is read as `∃x.¬φ`
pub fn negate_universal(var: &Variable, body: &Formula) -> Expansion {
    Expansion::Existential(Quantified::new(var.clone(), body.clone().negate()))
}

/// `¬∃x.φ` is read as `∀x.¬φ`
pub fn negate_existential(var: &Variable, body: &Formula) -> Expansion {
    Expansion::Universal(Quantified::new(var.clone(), body.clone().negate()))
}
