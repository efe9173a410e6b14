use crate::ast::{Term, Variable};

use std::fmt;
use std::rc::Rc;
use std::ops::Deref;
use serde::{Serialize, Serializer};

/// A formula of propositional or one-place predicate logic.
/// Cloning is cheap: subformulas are shared
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Formula {
    kind: Rc<FormulaKind>
}
/// Represents what type of formula it is, and any associated data
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum FormulaKind {
    Top,
    Bottom,
    /// A propositional variable
    Atom(String),
    /// A one-place predicate applied to a term
    Predicate(String, Term),
    Not(Formula),
    And(Formula, Formula),
    Or(Formula, Formula),
    Implies(Formula, Formula),
    Iff(Formula, Formula),
    ForAll(Variable, Formula),
    Exists(Variable, Formula),
}

impl FormulaKind {
    pub fn into(self) -> Formula {
        Formula { kind: Rc::new(self) }
    }
}

impl Formula {
    pub fn top() -> Formula {
        FormulaKind::Top.into()
    }
    pub fn bottom() -> Formula {
        FormulaKind::Bottom.into()
    }
    pub fn atom(name: impl Into<String>) -> Formula {
        FormulaKind::Atom(name.into()).into()
    }
    pub fn predicate(name: impl Into<String>, arg: Term) -> Formula {
        FormulaKind::Predicate(name.into(), arg).into()
    }
    pub fn and(left: Formula, right: Formula) -> Formula {
        FormulaKind::And(left, right).into()
    }
    pub fn or(left: Formula, right: Formula) -> Formula {
        FormulaKind::Or(left, right).into()
    }
    pub fn implies(condition: Formula, consequence: Formula) -> Formula {
        FormulaKind::Implies(condition, consequence).into()
    }
    pub fn iff(left: Formula, right: Formula) -> Formula {
        FormulaKind::Iff(left, right).into()
    }
    pub fn for_all(var: Variable, body: Formula) -> Formula {
        FormulaKind::ForAll(var, body).into()
    }
    pub fn exists(var: Variable, body: Formula) -> Formula {
        FormulaKind::Exists(var, body).into()
    }
    pub fn negate(self) -> Formula {
        FormulaKind::Not(self).into()
    }
    pub fn kind(&self) -> &FormulaKind {
        &self.kind
    }
    pub fn is_top(&self) -> bool {
        *self.kind == FormulaKind::Top
    }
    pub fn is_bottom(&self) -> bool {
        *self.kind == FormulaKind::Bottom
    }
    /// If this formula is `¬¬A`, return `A`
    pub fn double_negated(&self) -> Option<&Formula> {
        match self.kind.deref() {
            FormulaKind::Not(inner) => match inner.kind() {
                FormulaKind::Not(innermost) => Some(innermost),
                _ => None,
            },
            _ => None,
        }
    }
    /// The number of symbols in this formula
    pub fn size(&self) -> usize {
        use FormulaKind::*;
        match self.kind.deref() {
            Top | Bottom | Atom(_) => 1,
            Predicate(_, arg) => 1 + arg.size(),
            Not(inner) => 1 + inner.size(),
            And(l, r) | Or(l, r) | Implies(l, r) | Iff(l, r) => 1 + l.size() + r.size(),
            ForAll(_, body) | Exists(_, body) => 2 + body.size(),
        }
    }
    /// Equality up to the laws the tableau relies on when looking for contradictions:
    /// `¬¬A` is `A`, and conjunction, disjunction, and the biconditional commute
    pub fn is_same(&self, other: &Formula) -> bool {
        use FormulaKind::*;
        if let Some(inner) = self.double_negated() {
            return inner.is_same(other);
        }
        if let Some(inner) = other.double_negated() {
            return self.is_same(inner);
        }
        match (self.kind(), other.kind()) {
            (And(a1, b1), And(a2, b2))
            | (Or(a1, b1), Or(a2, b2))
            | (Iff(a1, b1), Iff(a2, b2)) => {
                (a1.is_same(a2) && b1.is_same(b2)) || (a1.is_same(b2) && b1.is_same(a2))
            }
            (Implies(a1, b1), Implies(a2, b2)) => a1.is_same(a2) && b1.is_same(b2),
            (Not(a), Not(b)) => a.is_same(b),
            (ForAll(x, a), ForAll(y, b))
            | (Exists(x, a), Exists(y, b)) => x == y && a.is_same(b),
            _ => self == other,
        }
    }
    /// True if one formula is the negation of the other, up to `is_same`
    pub fn contradicts(&self, other: &Formula) -> bool {
        self.is_same(&other.clone().negate()) || self.clone().negate().is_same(other)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FormulaKind::*;
        match self.kind.deref() {
            Top => write!(f, "⊤"),
            Bottom => write!(f, "⊥"),
            Atom(name) => write!(f, "{}", name),
            Predicate(name, arg) => write!(f, "{}({})", name, arg),
            Not(inner) => write!(f, "¬{}", inner),
            And(l, r) => write!(f, "({}∧{})", l, r),
            Or(l, r) => write!(f, "({}∨{})", l, r),
            Implies(l, r) => write!(f, "({}→{})", l, r),
            Iff(l, r) => write!(f, "({}↔{})", l, r),
            ForAll(var, body) => write!(f, "∀{}.{}", var, body),
            Exists(var, body) => write!(f, "∃{}.{}", var, body),
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
