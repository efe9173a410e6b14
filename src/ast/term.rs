use crate::ast::Variable;

use std::fmt;
use std::rc::Rc;
use std::ops::Deref;

/// The argument of a predicate: a name, a variable, or an operator applied to a term
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    kind: Rc<TermKind>
}
/// The kind of a term
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// A constant, naming one individual
    Name(String),
    /// Variables are placeholders, bound by quantifiers or introduced by instantiation
    Variable(Variable),
    /// A unary function applied to a term, e.g. the successor in `s(0)`
    Operator(String, Term),
}

impl TermKind {
    fn into_term(self) -> Term {
        Term { kind: Rc::new(self) }
    }
}

impl Term {
    pub fn name(name: impl Into<String>) -> Term {
        TermKind::Name(name.into()).into_term()
    }
    pub fn variable(var: Variable) -> Term {
        TermKind::Variable(var).into_term()
    }
    pub fn operator(name: impl Into<String>, arg: Term) -> Term {
        TermKind::Operator(name.into(), arg).into_term()
    }
    pub fn kind(&self) -> &TermKind {
        &self.kind
    }
    /// Search for the variable in our structure
    pub fn contains(&self, var: &Variable) -> bool {
        match self.kind.deref() {
            TermKind::Name(_) => false,
            TermKind::Variable(v) => v == var,
            TermKind::Operator(_, arg) => arg.contains(var),
        }
    }
    /// The variable at the bottom of this term, if any.
    /// Terms are unary, so there is at most one
    pub fn variable_leaf(&self) -> Option<&Variable> {
        match self.kind.deref() {
            TermKind::Name(_) => None,
            TermKind::Variable(v) => Some(v),
            TermKind::Operator(_, arg) => arg.variable_leaf(),
        }
    }
    /// The number of symbols in this term
    pub fn size(&self) -> usize {
        match self.kind.deref() {
            TermKind::Name(_) | TermKind::Variable(_) => 1,
            TermKind::Operator(_, arg) => 1 + arg.size(),
        }
    }
    /// Replace every occurrence of `from` with `to`
    pub fn substitute(&self, from: &Variable, to: &Term) -> Term {
        match self.kind.deref() {
            TermKind::Variable(v) if v == from => to.clone(),
            TermKind::Name(_) | TermKind::Variable(_) => self.clone(),
            TermKind::Operator(name, arg) => Term::operator(name.as_str(), arg.substitute(from, to)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.deref() {
            TermKind::Name(name) => write!(f, "{}", name),
            TermKind::Variable(var) => write!(f, "{}", var),
            TermKind::Operator(name, arg) => write!(f, "{}({})", name, arg),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.deref() {
            TermKind::Name(name) => write!(f, "{}", name),
            TermKind::Variable(var) => write!(f, "{:?}", var),
            TermKind::Operator(name, arg) => write!(f, "{}({:?})", name, arg),
        }
    }
}
