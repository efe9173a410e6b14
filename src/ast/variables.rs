use crate::ast::{Formula, FormulaKind, Term, Variable};

use indexmap::IndexSet;

/// The name handed out when a universal must be instantiated on a branch with no terms at all
pub const PLACEHOLDER_NAME: &str = "τ";

/// Variables with at least one unbound occurrence, in order of first occurrence
pub fn free_variables(formula: &Formula) -> IndexSet<Variable> {
    let mut free = IndexSet::new();
    collect_free(formula, &mut Vec::new(), &mut free);
    free
}

fn collect_free<'a>(formula: &'a Formula, bound: &mut Vec<&'a Variable>, free: &mut IndexSet<Variable>) {
    use FormulaKind::*;
    match formula.kind() {
        Top | Bottom | Atom(_) => {}
        Predicate(_, arg) => {
            if let Some(var) = arg.variable_leaf() {
                if !bound.contains(&var) {
                    free.insert(var.clone());
                }
            }
        }
        Not(inner) => collect_free(inner, bound, free),
        And(l, r) | Or(l, r) | Implies(l, r) | Iff(l, r) => {
            collect_free(l, bound, free);
            collect_free(r, bound, free);
        }
        // fv(∀x.φ) = fv(φ) - {x}, and the same for ∃
        ForAll(var, body) | Exists(var, body) => {
            bound.push(var);
            collect_free(body, bound, free);
            bound.pop();
        }
    }
}

/// Every variable bound by some quantifier in the formula
pub fn bound_variables(formula: &Formula) -> IndexSet<Variable> {
    use FormulaKind::*;
    match formula.kind() {
        Top | Bottom | Atom(_) | Predicate(_, _) => IndexSet::new(),
        Not(inner) => bound_variables(inner),
        And(l, r) | Or(l, r) | Implies(l, r) | Iff(l, r) => {
            let mut vars = bound_variables(l);
            vars.extend(bound_variables(r));
            vars
        }
        ForAll(var, body) | Exists(var, body) => {
            let mut vars = bound_variables(body);
            vars.insert(var.clone());
            vars
        }
    }
}

/// Replace the free occurrences of `from` with `to`.
///
/// A quantifier whose variable occurs in `to` would capture it, so when `from` also
/// occurs free in its body the bound variable is renamed first
pub fn substitute(formula: &Formula, from: &Variable, to: &Term) -> Formula {
    use FormulaKind::*;
    match formula.kind() {
        Top | Bottom | Atom(_) => formula.clone(),
        Predicate(name, arg) => Formula::predicate(name.as_str(), arg.substitute(from, to)),
        Not(inner) => substitute(inner, from, to).negate(),
        And(l, r) => Formula::and(substitute(l, from, to), substitute(r, from, to)),
        Or(l, r) => Formula::or(substitute(l, from, to), substitute(r, from, to)),
        Implies(l, r) => Formula::implies(substitute(l, from, to), substitute(r, from, to)),
        Iff(l, r) => Formula::iff(substitute(l, from, to), substitute(r, from, to)),
        ForAll(var, body) => {
            let (var, body) = substitute_binder(var, body, from, to);
            Formula::for_all(var, body)
        }
        Exists(var, body) => {
            let (var, body) = substitute_binder(var, body, from, to);
            Formula::exists(var, body)
        }
    }
}

fn substitute_binder(var: &Variable, body: &Formula, from: &Variable, to: &Term) -> (Variable, Formula) {
    if var == from {
        // `from` is shadowed, there is nothing free to replace below here
        return (var.clone(), body.clone());
    }
    let body_free = free_variables(body);
    if !body_free.contains(from) {
        return (var.clone(), body.clone());
    }
    if !to.contains(var) {
        return (var.clone(), substitute(body, from, to));
    }
    let mut renamed = var.primed();
    while to.contains(&renamed) || body_free.contains(&renamed) || bound_variables(body).contains(&renamed) {
        renamed = renamed.primed();
    }
    debug!("renaming bound {:?} to {:?} to substitute {} for {:?}", var, renamed, to, from);
    let body = substitute(body, var, &Term::variable(renamed.clone()));
    (renamed, substitute(&body, from, to))
}

/// A variable `ζ<n>` that is not free in any of the formulas
pub fn fresh_variable<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Variable {
    let highest = formulas
        .into_iter()
        .flat_map(free_variables)
        .filter_map(|var| var.fresh_index())
        .max();
    match highest {
        Some(index) => Variable::fresh(index + 1),
        None => Variable::fresh(0),
    }
}

/// The first term mentioned by the formulas, or the placeholder name if they mention none
pub fn any_existing_term<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Term {
    formulas
        .into_iter()
        .find_map(first_term)
        .unwrap_or_else(|| Term::name(PLACEHOLDER_NAME))
}

fn first_term(formula: &Formula) -> Option<Term> {
    use FormulaKind::*;
    match formula.kind() {
        Top | Bottom | Atom(_) => None,
        Predicate(_, arg) => Some(arg.clone()),
        ForAll(var, _) | Exists(var, _) => Some(Term::variable(var.clone())),
        Not(inner) => first_term(inner),
        And(l, r) | Or(l, r) | Implies(l, r) | Iff(l, r) => first_term(l).or_else(|| first_term(r)),
    }
}
