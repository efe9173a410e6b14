use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::error::Error;

use pest_derive::*;
use crate::ast::{Formula, Inference, Scope, Term, Variable};

#[derive(Parser)]
#[grammar = "../grammar.pest"]
struct Grammar;

/// Parse a single formula, e.g. `(P∧(P→Q))→Q` or `∀x.(F(x)→G(x))`
pub fn parse_formula(source: &str) -> Result<Formula, Error<Rule>> {
    // pest tokenizes and groups by precedence for us,
    // all we have to do is fold the chains and resolve names into terms
    let pairs = Grammar::parse(Rule::source, source)?;
    let mut scope = Scope::new();
    for pair in pairs {
        if pair.as_rule() == Rule::formula {
            return parse_expr(pair, &mut scope);
        }
    }
    unreachable!("the `source` rule always produces a formula")
}

/// Parse an inference such as `P, P→Q ⊨ Q`.
/// A bare formula, or `⊨ Q`, is an inference with no premises
pub fn parse_inference(source: &str) -> Result<Inference, Error<Rule>> {
    let inference = Grammar::parse(Rule::inference, source)?
        .next()
        .expect("the `inference` rule always produces itself");
    let mut premises = Vec::new();
    let mut consequence = None;
    for pair in inference.into_inner() {
        match pair.as_rule() {
            Rule::premises => {
                for premise in pair.into_inner() {
                    premises.push(parse_expr(premise, &mut Scope::new())?);
                }
            }
            Rule::formula => {
                consequence = Some(parse_expr(pair, &mut Scope::new())?);
            }
            _ => {}
        }
    }
    let consequence = consequence.expect("the `inference` rule always produces a consequence");
    Ok(Inference::new(premises, consequence))
}

fn parse_expr<'a>(pair: Pair<'a, Rule>, scope: &mut Scope<'a>) -> Result<Formula, Error<Rule>> {
    let formula = match pair.as_rule() {
        // the biconditional and the binary chains associate to the left
        Rule::formula => fold_left(pair.into_inner(), scope, Formula::iff)?,
        Rule::disjunction => fold_left(pair.into_inner(), scope, Formula::or)?,
        Rule::conjunction => fold_left(pair.into_inner(), scope, Formula::and)?,
        // implications associate to the right, which the grammar already did for us
        Rule::implication => {
            let mut inner = pair.into_inner();
            let condition = parse_expr(inner.next().expect("implication has a left side"), scope)?;
            match inner.next() {
                Some(consequence) => Formula::implies(condition, parse_expr(consequence, scope)?),
                None => condition,
            }
        }
        Rule::negation => {
            let inner = pair.into_inner().next().expect("negation has an operand");
            parse_expr(inner, scope)?.negate()
        }
        Rule::quantified => {
            let mut inner = pair.into_inner();
            let quantifier = inner.next().expect("quantified has a quantifier").as_rule();
            let name = inner.next().expect("quantified has a variable").as_str();
            let body = inner.next().expect("quantified has a body");
            let (var, shadow_info) = scope.bind(name);
            let body = parse_expr(body, scope);
            scope.restore(shadow_info);
            if quantifier == Rule::forall {
                Formula::for_all(var, body?)
            } else {
                Formula::exists(var, body?)
            }
        }
        Rule::predicate => {
            let mut inner = pair.into_inner();
            let name = inner.next().expect("predicate has a name").as_str();
            let arg = parse_term(inner.next().expect("predicate has an argument"), scope);
            Formula::predicate(name, arg)
        }
        Rule::atom => Formula::atom(pair.as_str().trim()),
        Rule::top => Formula::top(),
        Rule::bottom => Formula::bottom(),
        rule => panic!("rule {:?} should not appear where a formula is expected", rule),
    };
    Ok(formula)
}

/// Parse every operand of a chain, combining them left to right
fn fold_left<'a>(
    pairs: Pairs<'a, Rule>,
    scope: &mut Scope<'a>,
    combine: fn(Formula, Formula) -> Formula,
) -> Result<Formula, Error<Rule>> {
    let mut acc: Option<Formula> = None;
    for pair in pairs {
        let operand = parse_expr(pair, scope)?;
        acc = Some(match acc {
            None => operand,
            Some(left) => combine(left, operand),
        });
    }
    Ok(acc.expect("the grammar requires at least one operand"))
}

fn parse_term<'a>(pair: Pair<'a, Rule>, scope: &Scope<'a>) -> Term {
    match pair.as_rule() {
        Rule::operator => {
            let mut inner = pair.into_inner();
            let name = inner.next().expect("operator has a name").as_str();
            let arg = parse_term(inner.next().expect("operator has an argument"), scope);
            Term::operator(name, arg)
        }
        Rule::identifier => {
            let name = pair.as_str();
            if scope.is_variable(name) {
                Term::variable(Variable::new(name))
            } else {
                Term::name(name)
            }
        }
        rule => panic!("rule {:?} should not appear where a term is expected", rule),
    }
}
