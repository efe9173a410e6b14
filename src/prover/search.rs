use crate::ast::{Formula, Inference};
use crate::config::Config;
use crate::tableau::{Budget, Status, Tableau};

use serde::Serialize;

/// The outcome of a validity check: the evaluated tableau, and whether the
/// inference was found valid. `None` means evaluation was cut short
#[derive(Debug, Clone, Serialize)]
pub struct Validity {
    pub tableau: Tableau,
    pub valid: Option<bool>,
}

/// search for a counterexample to `premises ⊨ conclusion`
pub fn check_validity(premises: &[Formula], conclusion: &Formula) -> Validity {
    check_validity_within(premises, conclusion, &mut Budget::unlimited())
}

pub fn check_validity_within(premises: &[Formula], conclusion: &Formula, budget: &mut Budget) -> Validity {
    // we work by contradiction:
    // assume the premises and deny the conclusion, then try to find a consistent branch
    let seed = premises
        .iter()
        .cloned()
        .chain(std::iter::once(conclusion.clone().negate()));
    let tableau = Tableau::new(seed).evaluate_within(budget);
    let valid = has_open_branch(&tableau).map(|open| !open);
    Validity { tableau, valid }
}

pub fn check_inference(inference: &Inference) -> Validity {
    check_validity(inference.premises.as_slice(), &inference.consequence)
}

/// `Some(true)` if the formula holds on every branch of its tableau
pub fn is_valid(formula: &Formula) -> Option<bool> {
    check_validity(&[], formula).valid
}

/// `Some(true)` if some branch is open, `Some(false)` if every branch closed,
/// and `None` if any branch was left unsettled
pub fn has_open_branch(tableau: &Tableau) -> Option<bool> {
    if let Some((left, right)) = tableau.junction() {
        let left = has_open_branch(left)?;
        let right = has_open_branch(right)?;
        return Some(left || right);
    }
    match tableau.status() {
        Some(Status::Open) => Some(true),
        Some(Status::Closed) => Some(false),
        _ => None,
    }
}

/// Checks inferences under the limits set by the configuration
#[derive(Debug, Clone, Default)]
pub struct Prover {
    step_limit: Option<usize>,
}

impl Prover {
    pub fn new(step_limit: Option<usize>) -> Prover {
        Prover { step_limit }
    }
    pub fn from_config(config: &Config) -> Prover {
        Prover::new(config.step_limit)
    }
    pub fn check(&self, inference: &Inference) -> Validity {
        let mut budget = Budget::from_limit(self.step_limit);
        let validity = check_validity_within(inference.premises.as_slice(), &inference.consequence, &mut budget);
        if budget.is_exhausted() {
            info!("gave up on {} after {:?} steps", inference, self.step_limit);
        }
        validity
    }
}
