use crate::ast::Formula;

use std::fmt;
use itertools::Itertools;
use serde::Serialize;

/// Premises and the consequence they are claimed to entail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inference {
    pub premises: Vec<Formula>,
    pub consequence: Formula,
}

impl Inference {
    pub fn new(premises: Vec<Formula>, consequence: Formula) -> Inference {
        Inference { premises, consequence }
    }
    /// A formula on its own is valid iff it follows from nothing
    pub fn theorem(consequence: Formula) -> Inference {
        Inference { premises: Vec::new(), consequence }
    }
}

impl fmt::Display for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.premises.is_empty() {
            write!(f, "⊨ {}", self.consequence)
        } else {
            write!(f, "{} ⊨ {}", self.premises.iter().join(", "), self.consequence)
        }
    }
}
