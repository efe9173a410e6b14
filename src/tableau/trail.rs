use crate::ast::Formula;

use std::rc::Rc;

/// The formulas a branch inherits from its ancestors.
///
/// Each split adds one segment on top of the parent's trail,
/// so siblings share everything above them instead of copying it
#[derive(Debug, Clone, Default)]
pub struct Trail {
    head: Option<Rc<Segment>>,
    len: usize,
}

#[derive(Debug)]
struct Segment {
    formulas: Vec<Formula>,
    parent: Option<Rc<Segment>>,
}

impl Trail {
    pub fn new() -> Trail {
        Trail { head: None, len: 0 }
    }
    /// A new trail with `formulas` added on top of this one
    pub fn extend(&self, formulas: Vec<Formula>) -> Trail {
        let len = self.len + formulas.len();
        let segment = Segment { formulas, parent: self.head.clone() };
        Trail { head: Some(Rc::new(segment)), len }
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Iterate over every inherited formula, from the root down
    pub fn iter(&self) -> impl Iterator<Item = &Formula> + '_ {
        let mut segments = Vec::new();
        let mut segment = self.head.as_deref();
        while let Some(current) = segment {
            segments.push(current);
            segment = current.parent.as_deref();
        }
        segments.into_iter().rev().flat_map(|segment| segment.formulas.iter())
    }
}
