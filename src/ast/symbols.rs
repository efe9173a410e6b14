use std::fmt;

/// The prefix reserved for variables introduced by existential instantiation
pub const FRESH_PREFIX: char = 'ζ';

/// A logical variable, where two variables are the same iff their names are equal
#[derive(Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Variable {
        Variable(name.into())
    }
    /// The reserved variable `ζ<index>`
    pub fn fresh(index: u32) -> Variable {
        Variable(format!("{}{}", FRESH_PREFIX, index))
    }
    pub fn name(&self) -> &str {
        self.0.as_str()
    }
    /// If this is a reserved variable `ζ<digits>`, return its index
    pub fn fresh_index(&self) -> Option<u32> {
        let digits = self.0.strip_prefix(FRESH_PREFIX)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
    /// The same name with a prime appended, used when renaming a bound variable
    pub fn primed(&self) -> Variable {
        Variable(format!("{}'", self.0))
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracks which names are bound by enclosing quantifiers while parsing
#[derive(Debug, Default)]
pub struct Scope<'a> {
    bound: Vec<&'a str>,
}

/// Opaque wrapper struct for dealing with variable shadows while parsing.
/// Stores how deep the scope was before the binding, so that it can be restored
pub struct ShadowInformation(usize);

impl <'a> Scope<'a> {
    pub fn new() -> Scope<'a> {
        Scope { bound: Vec::new() }
    }
    /// Bind `name` for the duration of a quantifier body, shadowing any outer binding
    pub fn bind(&mut self, name: &'a str) -> (Variable, ShadowInformation) {
        let info = ShadowInformation(self.bound.len());
        self.bound.push(name);
        (Variable::new(name), info)
    }
    /// Restore the bindings as they were before the matching `bind`
    pub fn restore(&mut self, shadow_info: ShadowInformation) {
        self.bound.truncate(shadow_info.0);
    }
    /// Names under a binder, and reserved `ζ<digits>` names, are variables
    pub fn is_variable(&self, name: &str) -> bool {
        self.bound.iter().any(|bound| *bound == name)
            || Variable::new(name).fresh_index().is_some()
    }
}
