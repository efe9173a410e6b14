#[macro_use] extern crate log;

#[macro_use]
pub mod error;
pub mod ast;
pub mod tableau;
pub mod prover;
pub mod config;
pub mod client;

pub use ast::{parse_formula, parse_inference, Formula, Inference, Term, Variable};
pub use prover::{check_inference, check_validity, has_open_branch, is_valid, service_validity_request, Prover, Response, Validity};
pub use tableau::{Budget, Tableau};
