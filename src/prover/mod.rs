mod search;
pub use search::*;

use crate::ast::{self, Inference};
use crate::error::BoxedErrorTrait;
use crate::tableau::Tableau;

use serde::Serialize;

/// The body answering a validity request
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub inference: Inference,
    pub tableau: Tableau,
    pub valid: Option<bool>,
}

/// Parse the inference in `source` and check it,
/// returning the evaluated tableau along with the verdict.
/// Blank or unparseable requests are errors
pub fn service_validity_request(source: &str, prover: &Prover) -> Result<Response, BoxedErrorTrait> {
    if source.trim().is_empty() {
        return request_error!("missing inference");
    }
    let inference = ast::parse_inference(source)?;
    info!("checking {}", inference);
    let Validity { tableau, valid } = prover.check(&inference);
    Ok( Response { inference, tableau, valid } )
}
