/*
[INPUT]:  Verifier API schema definitions and serde requirements
[OUTPUT]: Typed request bodies for verifier endpoints
[POS]:    Data layer - request payload definitions
[UPDATE]: When the verifier API schema changes or new endpoints are added
*/

use serde::Serialize;

use super::models::IdProofOutput;

/// Body of the prove endpoint request
#[derive(Debug, Clone, Serialize)]
pub struct ProveRequest {
    pub challenge: String,
    pub proof: IdProofOutput,
}
