/*
[INPUT]:  Verifier API schema definitions and serde requirements
[OUTPUT]: Typed response bodies for verifier endpoints
[POS]:    Data layer - response payload definitions
[UPDATE]: When the verifier API schema changes or new endpoints are added
*/

use serde::Deserialize;

/// Body of the challenge endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeResponse {
    pub challenge: String,
}
