/*
[INPUT]:  Verifier API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - identity statement and proof documents
[UPDATE]: When the verifier API schema changes or new types are added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity statement document fetched from the verifier
///
/// The shape is opaque to this crate; the document is handed to the
/// wallet provider unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdStatement(pub Value);

/// Proof produced by a wallet provider from (account, statement, challenge)
///
/// Opaque to this crate; forwarded verbatim to the prove endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdProofOutput(pub Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_is_transparent() {
        let statement: IdStatement =
            serde_json::from_str(r#"[{"type":"RevealAttribute","attributeTag":"firstName"}]"#)
                .unwrap();
        let round_trip = serde_json::to_string(&statement).unwrap();
        assert_eq!(
            round_trip,
            r#"[{"type":"RevealAttribute","attributeTag":"firstName"}]"#
        );
    }

    #[test]
    fn test_proof_output_is_transparent() {
        let proof = IdProofOutput(serde_json::json!({"sig": "xyz"}));
        let encoded = serde_json::to_string(&proof).unwrap();
        assert_eq!(encoded, r#"{"sig":"xyz"}"#);
    }
}
