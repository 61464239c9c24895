/*
[INPUT]:  Account addresses, challenges, and wallet proofs
[OUTPUT]: Challenges, identity statements, and signature tokens
[POS]:    HTTP layer - verifier endpoint implementations
[UPDATE]: When verifier endpoints or response formats change
*/

use crate::http::{Result, VerifierClient, VerifierError};
use crate::types::{ChallengeResponse, IdProofOutput, IdStatement, ProveRequest};
use reqwest::Method;
use tracing::debug;

impl VerifierClient {
    /// Fetch a challenge for the given account address
    ///
    /// GET /challenge?address={account}
    pub async fn get_challenge(&self, account: &str) -> Result<String> {
        let endpoint = format!("/challenge?address={}", account);
        let builder = self.request(Method::GET, &endpoint)?;
        let body: ChallengeResponse = self.send_json(builder).await?;
        debug!(account, "challenge received");
        Ok(body.challenge)
    }

    /// Fetch the statement to prove
    ///
    /// GET /statement
    ///
    /// The endpoint responds with a JSON string holding a JSON-encoded
    /// statement document, so the body is decoded twice. A single decode
    /// would yield the encoded string, not the document.
    pub async fn get_statement(&self) -> Result<IdStatement> {
        let builder = self.request(Method::GET, "/statement")?;
        let body: String = self.send_json(builder).await?;
        let statement: IdStatement = serde_json::from_str(&body)?;
        Ok(statement)
    }

    /// Submit the proof and get a signature token
    ///
    /// POST /prove
    ///
    /// The body comes back as plain text. A non-success status and an
    /// empty body both fail with the same authorization error.
    pub async fn get_signature(&self, challenge: &str, proof: &IdProofOutput) -> Result<String> {
        let request = ProveRequest {
            challenge: challenge.to_string(),
            proof: proof.clone(),
        };
        let builder = self.request(Method::POST, "/prove")?.json(&request);
        let response = self.send_raw(builder).await?;
        if !response.status().is_success() {
            return Err(VerifierError::Authorization);
        }
        let body = response.text().await?;
        if body.is_empty() {
            return Err(VerifierError::Authorization);
        }
        debug!("signature token received");
        Ok(body)
    }
}
