/*
[INPUT]:  Account address, statement document, and challenge
[OUTPUT]: Identity proof answering the statement against the challenge
[POS]:    Wallet layer - proof provider abstraction
[UPDATE]: When adding new provider types or changing the proof contract
*/

use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::Result;
use crate::types::{IdProofOutput, IdStatement};

/// Trait for wallet identity-proof operations
///
/// Implement this trait for the wallet integration the host supplies
/// (extension bridge, hardware wallet, test double). The trait is async
/// to support wallets that prompt the user before answering.
#[async_trait]
pub trait IdProofProvider: Send + Sync {
    /// Produce a proof of the statement, bound to the challenge
    async fn request_id_proof(
        &self,
        account: &str,
        statement: &IdStatement,
        challenge: &str,
    ) -> Result<IdProofOutput>;
}

/// Arguments of a recorded proof request
#[derive(Debug, Clone, PartialEq)]
pub struct ProofCall {
    pub account: String,
    pub statement: IdStatement,
    pub challenge: String,
}

/// Mock proof provider for testing
///
/// Returns a predetermined proof and records every request it receives.
#[derive(Debug)]
pub struct MockIdProofProvider {
    proof: IdProofOutput,
    calls: Mutex<Vec<ProofCall>>,
}

impl MockIdProofProvider {
    /// Create a new mock provider with a predetermined proof
    pub fn new(proof: IdProofOutput) -> Self {
        Self {
            proof,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn calls(&self) -> Vec<ProofCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdProofProvider for MockIdProofProvider {
    async fn request_id_proof(
        &self,
        account: &str,
        statement: &IdStatement,
        challenge: &str,
    ) -> Result<IdProofOutput> {
        self.calls.lock().unwrap().push(ProofCall {
            account: account.to_string(),
            statement: statement.clone(),
            challenge: challenge.to_string(),
        });
        Ok(self.proof.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_returns_canned_proof() {
        let proof = IdProofOutput(serde_json::json!({"sig": "xyz"}));
        let provider = MockIdProofProvider::new(proof.clone());

        let statement = IdStatement(serde_json::json!({"type": "test"}));
        let returned = provider
            .request_id_proof("acc-1", &statement, "chall-1")
            .await
            .unwrap();

        assert_eq!(returned, proof);

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].account, "acc-1");
        assert_eq!(calls[0].statement, statement);
        assert_eq!(calls[0].challenge, "chall-1");
    }
}
