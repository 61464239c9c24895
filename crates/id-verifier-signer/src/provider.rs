/*
[INPUT]:  Path to a pre-generated proof document
[OUTPUT]: Identity proofs served from disk
[POS]:    Host layer - file-backed proof provider
[UPDATE]: When the proof document format or lookup strategy changes
*/

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use id_verifier_client::{IdProofOutput, IdProofProvider, IdStatement, Result, VerifierError};

/// Proof provider that serves a pre-generated proof document from disk
///
/// Stands in for a browser or hardware wallet when driving a verifier
/// from the command line. The document must have been generated for the
/// statement and challenge the verifier will check it against; this
/// provider does not inspect either.
#[derive(Debug)]
pub struct FileProofProvider {
    path: PathBuf,
}

impl FileProofProvider {
    /// Create a provider reading from the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl IdProofProvider for FileProofProvider {
    async fn request_id_proof(
        &self,
        account: &str,
        _statement: &IdStatement,
        _challenge: &str,
    ) -> Result<IdProofOutput> {
        debug!(account, path = %self.path.display(), "loading proof document");

        let content = std::fs::read_to_string(&self.path).map_err(|err| {
            VerifierError::Provider(format!(
                "failed to read proof document {}: {err}",
                self.path.display()
            ))
        })?;

        let proof: IdProofOutput = serde_json::from_str(&content).map_err(|err| {
            VerifierError::Provider(format!(
                "proof document {} is not valid JSON: {err}",
                self.path.display()
            ))
        })?;

        Ok(proof)
    }
}
