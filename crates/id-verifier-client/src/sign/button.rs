/*
[INPUT]:  Wallet provider, account address, verifier client, host state
[OUTPUT]: Signature token reported through the completion callback
[POS]:    Flow layer - activatable control driving the signature flow
[UPDATE]: When flow steps or the callback contract change
*/

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::http::{Result, VerifierClient};
use crate::wallet::IdProofProvider;

/// Completion callback invoked once with the final signature token
pub type SignCallback = Box<dyn Fn(String) + Send + Sync>;

/// Activatable control that drives the signature request flow
///
/// Every field is caller-supplied configuration; the control keeps no
/// state of its own between activations. The `disabled` flag is a
/// pass-through of host state, not an internal state machine.
pub struct SignatureButton {
    client: VerifierClient,
    provider: Arc<dyn IdProofProvider>,
    account: String,
    disabled: bool,
    on_sign: SignCallback,
}

impl SignatureButton {
    /// Create a new control
    pub fn new(
        client: VerifierClient,
        provider: Arc<dyn IdProofProvider>,
        account: impl Into<String>,
        disabled: bool,
        on_sign: SignCallback,
    ) -> Self {
        Self {
            client,
            provider,
            account: account.into(),
            disabled,
            on_sign,
        }
    }

    /// Account address the flow proves ownership of
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Whether activation is currently suppressed
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Pass through the host's enabled/disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Activate the control
    ///
    /// A disabled control ignores the activation entirely. Nothing stops
    /// a second activation while one is in flight; hosts that need
    /// exclusion set `disabled` around the pending flow.
    pub async fn click(&self) -> Result<()> {
        if self.disabled {
            debug!(account = %self.account, "activation suppressed, control disabled");
            return Ok(());
        }
        self.sign().await
    }

    /// Complete signature flow
    ///
    /// 1. Fetch challenge
    /// 2. Fetch statement
    /// 3. Request proof from the wallet provider
    /// 4. Submit proof for a signature token
    /// 5. Report the token through the callback
    async fn sign(&self) -> Result<()> {
        // Step 1: Fetch the challenge bound to this account
        let challenge = self.client.get_challenge(&self.account).await?;

        // Step 2: Fetch the statement to prove
        let statement = self.client.get_statement().await?;

        // Step 3: Request the proof from the wallet provider
        let proof = self
            .provider
            .request_id_proof(&self.account, &statement, &challenge)
            .await?;

        // Step 4: Submit the proof
        let signature = self.client.get_signature(&challenge, &proof).await?;

        info!(account = %self.account, "signature issued");

        // Step 5: Report, with literal quotes stripped; the verifier may
        // return a JSON-string-encoded token
        (self.on_sign)(signature.replace('"', ""));
        Ok(())
    }
}

impl fmt::Debug for SignatureButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureButton")
            .field("client", &self.client)
            .field("account", &self.account)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
