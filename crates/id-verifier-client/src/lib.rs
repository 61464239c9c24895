/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public verifier client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod sign;
pub mod types;
pub mod wallet;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    VerifierClient,
    VerifierError,
};

// Re-export commonly used types from sign
pub use sign::{SignCallback, SignatureButton};

// Re-export all types
pub use types::*;

// Re-export commonly used types from wallet
pub use wallet::{IdProofProvider, MockIdProofProvider, ProofCall};
