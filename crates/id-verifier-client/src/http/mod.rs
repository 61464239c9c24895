/*
[INPUT]:  HTTP client configuration and verifier endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST communication with the verifier backend
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod verifier;

pub use error::{Result, VerifierError};

pub use client::{ClientConfig, VerifierClient};
