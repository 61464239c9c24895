/*
[INPUT]:  Wallet capability configuration
[OUTPUT]: Identity proofs produced by wallet providers
[POS]:    Wallet layer - external proof provider abstraction
[UPDATE]: When the provider capability or proof format changes
*/

pub mod provider;

pub use provider::{IdProofProvider, MockIdProofProvider, ProofCall};
