/*
[INPUT]:  Flow configuration (client, provider, account, callback)
[OUTPUT]: Signature tokens delivered to the hosting environment
[POS]:    Flow layer - signature request orchestration
[UPDATE]: When flow steps or the control contract change
*/

pub mod button;

pub use button::{SignCallback, SignatureButton};
