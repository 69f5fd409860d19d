//! Transport-agnostic JSON boundary for the calm.profile scoring engine.
//! An external HTTP handler deserializes request bodies through
//! [`protocol::AssessRequest`] and answers with the envelopes produced
//! here; no transport lives in this crate.

pub mod handler;
pub mod protocol;

pub use handler::*;
pub use protocol::*;
