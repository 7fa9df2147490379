//! DID documents, verification methods and verifiable credentials, per the
//! Hedera DID method over HCS.

pub mod document;
pub mod ownership;
pub mod vc;
pub mod verification;

pub use document::{Deactivate, Document, Register, Update};
pub use verification::{Method, RelationshipKind};
