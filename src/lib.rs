//! Validated model types for the Hedera Hashgraph network and its Mirror Node
//! REST API.
//!
//! The crate is a pure type layer: every public struct either mirrors a wire
//! shape (Mirror Node JSON, ledger request payload) or wraps a structured
//! string (entity ID, timestamp, DID) in a parsed newtype. Construction
//! validates; nothing here performs network I/O or signing.
//!
//! Layout follows the Hedera domain taxonomy:
//! - [`base`]: value types shared everywhere (entity IDs, timestamps, hbar,
//!   keys, DID strings)
//! - [`ledger`]: request models submitted toward the network (accounts,
//!   allowances, HCS, HTS, HFS, transaction receipts/records, DAO governance)
//! - [`restful`]: Mirror Node response models (accounts, tokens, topics,
//!   staking, transactions, airdrops, pagination)
//! - [`did`]: DID documents, verification methods, and verifiable credentials

pub mod base;
pub mod did;
pub mod error;
pub mod ledger;
pub mod openapi;
pub mod restful;

pub use base::{Did, DidNetwork, EntityId, Hbar, Key, KeyType, PublicKeyMultibase, Timestamp, TransactionId};
pub use error::ModelError;
pub use openapi::ApiDoc;
