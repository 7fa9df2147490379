//! Value types shared by every model family.
//!
//! These replace the SDK classes the wire shapes are usually typed with:
//! a parsed newtype per structured string, plus a tinybar-denominated
//! currency wrapper. Once a value of one of these types exists, its format
//! invariant holds.

pub mod did_string;
pub mod entity_id;
pub mod hbar;
pub mod key;
pub mod timestamp;
pub mod transaction_id;

pub use did_string::{Did, DidNetwork};
pub use entity_id::EntityId;
pub use hbar::Hbar;
pub use key::{Key, KeyType, PublicKeyMultibase};
pub use timestamp::Timestamp;
pub use transaction_id::TransactionId;
