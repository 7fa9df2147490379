//! Request models submitted toward the Hedera network.
//!
//! Everything here is camelCase on the wire, matching the JSON request
//! payloads a hosting API accepts. Mutating requests optionally carry a
//! [`dao::Config`] governance gate recording where approval reached
//! consensus.

use validator::ValidationError;

pub mod accounts;
pub mod allowance;
pub mod dao;
pub mod hcs;
pub mod hfs;
pub mod hts;
pub mod transaction;

pub use allowance::{Allowance, AllowanceDelete};
pub use dao::Config as DaoConfig;
pub use transaction::{Receipt, Record, TransactionStatus};

/// Upper bound on user-supplied memos, in bytes of the UTF-8 encoding.
pub const MAX_MEMO_BYTES: usize = 100;

/// The network limits memos by encoded size, not character count, so
/// validator's `length` is not enough on its own.
pub(crate) fn validate_memo_bytes(memo: &str) -> Result<(), ValidationError> {
    if memo.len() > MAX_MEMO_BYTES {
        let mut err = ValidationError::new("memo_bytes");
        err.message = Some("Memo must not exceed 100 bytes".into());
        return Err(err);
    }
    Ok(())
}
