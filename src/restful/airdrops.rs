//! Mirror Node airdrop shapes
//! (`/api/v1/accounts/{id}/airdrops/outstanding`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Timestamp};
use crate::restful::links::Page;

/// Validity window of an airdrop, bounded by consensus timestamps. `to` is
/// open for outstanding airdrops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TimestampRange {
    pub from: Timestamp,
    pub to: Option<Timestamp>,
}

/// A pending token airdrop awaiting claim by the receiver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Airdrop {
    /// Units for fungible airdrops; 0 for NFT airdrops.
    pub amount: u64,
    pub receiver_id: EntityId,
    pub sender_id: EntityId,
    pub token_id: EntityId,
    /// Serial for NFT airdrops.
    pub serial_number: Option<u64>,
    pub timestamp: TimestampRange,
}

impl Airdrop {
    /// NFT airdrops carry a serial instead of an amount.
    #[must_use]
    pub fn is_nft(&self) -> bool {
        self.serial_number.is_some()
    }
}

pub type AirdropPage = Page<Airdrop>;
