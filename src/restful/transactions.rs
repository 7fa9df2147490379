//! Mirror Node transaction shapes (`/api/v1/transactions`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Hbar, Timestamp};
use crate::restful::links::Page;

/// One hbar adjustment in a transaction's transfer list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Transfer {
    pub account: EntityId,
    /// Tinybars; debits are negative.
    pub amount: Hbar,
    #[serde(default)]
    pub is_approval: bool,
}

/// One fungible-token adjustment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TokenTransfer {
    pub token_id: EntityId,
    pub account: EntityId,
    pub amount: i64,
    #[serde(default)]
    pub is_approval: bool,
}

/// One NFT serial changing hands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NftTransfer {
    pub token_id: EntityId,
    pub serial_number: u64,
    pub sender_account_id: Option<EntityId>,
    pub receiver_account_id: EntityId,
    #[serde(default)]
    pub is_approval: bool,
}

/// A staking reward paid out as a side effect of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct StakingRewardTransfer {
    pub account: EntityId,
    pub amount: Hbar,
}

/// A transaction as the Mirror Node reports it.
///
/// The mirror renders the transaction ID with dashes
/// (`0.0.1234-1700000000-000000001`) rather than the SDK's `@` form, so it
/// stays a plain string here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    #[schema(example = "0.0.1234-1700000000-000000001")]
    pub transaction_id: String,
    pub consensus_timestamp: Timestamp,
    /// Hedera transaction type name.
    #[schema(example = "CRYPTOTRANSFER")]
    pub name: String,
    /// Result status name.
    #[schema(example = "SUCCESS")]
    pub result: String,
    /// Fee charged to the payer, in tinybars.
    pub charged_tx_fee: Hbar,
    pub memo_base64: Option<String>,
    /// Base64-encoded transaction hash.
    pub transaction_hash: Option<String>,
    pub node: Option<EntityId>,
    #[serde(default)]
    pub nonce: u32,
    #[serde(default)]
    pub scheduled: bool,
    /// Consensus timestamp of the parent, for child transactions.
    pub parent_consensus_timestamp: Option<Timestamp>,
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub token_transfers: Vec<TokenTransfer>,
    #[serde(default)]
    pub nft_transfers: Vec<NftTransfer>,
    #[serde(default)]
    pub staking_reward_transfers: Vec<StakingRewardTransfer>,
}

impl Transaction {
    /// Whether the transaction reached consensus successfully.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.result == "SUCCESS"
    }

    /// Net hbar movement for one account across the transfer list.
    #[must_use]
    pub fn net_transfer_for(&self, account: EntityId) -> Hbar {
        self.transfers
            .iter()
            .filter(|t| t.account == account)
            .fold(Hbar::ZERO, |acc, t| {
                acc.checked_add(t.amount).unwrap_or(acc)
            })
    }
}

pub type TransactionPage = Page<Transaction>;
