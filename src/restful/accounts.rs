//! Mirror Node account shapes (`/api/v1/accounts`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Hbar, Key, Timestamp};
use crate::restful::links::Page;

/// Balance of one held token, as nested inside an account's balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TokenBalance {
    pub token_id: EntityId,
    /// Balance in the token's smallest denomination.
    #[schema(example = 1000)]
    pub balance: u64,
}

/// An account's hbar balance plus its token holdings, stamped with the
/// consensus instant the snapshot is valid at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[schema(as = AccountBalance)]
pub struct Balance {
    /// Snapshot consensus timestamp.
    pub timestamp: Timestamp,
    /// Hbar balance in tinybars.
    pub balance: Hbar,
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
}

/// Full account information as returned by `/api/v1/accounts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = AccountInfo)]
pub struct Info {
    #[schema(example = "0.0.1234")]
    pub account: EntityId,
    pub balance: Balance,
    /// Account key; absent for accounts created before key mirroring.
    pub key: Option<Key>,
    /// EVM address alias, hex with `0x` prefix.
    #[schema(example = "0x0000000000000000000000000000000000001234")]
    pub evm_address: Option<String>,
    pub created_timestamp: Option<Timestamp>,
    pub expiry_timestamp: Option<Timestamp>,
    pub auto_renew_period: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
    pub memo: Option<String>,
    pub max_automatic_token_associations: Option<i32>,
    pub ethereum_nonce: Option<i64>,
    // Staking state. At most one of the two targets is set.
    pub staked_account_id: Option<EntityId>,
    pub staked_node_id: Option<i64>,
    #[serde(default)]
    pub decline_reward: bool,
    /// Staking reward accrued but not yet paid, in tinybars.
    pub pending_reward: Option<Hbar>,
}

/// One page of `/api/v1/accounts`.
pub type InfoPage = Page<Info>;
