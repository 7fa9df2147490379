//! Account service request models: create, update, delete, transfer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::base::{EntityId, Hbar, Key};
use crate::error::ModelError;
use crate::ledger::{dao, validate_memo_bytes};

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = AccountCreate)]
pub struct Create {
    /// Starting balance, funded by the operator.
    pub initial_balance: Hbar,
    /// Key controlling the new account.
    pub key: Key,
    /// Maximum automatic token associations (0-5000).
    #[validate(range(min = 0, max = 5000, message = "Max token associations must be between 0 and 5000"))]
    #[serde(default)]
    #[schema(example = 0)]
    pub max_automatic_token_associations: i32,
    /// Account memo.
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    /// Account to stake to, mutually exclusive with `staked_node_id`.
    pub staked_account_id: Option<EntityId>,
    /// Node to stake to, mutually exclusive with `staked_account_id`.
    pub staked_node_id: Option<i64>,
    /// Whether to decline staking rewards.
    #[serde(default)]
    pub decline_staking_reward: bool,
    /// Whether incoming transfers require this account's signature.
    #[serde(default)]
    pub receiver_signature_required: bool,
    /// Optional governance approval gate.
    pub dao: Option<dao::Config>,
}

impl Create {
    /// Cross-field rules the per-field validators cannot express.
    pub fn check(&self) -> Result<(), ModelError> {
        if self.initial_balance.is_negative() {
            return Err(ModelError::InvalidRequest(
                "initial balance must not be negative".to_string(),
            ));
        }
        check_staking_target(self.staked_account_id.as_ref(), self.staked_node_id.as_ref())
    }
}

/// Request to update mutable account properties. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = AccountUpdate)]
pub struct Update {
    /// Account being updated.
    #[schema(example = "0.0.1234")]
    pub account_id: EntityId,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    pub staked_account_id: Option<EntityId>,
    pub staked_node_id: Option<i64>,
    pub decline_staking_reward: Option<bool>,
    /// Auto-renew period in seconds.
    #[validate(range(min = 1, message = "Auto-renew period must be positive"))]
    pub auto_renew_period: Option<i64>,
    pub dao: Option<dao::Config>,
}

impl Update {
    pub fn check(&self) -> Result<(), ModelError> {
        check_staking_target(self.staked_account_id.as_ref(), self.staked_node_id.as_ref())
    }
}

/// Request to delete an account, sweeping any remaining balance to the
/// transfer account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = AccountDelete)]
pub struct Delete {
    #[schema(example = "0.0.1234")]
    pub account_id: EntityId,
    /// Receives the deleted account's remaining balance.
    #[schema(example = "0.0.98")]
    pub transfer_account_id: EntityId,
    pub dao: Option<dao::Config>,
}

/// Request to transfer hbar between accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = AccountTransfer)]
pub struct Transfer {
    #[schema(example = "0.0.5005")]
    pub to: EntityId,
    /// Amount in tinybars, must be positive.
    pub amount: Hbar,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    pub dao: Option<dao::Config>,
}

impl Transfer {
    pub fn check(&self) -> Result<(), ModelError> {
        if self.amount.tinybars() <= 0 {
            return Err(ModelError::InvalidRequest(
                "transfer amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_staking_target(
    account: Option<&EntityId>,
    node: Option<&i64>,
) -> Result<(), ModelError> {
    if account.is_some() && node.is_some() {
        return Err(ModelError::InvalidRequest(
            "stakedAccountId and stakedNodeId are mutually exclusive".to_string(),
        ));
    }
    Ok(())
}
