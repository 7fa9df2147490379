//! Mirror Node staking reward shapes
//! (`/api/v1/accounts/{id}/rewards`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Hbar, Timestamp};
use crate::restful::links::Page;

/// One staking reward payout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Reward {
    pub account_id: EntityId,
    /// Reward amount in tinybars.
    #[schema(example = 1000)]
    pub amount: Hbar,
    /// Consensus timestamp of the transaction that triggered the payout.
    pub timestamp: Timestamp,
}

pub type RewardPage = Page<Reward>;
