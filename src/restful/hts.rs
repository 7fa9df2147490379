//! Mirror Node token shapes (`/api/v1/tokens`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Key, Timestamp};
use crate::ledger::hts::{SupplyType, TokenType};
use crate::restful::links::Page;

/// Token pause state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PauseStatus {
    Paused,
    Unpaused,
    /// Token has no pause key.
    NotApplicable,
}

/// Token information as returned by `/api/v1/tokens/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenInfo {
    pub token_id: EntityId,
    #[schema(example = "My Token")]
    pub name: String,
    #[schema(example = "MTK")]
    pub symbol: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub decimals: u32,
    pub supply_type: SupplyType,
    #[schema(example = 1000000)]
    pub total_supply: u64,
    pub max_supply: Option<u64>,
    pub treasury_account_id: EntityId,
    pub admin_key: Option<Key>,
    pub kyc_key: Option<Key>,
    pub freeze_key: Option<Key>,
    pub wipe_key: Option<Key>,
    pub supply_key: Option<Key>,
    pub pause_key: Option<Key>,
    pub fee_schedule_key: Option<Key>,
    pub pause_status: PauseStatus,
    pub created_timestamp: Option<Timestamp>,
    pub modified_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub deleted: bool,
    pub memo: Option<String>,
}

/// One minted NFT. Identity is the `(token_id, serial_number)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Nft {
    pub token_id: EntityId,
    #[schema(example = 1)]
    pub serial_number: u64,
    pub account_id: EntityId,
    /// Base64-encoded metadata set at mint.
    pub metadata: Option<String>,
    pub created_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub deleted: bool,
    /// Spender granted an allowance over this serial.
    pub spender: Option<EntityId>,
    /// Spender acting under an approved-for-all allowance.
    pub delegating_spender: Option<EntityId>,
}

/// Freeze state of one account's relationship to a token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreezeStatus {
    Frozen,
    Unfrozen,
    NotApplicable,
}

/// KYC state of one account's relationship to a token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    Granted,
    Revoked,
    NotApplicable,
}

/// An account's relationship to one token
/// (`/api/v1/accounts/{id}/tokens`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TokenRelationship {
    pub token_id: EntityId,
    pub balance: u64,
    pub freeze_status: FreezeStatus,
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub automatic_association: bool,
    pub created_timestamp: Option<Timestamp>,
}

/// One holder's balance in a token's distribution
/// (`/api/v1/tokens/{id}/balances`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TokenDistribution {
    pub account: EntityId,
    pub balance: u64,
}

pub type TokenInfoPage = Page<TokenInfo>;
pub type NftPage = Page<Nft>;
pub type TokenRelationshipPage = Page<TokenRelationship>;
pub type TokenDistributionPage = Page<TokenDistribution>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_info_parses_mirror_json() {
        let json = r#"{
            "token_id": "0.0.45678",
            "name": "My Token",
            "symbol": "MTK",
            "type": "FUNGIBLE_COMMON",
            "decimals": 2,
            "supply_type": "FINITE",
            "total_supply": 1000000,
            "max_supply": 2000000,
            "treasury_account_id": "0.0.1234",
            "admin_key": {"_type": "ED25519", "key": "aabbcc"},
            "kyc_key": null,
            "freeze_key": null,
            "wipe_key": null,
            "supply_key": null,
            "pause_key": null,
            "fee_schedule_key": null,
            "pause_status": "NOT_APPLICABLE",
            "created_timestamp": "1650000000.000000000",
            "modified_timestamp": null,
            "deleted": false,
            "memo": ""
        }"#;
        let info: TokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.token_type, TokenType::FungibleCommon);
        assert_eq!(info.supply_type, SupplyType::Finite);
        assert_eq!(info.max_supply, Some(2_000_000));
        assert_eq!(info.pause_status, PauseStatus::NotApplicable);
    }

    #[test]
    fn test_nft_composite_identity_fields() {
        let json = r#"{
            "token_id": "0.0.500",
            "serial_number": 42,
            "account_id": "0.0.1234",
            "metadata": "aXBmczovL2JhZnk=",
            "created_timestamp": null,
            "deleted": false,
            "spender": "0.0.77",
            "delegating_spender": null
        }"#;
        let nft: Nft = serde_json::from_str(json).unwrap();
        assert_eq!((nft.token_id, nft.serial_number), (EntityId::new(0, 0, 500), 42));
        assert_eq!(nft.spender, Some(EntityId::new(0, 0, 77)));
    }

    #[test]
    fn test_token_relationship_statuses() {
        let json = r#"{
            "token_id": "0.0.500",
            "balance": 7,
            "freeze_status": "UNFROZEN",
            "kyc_status": "GRANTED",
            "automatic_association": true,
            "created_timestamp": null
        }"#;
        let rel: TokenRelationship = serde_json::from_str(json).unwrap();
        assert_eq!(rel.freeze_status, FreezeStatus::Unfrozen);
        assert_eq!(rel.kyc_status, KycStatus::Granted);
        assert!(rel.automatic_association);
    }
}
