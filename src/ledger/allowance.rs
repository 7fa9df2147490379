//! Allowance approvals, modeled as an explicit tagged union.
//!
//! The three allowance kinds carry different required fields, so each is a
//! variant with exactly its own shape rather than one struct of optionals.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Hbar};
use crate::error::ModelError;
use crate::ledger::dao;

/// Approval granting a spender authority over an owner's holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Allowance {
    /// Spender may transfer up to `amount` tinybars from the owner.
    #[serde(rename = "HBAR")]
    Hbar {
        owner_account_id: EntityId,
        spender_account_id: EntityId,
        amount: Hbar,
    },
    /// Spender may transfer up to `amount` units of a fungible token.
    #[serde(rename = "TOKEN")]
    Token {
        owner_account_id: EntityId,
        spender_account_id: EntityId,
        token_id: EntityId,
        amount: u64,
    },
    /// Spender may transfer the listed serials, or every serial when
    /// `approved_for_all` is set and the list is empty.
    #[serde(rename = "NFT")]
    Nft {
        owner_account_id: EntityId,
        spender_account_id: EntityId,
        token_id: EntityId,
        #[serde(default)]
        serial_numbers: Vec<u64>,
        #[serde(default)]
        approved_for_all: bool,
    },
}

impl Allowance {
    pub fn owner_account_id(&self) -> EntityId {
        match self {
            Self::Hbar { owner_account_id, .. }
            | Self::Token { owner_account_id, .. }
            | Self::Nft { owner_account_id, .. } => *owner_account_id,
        }
    }

    pub fn spender_account_id(&self) -> EntityId {
        match self {
            Self::Hbar { spender_account_id, .. }
            | Self::Token { spender_account_id, .. }
            | Self::Nft { spender_account_id, .. } => *spender_account_id,
        }
    }

    /// Kind-specific rules: hbar amounts positive, token amounts non-zero,
    /// NFT approvals naming either serials or the blanket flag.
    pub fn check(&self) -> Result<(), ModelError> {
        match self {
            Self::Hbar { amount, .. } => {
                if amount.tinybars() <= 0 {
                    return Err(ModelError::InvalidRequest(
                        "hbar allowance amount must be positive".to_string(),
                    ));
                }
            }
            Self::Token { amount, .. } => {
                if *amount == 0 {
                    return Err(ModelError::InvalidRequest(
                        "token allowance amount must be positive".to_string(),
                    ));
                }
            }
            Self::Nft {
                serial_numbers,
                approved_for_all,
                ..
            } => {
                if serial_numbers.is_empty() && !approved_for_all {
                    return Err(ModelError::InvalidRequest(
                        "NFT allowance requires serial numbers or approvedForAll".to_string(),
                    ));
                }
                if !serial_numbers.is_empty() && *approved_for_all {
                    return Err(ModelError::InvalidRequest(
                        "approvedForAll excludes explicit serial numbers".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Removes previously granted NFT allowances for the listed serials.
///
/// Only NFT allowances support targeted deletion; hbar and token allowances
/// are revoked by approving a zero amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceDelete {
    pub owner_account_id: EntityId,
    pub token_id: EntityId,
    pub serial_numbers: Vec<u64>,
    pub dao: Option<dao::Config>,
}

impl AllowanceDelete {
    pub fn check(&self) -> Result<(), ModelError> {
        if self.serial_numbers.is_empty() {
            return Err(ModelError::InvalidRequest(
                "allowance deletion requires at least one serial number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowance_serde_tag_per_variant() {
        let hbar = Allowance::Hbar {
            owner_account_id: EntityId::new(0, 0, 1),
            spender_account_id: EntityId::new(0, 0, 2),
            amount: Hbar::from_tinybars(500),
        };
        let json = serde_json::to_value(&hbar).unwrap();
        assert_eq!(json["type"], "HBAR");
        assert_eq!(json["amount"], 500);
        assert!(json.get("tokenId").is_none());

        let nft: Allowance = serde_json::from_str(
            r#"{"type":"NFT","ownerAccountId":"0.0.1","spenderAccountId":"0.0.2","tokenId":"0.0.300","serialNumbers":[1,2]}"#,
        )
        .unwrap();
        assert!(nft.check().is_ok());
        assert_eq!(nft.spender_account_id(), EntityId::new(0, 0, 2));
    }

    #[test]
    fn test_token_allowance_requires_nonzero_amount() {
        let allowance = Allowance::Token {
            owner_account_id: EntityId::new(0, 0, 1),
            spender_account_id: EntityId::new(0, 0, 2),
            token_id: EntityId::new(0, 0, 300),
            amount: 0,
        };
        assert!(allowance.check().is_err());
    }

    #[test]
    fn test_nft_allowance_needs_serials_or_blanket_flag() {
        let bare = Allowance::Nft {
            owner_account_id: EntityId::new(0, 0, 1),
            spender_account_id: EntityId::new(0, 0, 2),
            token_id: EntityId::new(0, 0, 300),
            serial_numbers: vec![],
            approved_for_all: false,
        };
        assert!(bare.check().is_err());

        let conflicting = Allowance::Nft {
            owner_account_id: EntityId::new(0, 0, 1),
            spender_account_id: EntityId::new(0, 0, 2),
            token_id: EntityId::new(0, 0, 300),
            serial_numbers: vec![7],
            approved_for_all: true,
        };
        assert!(conflicting.check().is_err());
    }

    #[test]
    fn test_allowance_delete_requires_serials() {
        let del = AllowanceDelete {
            owner_account_id: EntityId::new(0, 0, 1),
            token_id: EntityId::new(0, 0, 300),
            serial_numbers: vec![],
            dao: None,
        };
        assert!(del.check().is_err());
    }

    #[test]
    fn test_unknown_allowance_type_rejected() {
        let res = serde_json::from_str::<Allowance>(
            r#"{"type":"FILE","ownerAccountId":"0.0.1","spenderAccountId":"0.0.2"}"#,
        );
        assert!(res.is_err());
    }
}
