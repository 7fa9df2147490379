//! Token service request models: creation, supply changes, compliance
//! controls, associations and NFT operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::base::{EntityId, Hbar, Key};
use crate::error::ModelError;
use crate::ledger::{dao, validate_memo_bytes};

/// Maximum metadata length for a minted NFT, in bytes.
pub const MAX_NFT_METADATA_BYTES: usize = 100;

/// Token category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
pub enum TokenType {
    #[default]
    #[serde(rename = "FUNGIBLE_COMMON")]
    FungibleCommon,
    #[serde(rename = "NON_FUNGIBLE_UNIQUE")]
    NonFungibleUnique,
}

/// Whether the token supply is capped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupplyType {
    #[default]
    Infinite,
    Finite,
}

/// The administrative key set attached to a token at creation. Every key is
/// optional; omitting one permanently disables the matching operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenKeys {
    pub admin_key: Option<Key>,
    pub kyc_key: Option<Key>,
    pub freeze_key: Option<Key>,
    pub wipe_key: Option<Key>,
    pub supply_key: Option<Key>,
    pub pause_key: Option<Key>,
    pub fee_schedule_key: Option<Key>,
}

/// Custom fee charged on token transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum CustomFee {
    /// Flat fee per transfer, in hbar or a denominating token.
    #[serde(rename = "FIXED")]
    Fixed {
        collector_account_id: EntityId,
        amount: u64,
        /// Token the fee is denominated in; hbar when absent.
        denominating_token_id: Option<EntityId>,
    },
    /// Fraction of the transferred amount (fungible tokens only).
    #[serde(rename = "FRACTIONAL")]
    Fractional {
        collector_account_id: EntityId,
        numerator: u64,
        denominator: u64,
        #[serde(default)]
        minimum_amount: u64,
        maximum_amount: Option<u64>,
    },
    /// Fraction of the exchanged value (NFTs only), with a fallback fixed
    /// fee when no value is exchanged.
    #[serde(rename = "ROYALTY")]
    Royalty {
        collector_account_id: EntityId,
        numerator: u64,
        denominator: u64,
        fallback_fee: Option<Hbar>,
    },
}

impl CustomFee {
    pub fn check(&self) -> Result<(), ModelError> {
        match self {
            Self::Fixed { amount, .. } => {
                if *amount == 0 {
                    return Err(ModelError::InvalidRequest(
                        "fixed fee amount must be positive".to_string(),
                    ));
                }
            }
            Self::Fractional {
                denominator,
                minimum_amount,
                maximum_amount,
                ..
            } => {
                if *denominator == 0 {
                    return Err(ModelError::InvalidRequest(
                        "fractional fee denominator must not be zero".to_string(),
                    ));
                }
                if let Some(max) = maximum_amount {
                    if max < minimum_amount {
                        return Err(ModelError::InvalidRequest(
                            "fractional fee maximum is below its minimum".to_string(),
                        ));
                    }
                }
            }
            Self::Royalty { denominator, .. } => {
                if *denominator == 0 {
                    return Err(ModelError::InvalidRequest(
                        "royalty fee denominator must not be zero".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Request to create a token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateToken {
    #[validate(length(min = 1, max = 100, message = "Token name must be between 1 and 100 characters"))]
    #[schema(example = "My Token")]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Token symbol must be between 1 and 100 characters"))]
    #[schema(example = "MTK")]
    pub symbol: String,
    /// Decimal places; must be 0 for NFTs.
    #[serde(default)]
    #[schema(example = 2)]
    pub decimals: u32,
    /// Starting supply in the smallest denomination; must be 0 for NFTs.
    #[serde(default)]
    pub initial_supply: u64,
    #[serde(default)]
    pub token_type: TokenType,
    #[serde(default)]
    pub supply_type: SupplyType,
    /// Required when `supply_type` is FINITE.
    pub max_supply: Option<u64>,
    /// Account receiving the initial supply and any minted units.
    #[schema(example = "0.0.1234")]
    pub treasury_account_id: EntityId,
    #[serde(default)]
    pub keys: TokenKeys,
    #[serde(default)]
    pub custom_fees: Vec<CustomFee>,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    pub dao: Option<dao::Config>,
}

impl CreateToken {
    /// Cross-field rules tying supply type, token type and fee shapes
    /// together.
    pub fn check(&self) -> Result<(), ModelError> {
        match self.supply_type {
            SupplyType::Finite => {
                let max = self.max_supply.ok_or_else(|| {
                    ModelError::InvalidRequest(
                        "maxSupply is required for FINITE supply tokens".to_string(),
                    )
                })?;
                if self.initial_supply > max {
                    return Err(ModelError::InvalidRequest(
                        "initial supply exceeds maxSupply".to_string(),
                    ));
                }
            }
            SupplyType::Infinite => {
                if self.max_supply.is_some() {
                    return Err(ModelError::InvalidRequest(
                        "maxSupply is not allowed for INFINITE supply tokens".to_string(),
                    ));
                }
            }
        }
        if self.token_type == TokenType::NonFungibleUnique
            && (self.decimals != 0 || self.initial_supply != 0)
        {
            return Err(ModelError::InvalidRequest(
                "NFTs require zero decimals and zero initial supply".to_string(),
            ));
        }
        for fee in &self.custom_fees {
            fee.check()?;
        }
        Ok(())
    }
}

/// Request to update mutable token properties. Requires the admin key.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToken {
    #[schema(example = "0.0.45678")]
    pub token_id: EntityId,
    #[validate(length(min = 1, max = 100, message = "Token name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Token symbol must be between 1 and 100 characters"))]
    pub symbol: Option<String>,
    pub treasury_account_id: Option<EntityId>,
    pub keys: Option<TokenKeys>,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    pub dao: Option<dao::Config>,
}

/// Request to delete a token. Requires the admin key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteToken {
    #[schema(example = "0.0.45678")]
    pub token_id: EntityId,
    pub dao: Option<dao::Config>,
}

/// Fungible supply change: mint to or burn from the treasury, or wipe from
/// a holding account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChange {
    #[schema(example = "0.0.45678")]
    pub token_id: EntityId,
    /// Units in the smallest denomination, must be positive.
    #[schema(example = 1000)]
    pub amount: u64,
    /// Holder the units are wiped from; unused for mint/burn.
    pub account_id: Option<EntityId>,
    pub dao: Option<dao::Config>,
}

impl SupplyChange {
    pub fn check(&self) -> Result<(), ModelError> {
        if self.amount == 0 {
            return Err(ModelError::InvalidRequest(
                "supply change amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request to mint NFTs, one serial per metadata entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MintNft {
    #[schema(example = "0.0.45678")]
    pub token_id: EntityId,
    /// Metadata per minted serial, each at most
    /// [`MAX_NFT_METADATA_BYTES`] bytes.
    pub metadata: Vec<String>,
    pub dao: Option<dao::Config>,
}

impl MintNft {
    pub fn check(&self) -> Result<(), ModelError> {
        if self.metadata.is_empty() {
            return Err(ModelError::InvalidRequest(
                "NFT mint requires at least one metadata entry".to_string(),
            ));
        }
        if let Some(oversized) = self
            .metadata
            .iter()
            .find(|m| m.len() > MAX_NFT_METADATA_BYTES)
        {
            return Err(ModelError::InvalidRequest(format!(
                "NFT metadata exceeds {MAX_NFT_METADATA_BYTES} bytes: {oversized}"
            )));
        }
        Ok(())
    }
}

/// Request to burn or wipe specific NFT serials.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveNfts {
    #[schema(example = "0.0.45678")]
    pub token_id: EntityId,
    pub serial_numbers: Vec<u64>,
    /// Holder the serials are wiped from; unused for burn.
    pub account_id: Option<EntityId>,
    pub dao: Option<dao::Config>,
}

impl RemoveNfts {
    pub fn check(&self) -> Result<(), ModelError> {
        if self.serial_numbers.is_empty() {
            return Err(ModelError::InvalidRequest(
                "at least one serial number is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request to transfer one NFT serial between accounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferNft {
    pub token_id: EntityId,
    #[schema(example = 1)]
    pub serial_number: u64,
    pub sender_account_id: EntityId,
    pub receiver_account_id: EntityId,
    pub dao: Option<dao::Config>,
}

/// Per-account compliance toggle: freeze/unfreeze or KYC grant/revoke.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceToggle {
    pub token_id: EntityId,
    pub account_id: EntityId,
    pub dao: Option<dao::Config>,
}

/// Token-wide pause/unpause. Requires the pause key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PauseToggle {
    pub token_id: EntityId,
    pub dao: Option<dao::Config>,
}

/// Associates or dissociates an account with the listed tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub account_id: EntityId,
    pub token_ids: Vec<EntityId>,
    pub dao: Option<dao::Config>,
}

impl Association {
    pub fn check(&self) -> Result<(), ModelError> {
        if self.token_ids.is_empty() {
            return Err(ModelError::InvalidRequest(
                "at least one token ID is required".to_string(),
            ));
        }
        Ok(())
    }
}
