//! OpenAPI schema aggregation for hosting services.

use utoipa::OpenApi;

use crate::base::{Did, DidNetwork, EntityId, Hbar, Key, KeyType, PublicKeyMultibase, Timestamp, TransactionId};
use crate::did::document::{Deactivate, Document, Register, Update as DidUpdate};
use crate::did::ownership;
use crate::did::vc;
use crate::did::verification::{Method, MethodType, RegisterMethod, RelationshipKind, RevokeMethod};
use crate::ledger::accounts;
use crate::ledger::allowance::{Allowance, AllowanceDelete};
use crate::ledger::dao;
use crate::ledger::hcs::{ChunkInfo, CreateTopic, DeleteTopic, SubmitMessage, UpdateTopic};
use crate::ledger::hfs::{AppendFile, CreateFile, DeleteFile, UpdateFile};
use crate::ledger::hts;
use crate::ledger::transaction::{
    HbarTransfer, NftTransfer, Receipt, Record, TokenTransfer, TransactionStatus,
};
use crate::restful;
use crate::restful::links::Links;

/// Components-only OpenAPI document covering every public model, for a
/// hosting service to merge into its own spec.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hashgraph Models",
        version = "0.1.0",
        description = "Validated model types for the Hedera Hashgraph network and Mirror Node REST API",
        license(
            name = "MIT"
        )
    ),
    components(
        schemas(
            // Base value types
            EntityId,
            Timestamp,
            TransactionId,
            Hbar,
            Key,
            KeyType,
            PublicKeyMultibase,
            Did,
            DidNetwork,
            // Ledger requests
            dao::Config,
            accounts::Create,
            accounts::Update,
            accounts::Delete,
            accounts::Transfer,
            Allowance,
            AllowanceDelete,
            CreateTopic,
            UpdateTopic,
            DeleteTopic,
            SubmitMessage,
            ChunkInfo,
            hts::CreateToken,
            hts::UpdateToken,
            hts::DeleteToken,
            hts::SupplyChange,
            hts::MintNft,
            hts::RemoveNfts,
            hts::TransferNft,
            hts::ComplianceToggle,
            hts::PauseToggle,
            hts::Association,
            hts::TokenKeys,
            hts::TokenType,
            hts::SupplyType,
            hts::CustomFee,
            CreateFile,
            AppendFile,
            UpdateFile,
            DeleteFile,
            Receipt,
            Record,
            TransactionStatus,
            HbarTransfer,
            TokenTransfer,
            NftTransfer,
            // Mirror Node responses
            Links,
            restful::accounts::Info,
            restful::accounts::Balance,
            restful::accounts::TokenBalance,
            restful::hts::TokenInfo,
            restful::hts::Nft,
            restful::hts::TokenRelationship,
            restful::hts::TokenDistribution,
            restful::hts::PauseStatus,
            restful::hts::FreezeStatus,
            restful::hts::KycStatus,
            restful::hcs::TopicInfo,
            restful::hcs::TopicMessage,
            restful::staking::Reward,
            restful::transactions::Transaction,
            restful::transactions::Transfer,
            restful::transactions::TokenTransfer,
            restful::transactions::NftTransfer,
            restful::transactions::StakingRewardTransfer,
            restful::airdrops::Airdrop,
            restful::airdrops::TimestampRange,
            // DID & verifiable credentials
            Register,
            DidUpdate,
            Deactivate,
            Document,
            Method,
            MethodType,
            RelationshipKind,
            RegisterMethod,
            RevokeMethod,
            ownership::Claim,
            ownership::Register,
            vc::Payload,
            vc::ChangeStatus,
            vc::Status,
        )
    ),
    tags(
        (name = "ledger", description = "Request models submitted toward the network"),
        (name = "restful", description = "Mirror Node REST response models"),
        (name = "did", description = "DID and verifiable credential models")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components registered");
        assert!(components.schemas.contains_key("EntityId"));
        assert!(components.schemas.contains_key("Allowance"));
        assert!(components.schemas.contains_key("TokenInfo"));
    }

    #[test]
    fn test_openapi_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("Hashgraph Models"));
    }
}
