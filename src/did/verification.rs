//! Verification methods and relationships within a DID document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::base::{Did, PublicKeyMultibase};

/// The verification relationships DID Core defines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKind {
    Authentication,
    AssertionMethod,
    KeyAgreement,
    CapabilityInvocation,
    CapabilityDelegation,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::AssertionMethod => "assertionMethod",
            Self::KeyAgreement => "keyAgreement",
            Self::CapabilityInvocation => "capabilityInvocation",
            Self::CapabilityDelegation => "capabilityDelegation",
        }
    }
}

impl std::str::FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authentication" => Ok(Self::Authentication),
            "assertionMethod" => Ok(Self::AssertionMethod),
            "keyAgreement" => Ok(Self::KeyAgreement),
            "capabilityInvocation" => Ok(Self::CapabilityInvocation),
            "capabilityDelegation" => Ok(Self::CapabilityDelegation),
            _ => Err(format!("Invalid verification relationship: {}", s)),
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A verification method: a key bound to a DID under a fragment identifier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Method ID, the controller DID plus a fragment
    /// (`did:hedera:...#key-1`).
    #[validate(length(min = 1, message = "Verification method ID is required"))]
    #[schema(example = "did:hedera:testnet:z6Mk_0.0.111#did-root-key")]
    pub id: String,
    /// Method type; Hedera DIDs use Ed25519 2020 keys.
    #[serde(rename = "type")]
    #[schema(example = "Ed25519VerificationKey2020")]
    pub method_type: MethodType,
    pub controller: Did,
    pub public_key_multibase: PublicKeyMultibase,
}

impl Method {
    /// The fragment after `#`, or the whole ID when there is none.
    pub fn fragment(&self) -> &str {
        self.id.rsplit_once('#').map_or(self.id.as_str(), |(_, f)| f)
    }
}

/// Supported verification method types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
pub enum MethodType {
    #[default]
    Ed25519VerificationKey2020,
}

/// Payload adding or rotating a verification method, optionally binding it
/// to a relationship.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMethod {
    pub did: Did,
    #[validate(nested)]
    pub method: Method,
    /// Relationship to bind the method under; plain `verificationMethod`
    /// when absent.
    pub relationship: Option<RelationshipKind>,
}

/// Payload revoking a verification method by its fragment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevokeMethod {
    pub did: Did,
    #[validate(length(min = 1, message = "Verification method ID is required"))]
    pub method_id: String,
    pub relationship: Option<RelationshipKind>,
}
