//! DID document lifecycle payloads and the resolved document shape.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::base::{Did, PublicKeyMultibase};
use crate::did::verification::{Method, RelationshipKind};
use crate::error::ModelError;

/// JSON-LD context every resolved DID document carries.
pub const DID_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// Payload registering a new DID document. The root key doubles as the
/// initial authentication method.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DidRegister)]
pub struct Register {
    /// Root public key, multibase-encoded.
    #[schema(example = "z6MkpTHR8VNsBxYAAWHut2Geadd9jSwuBV8xRoAnwWsdvktH")]
    pub public_key_multibase: PublicKeyMultibase,
}

impl Register {
    /// Validates the multibase key and builds the payload. An empty input
    /// is reported as a missing key rather than a malformed one.
    pub fn new(public_key_multibase: &str) -> Result<Self, ModelError> {
        if public_key_multibase.is_empty() {
            return Err(ModelError::MissingRegistrationKey);
        }
        Ok(Self {
            public_key_multibase: public_key_multibase.parse()?,
        })
    }
}

impl<'de> Deserialize<'de> for Register {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            public_key_multibase: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        Register::new(&raw.public_key_multibase).map_err(serde::de::Error::custom)
    }
}

/// Payload rotating a DID document's root key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DidUpdate)]
pub struct Update {
    pub did: Did,
    pub public_key_multibase: PublicKeyMultibase,
}

/// Payload deactivating a DID document. Deactivation is permanent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DidDeactivate)]
pub struct Deactivate {
    pub did: Did,
}

/// A resolved DID document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "@context")]
    #[schema(example = "https://www.w3.org/ns/did/v1")]
    pub context: String,
    pub id: Did,
    /// Controller DID, usually the document's own.
    pub controller: Option<Did>,
    #[serde(default)]
    pub verification_method: Vec<Method>,
    /// Method IDs by relationship, e.g. which methods may authenticate.
    #[serde(default)]
    pub authentication: Vec<String>,
    #[serde(default)]
    pub assertion_method: Vec<String>,
    #[serde(default)]
    pub key_agreement: Vec<String>,
    #[serde(default)]
    pub capability_invocation: Vec<String>,
    #[serde(default)]
    pub capability_delegation: Vec<String>,
    #[serde(default)]
    pub deactivated: bool,
}

impl Document {
    /// Method IDs bound to one verification relationship.
    pub fn relationship(&self, kind: RelationshipKind) -> &[String] {
        match kind {
            RelationshipKind::Authentication => &self.authentication,
            RelationshipKind::AssertionMethod => &self.assertion_method,
            RelationshipKind::KeyAgreement => &self.key_agreement,
            RelationshipKind::CapabilityInvocation => &self.capability_invocation,
            RelationshipKind::CapabilityDelegation => &self.capability_delegation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const SAMPLE_KEY: &str = "z6MkpTHR8VNsBxYAAWHut2Geadd9jSwuBV8xRoAnwWsdvktH";

    #[test]
    fn test_register_accepts_multibase_key() {
        let register = Register::new(SAMPLE_KEY).unwrap();
        assert_eq!(register.public_key_multibase.as_str(), SAMPLE_KEY);
    }

    #[test]
    fn test_register_pins_missing_key_message() {
        let err = Register::new("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Public Key Multibase is required for DID document registration"
        );
    }

    #[test]
    fn test_register_rejects_malformed_key() {
        let err = Register::new("not-multibase").unwrap_err();
        assert!(matches!(err, ModelError::InvalidMultibaseKey(_)));
    }

    #[test]
    fn test_register_deserialization_validates() {
        let ok: Register = serde_json::from_str(&format!(
            r#"{{"publicKeyMultibase":"{SAMPLE_KEY}"}}"#
        ))
        .unwrap();
        assert_eq!(ok.public_key_multibase.as_str(), SAMPLE_KEY);

        assert!(serde_json::from_str::<Register>(r#"{"publicKeyMultibase":""}"#).is_err());
    }

    #[test]
    fn test_document_relationship_lookup() {
        let did = Did::from_str("did:hedera:testnet:z6Mk_0.0.111").unwrap();
        let doc = Document {
            context: DID_CONTEXT.to_string(),
            id: did.clone(),
            controller: Some(did.clone()),
            verification_method: vec![],
            authentication: vec![format!("{did}#did-root-key")],
            assertion_method: vec![],
            key_agreement: vec![],
            capability_invocation: vec![],
            capability_delegation: vec![],
            deactivated: false,
        };
        assert_eq!(doc.relationship(RelationshipKind::Authentication).len(), 1);
        assert!(doc.relationship(RelationshipKind::KeyAgreement).is_empty());
    }
}
