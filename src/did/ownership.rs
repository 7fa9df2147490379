//! DID ownership transfer payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::base::{Did, PublicKeyMultibase};

/// Payload claiming ownership of an existing DID by presenting its private
/// key material. The key is carried opaquely; verification happens at the
/// registrar.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DidOwnershipClaim)]
pub struct Claim {
    pub did: Did,
    /// DER-encoded private key, hex.
    #[validate(length(min = 1, message = "Private key is required to claim DID ownership"))]
    pub private_key: String,
}

/// Payload re-registering a claimed DID under a new controller key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DidOwnershipRegister)]
pub struct Register {
    pub did: Did,
    /// New controller public key, multibase-encoded.
    pub public_key_multibase: PublicKeyMultibase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_claim_requires_private_key() {
        let claim = Claim {
            did: Did::from_str("did:hedera:testnet:z6Mk_0.0.111").unwrap(),
            private_key: String::new(),
        };
        assert!(claim.validate().is_err());
    }

    #[test]
    fn test_ownership_register_serde_shape() {
        let register: Register = serde_json::from_str(
            r#"{
                "did": "did:hedera:testnet:z6Mk_0.0.111",
                "publicKeyMultibase": "z6MkpTHR8VNsBxYAAWHut2Geadd9jSwuBV8xRoAnwWsdvktH"
            }"#,
        )
        .unwrap();
        assert_eq!(register.did.id(), "z6Mk_0.0.111");
    }
}
