//! Verifiable credential status payloads.
//!
//! Credential statuses live on a status list anchored to the issuer's DID;
//! these models cover querying an issuer's list and flipping one entry.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::base::did_string::DID_HEDERA_PREFIX;
use crate::error::ModelError;

/// Status of one credential on the issuer's status list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
#[schema(as = CredentialStatus)]
pub enum Status {
    #[default]
    Active,
    Resumed,
    Suspended,
    Revoked,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resumed => "resumed",
            Self::Suspended => "suspended",
            Self::Revoked => "revoked",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "resumed" => Ok(Self::Resumed),
            "suspended" => Ok(Self::Suspended),
            "revoked" => Ok(Self::Revoked),
            _ => Err(format!("Invalid credential status: {}", s)),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query payload listing credentials issued under one DID.
///
/// The issuer string is stored exactly as given once it passes the
/// `did:hedera:` prefix check, since downstream registries match it
/// verbatim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = CredentialsPayload)]
pub struct Payload {
    #[schema(example = "did:hedera:testnet:z6Mk_0.0.111")]
    pub issuer_did: String,
    /// Restrict results to one status.
    pub status: Option<Status>,
}

impl Payload {
    pub fn new(issuer_did: impl Into<String>, status: Option<Status>) -> Result<Self, ModelError> {
        let issuer_did = issuer_did.into();
        if !issuer_did.starts_with(DID_HEDERA_PREFIX) {
            return Err(ModelError::InvalidIssuerDid);
        }
        Ok(Self { issuer_did, status })
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            issuer_did: String,
            status: Option<Status>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Payload::new(raw.issuer_did, raw.status).map_err(serde::de::Error::custom)
    }
}

/// Payload changing one credential's status on the issuer's list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatus {
    #[schema(example = "did:hedera:testnet:z6Mk_0.0.111")]
    pub issuer_did: String,
    /// Index of the credential on the issuer's status list.
    #[schema(example = 4)]
    pub status_list_index: u32,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_display_and_parsing() {
        let statuses = vec![
            (Status::Active, "active"),
            (Status::Resumed, "resumed"),
            (Status::Suspended, "suspended"),
            (Status::Revoked, "revoked"),
        ];

        for (status, string) in statuses {
            assert_eq!(status.as_str(), string);
            assert_eq!(status.to_string(), string);
            assert_eq!(Status::from_str(string).unwrap(), status);
        }

        assert!(Status::from_str("invalid").is_err());
    }

    #[test]
    fn test_payload_stores_issuer_unchanged() {
        let issuer = "did:hedera:testnet:z6Mk_0.0.111";
        let payload = Payload::new(issuer, Some(Status::Active)).unwrap();
        assert_eq!(payload.issuer_did, issuer);
    }

    #[test]
    fn test_payload_pins_invalid_issuer_message() {
        let err = Payload::new("did:web:example.com", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid issuerDID");
    }

    #[test]
    fn test_payload_deserialization_validates() {
        let ok: Payload = serde_json::from_str(
            r#"{"issuerDid":"did:hedera:mainnet:abc","status":"revoked"}"#,
        )
        .unwrap();
        assert_eq!(ok.status, Some(Status::Revoked));

        assert!(serde_json::from_str::<Payload>(r#"{"issuerDid":"did:key:abc"}"#).is_err());
    }
}
