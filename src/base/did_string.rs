//! Hedera DID strings (`did:hedera:{network}:{id}`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::openapi::schema::Type;
use utoipa::openapi::{ObjectBuilder, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::error::ModelError;

pub const DID_HEDERA_PREFIX: &str = "did:hedera:";

/// Network segment of a Hedera DID.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DidNetwork {
    Mainnet,
    Testnet,
    Previewnet,
    Localnode,
}

impl DidNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Previewnet => "previewnet",
            Self::Localnode => "localnode",
        }
    }
}

impl FromStr for DidNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "previewnet" => Ok(Self::Previewnet),
            "localnode" => Ok(Self::Localnode),
            _ => Err(format!("Invalid DID network: {}", s)),
        }
    }
}

impl fmt::Display for DidNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed Hedera DID.
///
/// The identifier segment is kept opaque: the method spec binds it to a key
/// and registry topic, but consumers of these models only ever pass it
/// through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Did {
    network: DidNetwork,
    id: String,
}

impl Did {
    pub fn new(network: DidNetwork, id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.is_empty() || id.contains(char::is_whitespace) {
            return Err(ModelError::InvalidDid(format!(
                "{DID_HEDERA_PREFIX}{network}:{id}"
            )));
        }
        Ok(Self { network, id })
    }

    #[must_use]
    pub fn network(&self) -> DidNetwork {
        self.network
    }

    /// The method-specific identifier after the network segment.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for Did {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidDid(s.to_string());
        let rest = s.strip_prefix(DID_HEDERA_PREFIX).ok_or_else(invalid)?;
        let (network, id) = rest.split_once(':').ok_or_else(invalid)?;
        let network = network.parse().map_err(|_| invalid())?;
        Self::new(network, id).map_err(|_| invalid())
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DID_HEDERA_PREFIX}{}:{}", self.network, self.id)
    }
}

impl Serialize for Did {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Did {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialSchema for Did {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .examples(["did:hedera:testnet:z6MkgUv5CvjRP6AsvEYqSRN7djB6p4zK9bcMQ93g5yK6Td7N_0.0.29613327"])
            .into()
    }
}

impl ToSchema for Did {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Did")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DID: &str =
        "did:hedera:testnet:z6MkgUv5CvjRP6AsvEYqSRN7djB6p4zK9bcMQ93g5yK6Td7N_0.0.29613327";

    #[test]
    fn test_did_roundtrip() {
        let did = Did::from_str(SAMPLE_DID).unwrap();
        assert_eq!(did.network(), DidNetwork::Testnet);
        assert_eq!(
            did.id(),
            "z6MkgUv5CvjRP6AsvEYqSRN7djB6p4zK9bcMQ93g5yK6Td7N_0.0.29613327"
        );
        assert_eq!(did.to_string(), SAMPLE_DID);
    }

    #[test]
    fn test_did_rejects_malformed_strings() {
        for bad in [
            "",
            "did:web:example.com",
            "did:hedera:",
            "did:hedera:testnet",
            "did:hedera:testnet:",
            "did:hedera:devnet:z6Mk",
            "hedera:testnet:z6Mk",
        ] {
            assert!(Did::from_str(bad).is_err(), "expected rejection: {bad:?}");
        }
    }

    #[test]
    fn test_did_serde_as_string() {
        let did = Did::from_str(SAMPLE_DID).unwrap();
        let json = serde_json::to_string(&did).unwrap();
        let back: Did = serde_json::from_str(&json).unwrap();
        assert_eq!(back, did);
    }
}
