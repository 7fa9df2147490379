//! Public key representations: Mirror Node hex keys and multibase DID keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::openapi::schema::Type;
use utoipa::openapi::{ObjectBuilder, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::error::ModelError;

/// Key encoding reported by the Mirror Node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum KeyType {
    #[serde(rename = "ED25519")]
    Ed25519,
    #[serde(rename = "ECDSA_SECP256K1")]
    EcdsaSecp256k1,
    /// Complex keys (key lists, threshold keys) arrive as raw protobuf.
    ProtobufEncoded,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ED25519",
            Self::EcdsaSecp256k1 => "ECDSA_SECP256K1",
            Self::ProtobufEncoded => "ProtobufEncoded",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A public key as the Mirror Node serializes it: an encoding discriminator
/// plus hex-encoded key material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Key {
    /// Key encoding.
    #[serde(rename = "_type")]
    #[schema(example = "ED25519")]
    pub key_type: KeyType,
    /// Hex-encoded key material.
    #[schema(example = "308201a2300d06092a864886f70d01010105000382018f00")]
    pub key: String,
}

impl Key {
    /// Builds a key after checking the material is valid lowercase-or-upper
    /// hex of non-zero length.
    pub fn new(key_type: KeyType, key: impl Into<String>) -> Result<Self, ModelError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ModelError::InvalidKeyMaterial(
                "key material is empty".to_string(),
            ));
        }
        hex::decode(&key)
            .map_err(|e| ModelError::InvalidKeyMaterial(format!("{key}: {e}")))?;
        Ok(Self { key_type, key })
    }
}

/// A multibase-encoded public key: `z` prefix followed by base58btc data,
/// the encoding DID documents use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKeyMultibase(String);

impl PublicKeyMultibase {
    /// The decoded key bytes (without the multibase prefix).
    pub fn decode(&self) -> Vec<u8> {
        // Validated at construction, so this cannot fail.
        bs58::decode(&self.0[1..]).into_vec().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PublicKeyMultibase {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidMultibaseKey(s.to_string());
        let rest = s.strip_prefix('z').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Err(invalid());
        }
        bs58::decode(rest).into_vec().map_err(|_| invalid())?;
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for PublicKeyMultibase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PublicKeyMultibase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublicKeyMultibase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialSchema for PublicKeyMultibase {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .pattern(Some("^z[1-9A-HJ-NP-Za-km-z]+$"))
            .examples(["z6MkpTHR8VNsBxYAAWHut2Geadd9jSwuBV8xRoAnwWsdvktH"])
            .into()
    }
}

impl ToSchema for PublicKeyMultibase {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("PublicKeyMultibase")
    }
}
