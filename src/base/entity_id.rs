//! Hedera entity identifiers (`shard.realm.num`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::openapi::schema::Type;
use utoipa::openapi::{ObjectBuilder, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::error::ModelError;

/// Identifier of any Hedera entity: account, token, topic, file, contract
/// or schedule. Rendered on the wire as `shard.realm.num`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    #[must_use]
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Whether this ID sits in the default `0.0` shard/realm, where all
    /// entities on today's networks live.
    #[must_use]
    pub const fn is_default_realm(&self) -> bool {
        self.shard == 0 && self.realm == 0
    }
}

impl FromStr for EntityId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidEntityId(s.to_string());
        let mut parts = s.split('.');
        let shard = parse_part(parts.next()).ok_or_else(invalid)?;
        let realm = parse_part(parts.next()).ok_or_else(invalid)?;
        let num = parse_part(parts.next()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self { shard, realm, num })
    }
}

/// Accepts exactly the strings `^\d+$` matches; `u64::from_str` alone would
/// also take a leading `+`.
fn parse_part(part: Option<&str>) -> Option<u64> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialSchema for EntityId {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .pattern(Some(r"^\d+\.\d+\.\d+$"))
            .examples(["0.0.1234"])
            .into()
    }
}

impl ToSchema for EntityId {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("EntityId")
    }
}
