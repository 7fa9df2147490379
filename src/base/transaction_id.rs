//! Transaction identifiers (`accountId@seconds.nanoseconds`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::openapi::schema::Type;
use utoipa::openapi::{ObjectBuilder, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::base::{EntityId, Timestamp};
use crate::error::ModelError;

/// Identifies a transaction by its fee payer and chosen valid-start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId {
    pub account_id: EntityId,
    pub valid_start: Timestamp,
}

impl TransactionId {
    #[must_use]
    pub const fn new(account_id: EntityId, valid_start: Timestamp) -> Self {
        Self {
            account_id,
            valid_start,
        }
    }
}

impl FromStr for TransactionId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTransactionId(s.to_string());
        let (account, instant) = s.split_once('@').ok_or_else(invalid)?;
        let account_id = account.parse().map_err(|_| invalid())?;
        let valid_start = instant.parse().map_err(|_| invalid())?;
        Ok(Self {
            account_id,
            valid_start,
        })
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.account_id, self.valid_start)
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialSchema for TransactionId {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .examples(["0.0.1234@1234567890.123456789"])
            .into()
    }
}

impl ToSchema for TransactionId {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("TransactionId")
    }
}
