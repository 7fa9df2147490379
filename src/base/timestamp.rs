//! Consensus timestamps (`seconds.nanoseconds`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::openapi::schema::Type;
use utoipa::openapi::{ObjectBuilder, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::error::ModelError;

/// A consensus timestamp as the network renders it: Unix seconds, a dot,
/// then exactly nine nanosecond digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: u64,
    /// Sub-second component, always below 1_000_000_000.
    pub nanos: u32,
}

pub const NANOS_PER_SECOND: u32 = 1_000_000_000;

impl Timestamp {
    pub fn new(seconds: u64, nanos: u32) -> Result<Self, ModelError> {
        if nanos >= NANOS_PER_SECOND {
            return Err(ModelError::InvalidTimestamp(format!(
                "{seconds}.{nanos}"
            )));
        }
        Ok(Self { seconds, nanos })
    }

    /// Calendar form of this instant; `None` past chrono's supported
    /// range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.seconds).ok()?, self.nanos)
    }

    /// Back from a calendar instant; `None` for pre-epoch datetimes, which
    /// the network never produces.
    pub fn from_datetime(dt: DateTime<Utc>) -> Option<Self> {
        let seconds = u64::try_from(dt.timestamp()).ok()?;
        // Leap-second representation can push nanos to 2e9; fold it back.
        let nanos = dt.timestamp_subsec_nanos() % NANOS_PER_SECOND;
        Some(Self { seconds, nanos })
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTimestamp(s.to_string());
        let (secs, nanos) = s.split_once('.').ok_or_else(invalid)?;
        if secs.is_empty()
            || nanos.len() != 9
            || !secs.bytes().all(|b| b.is_ascii_digit())
            || !nanos.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let seconds = secs.parse().map_err(|_| invalid())?;
        let nanos = nanos.parse().map_err(|_| invalid())?;
        Ok(Self { seconds, nanos })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialSchema for Timestamp {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .pattern(Some(r"^\d+\.\d{9}$"))
            .examples(["1234567890.123456789"])
            .into()
    }
}

impl ToSchema for Timestamp {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Timestamp")
    }
}
