//! Hbar amounts, held as signed tinybars.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::openapi::schema::{SchemaFormat, KnownFormat, Type};
use utoipa::openapi::{ObjectBuilder, RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

/// Tinybars per whole hbar.
pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

/// An hbar amount in tinybars. Signed, because transfer lists and fee
/// adjustments carry debits as negative amounts.
///
/// Serialized as a plain integer, matching Mirror Node balance fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hbar(i64);

impl Hbar {
    pub const ZERO: Hbar = Hbar(0);

    #[must_use]
    pub const fn from_tinybars(tinybars: i64) -> Self {
        Self(tinybars)
    }

    /// Whole-hbar constructor; `None` when the amount overflows tinybars.
    #[must_use]
    pub const fn from_hbars(hbars: i64) -> Option<Self> {
        match hbars.checked_mul(TINYBARS_PER_HBAR) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    #[must_use]
    pub const fn tinybars(&self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let t = self.0.unsigned_abs();
        let per = TINYBARS_PER_HBAR as u64;
        write!(f, "{}{}.{:08} \u{210f}", sign, t / per, t % per)
    }
}

impl PartialSchema for Hbar {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::Integer)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
            .description(Some("Amount in tinybars (1 hbar = 100,000,000 tinybars)"))
            .examples([serde_json::json!(100_000_000)])
            .into()
    }
}

impl ToSchema for Hbar {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Hbar")
    }
}
