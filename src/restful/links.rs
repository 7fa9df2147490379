//! Pagination links and the paged response wrapper.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::ModelError;

/// The single-link HATEOAS pagination object every Mirror Node list
/// response carries. `next` is `null` on the last page.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq, ToSchema)]
pub struct Links {
    /// Absolute or root-relative URL of the next page.
    #[schema(example = "https://mainnet.mirrornode.hedera.com/api/v1/accounts?limit=25&account.id=gt:0.0.123")]
    pub next: Option<String>,
}

impl Links {
    /// Validates that a present link is an HTTP(S) URL; absent stays
    /// absent.
    pub fn new(next: Option<String>) -> Result<Self, ModelError> {
        if let Some(url) = &next {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ModelError::InvalidPaginationLink(url.clone()));
            }
        }
        Ok(Self { next })
    }

    /// The terminal page: no further link.
    #[must_use]
    pub fn none() -> Self {
        Self { next: None }
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            next: Option<String>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Links::new(raw.next).map_err(serde::de::Error::custom)
    }
}

/// A page of a list endpoint: the typed items plus the pagination link.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Page<T: ToSchema> {
    pub items: Vec<T>,
    pub links: Links,
}

impl<T: ToSchema> Page<T> {
    pub fn new(items: Vec<T>, links: Links) -> Self {
        Self { items, links }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            links: Links::none(),
        }
    }

    /// Maps raw elements into typed items, failing on the first element the
    /// conversion rejects.
    pub fn try_from_items<R, E>(
        raw: impl IntoIterator<Item = R>,
        links: Links,
        convert: impl Fn(R) -> Result<T, E>,
    ) -> Result<Self, E> {
        let items = raw.into_iter().map(convert).collect::<Result<_, _>>()?;
        Ok(Self { items, links })
    }
}
