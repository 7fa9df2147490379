//! File service request models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::base::{EntityId, Key};
use crate::error::ModelError;
use crate::ledger::{dao, validate_memo_bytes};

/// Upper bound on file contents accepted in one request, in bytes.
pub const MAX_FILE_BYTES: usize = 1024 * 1024;

/// Request to create a file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// Base64-encoded file contents.
    pub contents: String,
    /// Keys that may update or append to the file.
    #[serde(default)]
    pub keys: Vec<Key>,
    /// When the file expires, ISO-8601.
    pub expiration_time: Option<DateTime<Utc>>,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    pub dao: Option<dao::Config>,
}

impl CreateFile {
    pub fn check(&self) -> Result<(), ModelError> {
        check_contents(&self.contents)
    }
}

/// Request to append contents to an existing file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendFile {
    #[schema(example = "0.0.111")]
    pub file_id: EntityId,
    /// Base64-encoded contents to append.
    pub contents: String,
    pub dao: Option<dao::Config>,
}

impl AppendFile {
    pub fn check(&self) -> Result<(), ModelError> {
        check_contents(&self.contents)
    }
}

/// Request to replace a file's contents and/or keys.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFile {
    #[schema(example = "0.0.111")]
    pub file_id: EntityId,
    /// Replacement contents; keeps the old contents when absent.
    pub contents: Option<String>,
    pub keys: Option<Vec<Key>>,
    /// New expiry, ISO-8601. May only extend the current one.
    pub expiration_time: Option<DateTime<Utc>>,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    pub dao: Option<dao::Config>,
}

impl UpdateFile {
    pub fn check(&self) -> Result<(), ModelError> {
        match &self.contents {
            Some(contents) => check_contents(contents),
            None => Ok(()),
        }
    }
}

/// Request to delete a file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFile {
    #[schema(example = "0.0.111")]
    pub file_id: EntityId,
    pub dao: Option<dao::Config>,
}

fn check_contents(contents: &str) -> Result<(), ModelError> {
    if contents.is_empty() {
        return Err(ModelError::InvalidRequest(
            "file contents must not be empty".to_string(),
        ));
    }
    if contents.len() > MAX_FILE_BYTES {
        return Err(ModelError::InvalidRequest(format!(
            "file contents exceed {MAX_FILE_BYTES} bytes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_file_contents_bounds() {
        let mut create = CreateFile {
            contents: "aGVsbG8=".to_string(),
            keys: vec![],
            expiration_time: None,
            memo: None,
            dao: None,
        };
        assert!(create.check().is_ok());

        create.contents = String::new();
        assert!(create.check().is_err());

        create.contents = "x".repeat(MAX_FILE_BYTES + 1);
        assert!(create.check().is_err());
    }

    #[test]
    fn test_update_file_without_contents_is_valid() {
        let update = UpdateFile {
            file_id: EntityId::new(0, 0, 111),
            contents: None,
            keys: None,
            expiration_time: Some(Utc::now()),
            memo: Some("rotate keys".to_string()),
            dao: None,
        };
        assert!(update.check().is_ok());
    }
}
