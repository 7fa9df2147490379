//! Consensus service request models: topics and message submission.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::base::{EntityId, Key};
use crate::ledger::{dao, validate_memo_bytes};

/// Upper bound on a single submitted message chunk, in bytes.
pub const MAX_MESSAGE_CHUNK_BYTES: usize = 1024;

/// Request to create a consensus topic.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopic {
    /// Key allowed to update or delete the topic. Without it the topic is
    /// immutable.
    pub admin_key: Option<Key>,
    /// Key required to submit messages. Without it the topic is public.
    pub submit_key: Option<Key>,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    /// Auto-renew period in seconds.
    #[validate(range(min = 1, message = "Auto-renew period must be positive"))]
    pub auto_renew_period: Option<i64>,
    /// Account charged for auto-renewal.
    pub auto_renew_account_id: Option<EntityId>,
    pub dao: Option<dao::Config>,
}

/// Request to update a topic. Requires the topic's admin key to sign.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopic {
    #[schema(example = "0.0.34567")]
    pub topic_id: EntityId,
    pub admin_key: Option<Key>,
    pub submit_key: Option<Key>,
    #[validate(custom(function = validate_memo_bytes))]
    pub memo: Option<String>,
    #[validate(range(min = 1, message = "Auto-renew period must be positive"))]
    pub auto_renew_period: Option<i64>,
    pub dao: Option<dao::Config>,
}

/// Request to delete a topic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTopic {
    #[schema(example = "0.0.34567")]
    pub topic_id: EntityId,
    pub dao: Option<dao::Config>,
}

/// Request to submit a message to a topic.
///
/// Messages longer than [`MAX_MESSAGE_CHUNK_BYTES`] must be split into
/// chunks; each chunk is its own submission carrying the shared
/// [`ChunkInfo`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessage {
    #[schema(example = "0.0.34567")]
    pub topic_id: EntityId,
    /// Message content for this chunk.
    #[validate(
        length(min = 1, message = "Message is required"),
        custom(function = validate_message_bytes)
    )]
    #[schema(example = "hello hashgraph")]
    pub message: String,
    /// Present when this submission is one chunk of a larger message.
    #[validate(nested, custom(function = validate_chunk_bounds))]
    pub chunk_info: Option<ChunkInfo>,
    pub dao: Option<dao::Config>,
}

/// Position of a chunk within a multi-chunk message.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChunkInfo {
    /// 1-based index of this chunk.
    #[validate(range(min = 1, message = "Chunk number is 1-based"))]
    #[schema(example = 1)]
    pub number: u32,
    /// Total number of chunks in the message.
    #[validate(range(min = 1, message = "Chunk total must be positive"))]
    #[schema(example = 3)]
    pub total: u32,
}

impl ChunkInfo {
    /// A chunk index past the total is malformed regardless of each field
    /// being individually in range.
    pub fn is_consistent(&self) -> bool {
        self.number <= self.total
    }
}

/// Chunk limits are on encoded size; validator's `length` counts chars.
fn validate_message_bytes(message: &str) -> Result<(), ValidationError> {
    if message.len() > MAX_MESSAGE_CHUNK_BYTES {
        let mut err = ValidationError::new("message_bytes");
        err.message = Some("Message must not exceed 1024 bytes per chunk".into());
        return Err(err);
    }
    Ok(())
}

fn validate_chunk_bounds(info: &ChunkInfo) -> Result<(), ValidationError> {
    if !info.is_consistent() {
        let mut err = ValidationError::new("chunk_bounds");
        err.message = Some("Chunk number must not exceed the chunk total".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submit(message: &str) -> SubmitMessage {
        SubmitMessage {
            topic_id: EntityId::new(0, 0, 34567),
            message: message.to_string(),
            chunk_info: None,
            dao: None,
        }
    }

    #[test]
    fn test_submit_message_length_bounds() {
        let mut msg = sample_submit("hello");
        assert!(msg.validate().is_ok());

        msg.message = String::new();
        assert!(msg.validate().is_err());

        msg.message = "x".repeat(MAX_MESSAGE_CHUNK_BYTES);
        assert!(msg.validate().is_ok());

        msg.message = "x".repeat(MAX_MESSAGE_CHUNK_BYTES + 1);
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_submit_message_limit_counts_bytes_not_chars() {
        // 1024 two-byte chars: within the char count, twice the byte limit.
        let msg = sample_submit(&"é".repeat(MAX_MESSAGE_CHUNK_BYTES));
        assert!(msg.validate().is_err());

        // Half as many chars fits exactly.
        let msg = sample_submit(&"é".repeat(MAX_MESSAGE_CHUNK_BYTES / 2));
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_submit_message_rejects_inconsistent_chunk() {
        let mut msg = sample_submit("hello");
        msg.chunk_info = Some(ChunkInfo { number: 2, total: 3 });
        assert!(msg.validate().is_ok());

        msg.chunk_info = Some(ChunkInfo { number: 4, total: 3 });
        assert!(msg.validate().is_err());

        msg.chunk_info = Some(ChunkInfo { number: 0, total: 3 });
        assert!(msg.validate().is_err());
    }

    #[test]
    fn test_chunk_info_consistency() {
        let ok = ChunkInfo { number: 2, total: 3 };
        assert!(ok.validate().is_ok());
        assert!(ok.is_consistent());

        let past_end = ChunkInfo { number: 4, total: 3 };
        assert!(!past_end.is_consistent());

        let zero = ChunkInfo { number: 0, total: 3 };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_create_topic_serde_shape() {
        let create: CreateTopic = serde_json::from_str(
            r#"{"memo":"governance topic","autoRenewPeriod":7776000}"#,
        )
        .unwrap();
        assert!(create.admin_key.is_none());
        assert_eq!(create.auto_renew_period, Some(7776000));
        assert!(create.validate().is_ok());
    }
}
