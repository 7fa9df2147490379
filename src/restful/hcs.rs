//! Mirror Node consensus topic shapes (`/api/v1/topics`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Key, Timestamp};
use crate::ledger::hcs::ChunkInfo;
use crate::restful::links::Page;

/// Topic information as returned by `/api/v1/topics/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicInfo {
    pub topic_id: EntityId,
    pub admin_key: Option<Key>,
    pub submit_key: Option<Key>,
    pub auto_renew_account: Option<EntityId>,
    pub auto_renew_period: Option<i64>,
    pub created_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub deleted: bool,
    pub memo: Option<String>,
}

/// One message on a topic (`/api/v1/topics/{id}/messages`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TopicMessage {
    pub consensus_timestamp: Timestamp,
    pub topic_id: EntityId,
    /// Base64-encoded message content.
    #[schema(example = "aGVsbG8gaGFzaGdyYXBo")]
    pub message: String,
    /// Base64-encoded running hash of the topic after this message.
    pub running_hash: String,
    pub running_hash_version: u32,
    /// Position in the topic's total order, starting at 1.
    #[schema(example = 1)]
    pub sequence_number: u64,
    /// Present when this message is one chunk of a larger payload.
    pub chunk_info: Option<ChunkInfo>,
    /// Account that paid for the submission.
    pub payer_account_id: Option<EntityId>,
}

pub type TopicMessagePage = Page<TopicMessage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_message_parses_mirror_json() {
        let json = r#"{
            "consensus_timestamp": "1700000005.000000123",
            "topic_id": "0.0.34567",
            "message": "aGVsbG8gaGFzaGdyYXBo",
            "running_hash": "kJzQ==",
            "running_hash_version": 3,
            "sequence_number": 8,
            "chunk_info": {"number": 1, "total": 2},
            "payer_account_id": "0.0.1234"
        }"#;
        let msg: TopicMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sequence_number, 8);
        assert_eq!(msg.chunk_info, Some(ChunkInfo { number: 1, total: 2 }));
        assert_eq!(msg.payer_account_id, Some(EntityId::new(0, 0, 1234)));
    }

    #[test]
    fn test_topic_message_ordering_by_consensus_timestamp() {
        let earlier: Timestamp = "1700000001.000000000".parse().unwrap();
        let later: Timestamp = "1700000001.000000001".parse().unwrap();
        assert!(earlier < later);
    }
}
