//! DAO governance gate attached to mutating requests.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Timestamp};
use crate::error::ModelError;

/// Records that a mutating operation was approved by DAO governance: the
/// consensus topic the vote was published on and the consensus instant of
/// the approving message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Governance topic, always in shard 0, realm 0.
    #[schema(example = "0.0.12345")]
    pub topic_id: EntityId,
    /// Consensus timestamp of the approving topic message.
    #[schema(example = "1234567890.123456789")]
    pub consensus_timestamp: Timestamp,
}

impl Config {
    /// Validates both fields, then builds the gate. The topic must be a
    /// `0.0.{num}` ID; the timestamp must carry nine nanosecond digits.
    pub fn new(topic_id: &str, consensus_timestamp: &str) -> Result<Self, ModelError> {
        let topic_id: EntityId = topic_id
            .parse()
            .map_err(|_| ModelError::InvalidGovernanceTopicId)?;
        if !topic_id.is_default_realm() {
            return Err(ModelError::InvalidGovernanceTopicId);
        }
        let consensus_timestamp = consensus_timestamp
            .parse()
            .map_err(|_| ModelError::InvalidGovernanceConsensusTimestamp)?;
        Ok(Self {
            topic_id,
            consensus_timestamp,
        })
    }
}

// Deserialization funnels through `new` so the shard/realm rule also holds
// for payloads arriving over the wire.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            topic_id: String,
            consensus_timestamp: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        Config::new(&raw.topic_id, &raw.consensus_timestamp).map_err(serde::de::Error::custom)
    }
}
