//! Error types for model construction and parsing.

use thiserror::Error;

/// Failure raised when a structured value cannot be parsed or a model
/// constructor rejects its input.
///
/// Every variant carries a human-readable message; callers that need to
/// collect several field failures at once should use the `validator`-derived
/// `validate()` on the request DTOs instead, which returns the full
/// `ValidationErrors` set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Entity IDs must be three dot-separated unsigned integers.
    #[error("Invalid entity ID: expected \"shard.realm.num\", got \"{0}\"")]
    InvalidEntityId(String),

    /// Timestamps on the wire carry exactly nine nanosecond digits.
    #[error("Invalid timestamp: expected \"seconds.nanoseconds\" with nine nanosecond digits, got \"{0}\"")]
    InvalidTimestamp(String),

    #[error("Invalid transaction ID: expected \"accountId@seconds.nanoseconds\", got \"{0}\"")]
    InvalidTransactionId(String),

    #[error("Invalid DID: expected \"did:hedera:{{network}}:{{id}}\", got \"{0}\"")]
    InvalidDid(String),

    #[error("Invalid multibase public key: expected a z-prefixed base58btc string, got \"{0}\"")]
    InvalidMultibaseKey(String),

    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Governance topics live in shard 0, realm 0.
    #[error("Topic ID must be in format \"0.0.{{number}}\" (e.g. 0.0.12345)")]
    InvalidGovernanceTopicId,

    #[error("Consensus timestamp must be in format \"seconds.nanoseconds\" (e.g. 1234567890.123456789)")]
    InvalidGovernanceConsensusTimestamp,

    #[error("Public Key Multibase is required for DID document registration")]
    MissingRegistrationKey,

    #[error("Invalid issuerDID")]
    InvalidIssuerDid,

    /// Mirror Node pagination links are absolute HTTP(S) URLs.
    #[error("Pagination link must start with http:// or https://, got \"{0}\"")]
    InvalidPaginationLink(String),

    /// Cross-field rule violated by an otherwise well-formed request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
