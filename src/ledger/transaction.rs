//! Transaction receipts and records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::base::{EntityId, Hbar, Timestamp, TransactionId};
use crate::ledger::dao;

/// Final status a transaction reached at consensus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Reached consensus and applied.
    Success,
    /// Reached consensus but failed precheck-style validation.
    FailInvalid,
    DuplicateTransaction,
    InsufficientPayerBalance,
    /// Status not yet known (receipt queried before consensus).
    #[default]
    Unknown,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::FailInvalid => "FAIL_INVALID",
            Self::DuplicateTransaction => "DUPLICATE_TRANSACTION",
            Self::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(Self::Success),
            "FAIL_INVALID" => Ok(Self::FailInvalid),
            "DUPLICATE_TRANSACTION" => Ok(Self::DuplicateTransaction),
            "INSUFFICIENT_PAYER_BALANCE" => Ok(Self::InsufficientPayerBalance),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The receipt of a transaction: its status plus whichever entity the
/// transaction created. Only the field matching the transaction kind is
/// populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub status: TransactionStatus,
    pub account_id: Option<EntityId>,
    pub token_id: Option<EntityId>,
    pub topic_id: Option<EntityId>,
    pub file_id: Option<EntityId>,
    /// Serials minted by an NFT mint.
    #[serde(default)]
    pub serials: Vec<u64>,
    /// Sequence number assigned to a submitted topic message.
    pub topic_sequence_number: Option<u64>,
    /// Token supply after a mint or burn.
    pub total_supply: Option<u64>,
}

/// One hbar adjustment within a transfer list. Debits are negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HbarTransfer {
    pub account_id: EntityId,
    pub amount: Hbar,
}

/// One fungible-token adjustment within a transfer list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RecordTokenTransfer)]
pub struct TokenTransfer {
    pub token_id: EntityId,
    pub account_id: EntityId,
    pub amount: i64,
}

/// One NFT serial changing hands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RecordNftTransfer)]
pub struct NftTransfer {
    pub token_id: EntityId,
    pub serial_number: u64,
    pub sender_account_id: EntityId,
    pub receiver_account_id: EntityId,
}

/// An NFT exchange as the SDK reports it, before the token ID is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftExchange {
    pub serial_number: u64,
    pub sender_account_id: EntityId,
    pub receiver_account_id: EntityId,
}

/// The full record of a transaction.
///
/// Records form a tree: a parent transaction carries the records of its
/// child transactions, and any duplicates the network saw of the same
/// transaction ID.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub transaction_id: TransactionId,
    pub consensus_timestamp: Timestamp,
    /// Hex-encoded transaction hash.
    pub transaction_hash: String,
    pub memo: Option<String>,
    /// Total fee charged, in tinybars.
    pub fee: Hbar,
    pub receipt: Receipt,
    #[serde(default)]
    pub transfers: Vec<HbarTransfer>,
    #[serde(default)]
    pub token_transfers: Vec<TokenTransfer>,
    #[serde(default)]
    pub nft_transfers: Vec<NftTransfer>,
    /// Records of child transactions spawned by this one.
    #[serde(default)]
    #[schema(no_recursion)]
    pub children: Vec<Record>,
    /// Records of duplicate submissions of the same transaction ID.
    #[serde(default)]
    #[schema(no_recursion)]
    pub duplicates: Vec<Record>,
    pub dao: Option<dao::Config>,
}

impl Record {
    /// Builds a record from SDK-shaped parts, flattening the nested
    /// token-to-account and token-to-exchange maps into this crate's list
    /// shapes. Map iteration order makes the output deterministic.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        transaction_id: TransactionId,
        consensus_timestamp: Timestamp,
        transaction_hash: String,
        memo: Option<String>,
        fee: Hbar,
        receipt: Receipt,
        transfers: BTreeMap<EntityId, Hbar>,
        token_transfer_map: BTreeMap<EntityId, BTreeMap<EntityId, i64>>,
        nft_transfer_map: BTreeMap<EntityId, Vec<NftExchange>>,
    ) -> Self {
        let transfers = transfers
            .into_iter()
            .map(|(account_id, amount)| HbarTransfer { account_id, amount })
            .collect();

        let token_transfers = token_transfer_map
            .into_iter()
            .flat_map(|(token_id, adjustments)| {
                adjustments
                    .into_iter()
                    .map(move |(account_id, amount)| TokenTransfer {
                        token_id,
                        account_id,
                        amount,
                    })
            })
            .collect();

        let nft_transfers = nft_transfer_map
            .into_iter()
            .flat_map(|(token_id, exchanges)| {
                exchanges.into_iter().map(move |exchange| NftTransfer {
                    token_id,
                    serial_number: exchange.serial_number,
                    sender_account_id: exchange.sender_account_id,
                    receiver_account_id: exchange.receiver_account_id,
                })
            })
            .collect();

        Self {
            transaction_id,
            consensus_timestamp,
            transaction_hash,
            memo,
            fee,
            receipt,
            transfers,
            token_transfers,
            nft_transfers,
            children: Vec::new(),
            duplicates: Vec::new(),
            dao: None,
        }
    }

    /// Total number of records in this tree, counting children and
    /// duplicates recursively.
    pub fn tree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .chain(self.duplicates.iter())
            .map(Record::tree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transaction_status_display_and_parsing() {
        let statuses = vec![
            (TransactionStatus::Success, "SUCCESS"),
            (TransactionStatus::FailInvalid, "FAIL_INVALID"),
            (TransactionStatus::DuplicateTransaction, "DUPLICATE_TRANSACTION"),
            (
                TransactionStatus::InsufficientPayerBalance,
                "INSUFFICIENT_PAYER_BALANCE",
            ),
            (TransactionStatus::Unknown, "UNKNOWN"),
        ];

        for (status, string) in statuses {
            assert_eq!(status.as_str(), string);
            assert_eq!(status.to_string(), string);
            assert_eq!(TransactionStatus::from_str(string).unwrap(), status);
        }

        assert!(TransactionStatus::from_str("invalid").is_err());
    }

    fn sample_record() -> Record {
        let token_a = EntityId::new(0, 0, 300);
        let token_b = EntityId::new(0, 0, 301);
        let alice = EntityId::new(0, 0, 10);
        let bob = EntityId::new(0, 0, 11);

        let mut hbar_map = BTreeMap::new();
        hbar_map.insert(alice, Hbar::from_tinybars(-100));
        hbar_map.insert(bob, Hbar::from_tinybars(100));

        let mut token_map = BTreeMap::new();
        let mut a_adjustments = BTreeMap::new();
        a_adjustments.insert(alice, -5i64);
        a_adjustments.insert(bob, 5i64);
        token_map.insert(token_a, a_adjustments);

        let mut nft_map = BTreeMap::new();
        nft_map.insert(
            token_b,
            vec![NftExchange {
                serial_number: 7,
                sender_account_id: alice,
                receiver_account_id: bob,
            }],
        );

        Record::from_parts(
            TransactionId::from_str("0.0.10@1234567890.000000001").unwrap(),
            Timestamp::from_str("1234567891.000000000").unwrap(),
            "abcd1234".to_string(),
            Some("payment".to_string()),
            Hbar::from_tinybars(50_000),
            Receipt {
                status: TransactionStatus::Success,
                ..Receipt::default()
            },
            hbar_map,
            token_map,
            nft_map,
        )
    }

    #[test]
    fn test_record_from_parts_flattens_maps() {
        let record = sample_record();

        assert_eq!(record.transfers.len(), 2);
        assert_eq!(record.token_transfers.len(), 2);
        assert_eq!(record.nft_transfers.len(), 1);

        let nft = &record.nft_transfers[0];
        assert_eq!(nft.token_id, EntityId::new(0, 0, 301));
        assert_eq!(nft.serial_number, 7);

        // BTreeMap input keeps the output deterministic.
        assert_eq!(record.token_transfers[0].account_id, EntityId::new(0, 0, 10));
        assert_eq!(record.token_transfers[0].amount, -5);
    }

    #[test]
    fn test_record_tree_size() {
        let mut parent = sample_record();
        parent.children.push(sample_record());
        let mut dup = sample_record();
        dup.children.push(sample_record());
        parent.duplicates.push(dup);

        assert_eq!(parent.tree_size(), 4);
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.transaction_id, record.transaction_id);
        assert_eq!(back.transfers, record.transfers);
        assert_eq!(back.token_transfers, record.token_transfers);
        assert_eq!(back.receipt.status, TransactionStatus::Success);
    }
}
