//! Parsing Mirror Node-shaped JSON documents through the restful models.

use hashgraph_models::base::{EntityId, Hbar};
use hashgraph_models::restful::accounts::InfoPage;
use hashgraph_models::restful::hcs::TopicMessagePage;
use hashgraph_models::restful::staking::RewardPage;
use hashgraph_models::restful::transactions::TransactionPage;

#[test]
fn accounts_listing_parses_and_pages() {
    let body = r#"{
        "items": [
            {
                "account": "0.0.1001",
                "balance": {
                    "timestamp": "1700000000.000000000",
                    "balance": 100000000,
                    "tokens": []
                },
                "key": null,
                "evm_address": null,
                "created_timestamp": null,
                "expiry_timestamp": null,
                "auto_renew_period": null,
                "deleted": false,
                "memo": null,
                "max_automatic_token_associations": null,
                "ethereum_nonce": null,
                "staked_account_id": null,
                "staked_node_id": null,
                "decline_reward": false,
                "pending_reward": null
            }
        ],
        "links": {"next": "https://mirror.test/api/v1/accounts?account.id=gt:0.0.1001"}
    }"#;

    let page: InfoPage = serde_json::from_str(body).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].account, EntityId::new(0, 0, 1001));
    assert!(page.links.next.as_deref().unwrap().starts_with("https://"));
}

#[test]
fn topic_messages_keep_consensus_order() {
    let body = r#"{
        "items": [
            {
                "consensus_timestamp": "1700000001.000000000",
                "topic_id": "0.0.34567",
                "message": "Zmlyc3Q=",
                "running_hash": "aGFzaDE=",
                "running_hash_version": 3,
                "sequence_number": 1,
                "chunk_info": null,
                "payer_account_id": "0.0.1234"
            },
            {
                "consensus_timestamp": "1700000002.000000000",
                "topic_id": "0.0.34567",
                "message": "c2Vjb25k",
                "running_hash": "aGFzaDI=",
                "running_hash_version": 3,
                "sequence_number": 2,
                "chunk_info": null,
                "payer_account_id": "0.0.1234"
            }
        ],
        "links": {"next": null}
    }"#;

    let page: TopicMessagePage = serde_json::from_str(body).unwrap();
    assert_eq!(page.items.len(), 2);
    assert!(page.items[0].consensus_timestamp < page.items[1].consensus_timestamp);
    assert_eq!(page.items[1].sequence_number, 2);
    assert!(page.links.next.is_none());
}

#[test]
fn staking_rewards_sum_in_tinybars() {
    let body = r#"{
        "items": [
            {"account_id": "0.0.1001", "amount": 100, "timestamp": "1700000000.000000000"},
            {"account_id": "0.0.1001", "amount": 250, "timestamp": "1700086400.000000000"}
        ],
        "links": {"next": null}
    }"#;

    let page: RewardPage = serde_json::from_str(body).unwrap();
    let total = page
        .items
        .iter()
        .fold(Hbar::ZERO, |acc, r| acc.checked_add(r.amount).unwrap());
    assert_eq!(total, Hbar::from_tinybars(350));
}

#[test]
fn malformed_entity_id_in_response_fails_loudly() {
    let body = r#"{
        "items": [
            {"account_id": "not-an-id", "amount": 100, "timestamp": "1700000000.000000000"}
        ],
        "links": {"next": null}
    }"#;
    assert!(serde_json::from_str::<RewardPage>(body).is_err());
}

#[test]
fn transaction_listing_with_token_transfers() {
    let body = r#"{
        "items": [
            {
                "transaction_id": "0.0.1234-1700000000-000000001",
                "consensus_timestamp": "1700000001.000000000",
                "name": "CRYPTOTRANSFER",
                "result": "SUCCESS",
                "charged_tx_fee": 72530,
                "memo_base64": null,
                "transaction_hash": null,
                "node": "0.0.3",
                "nonce": 0,
                "scheduled": false,
                "parent_consensus_timestamp": null,
                "entity_id": null,
                "transfers": [],
                "token_transfers": [
                    {"token_id": "0.0.300", "account": "0.0.1234", "amount": -5},
                    {"token_id": "0.0.300", "account": "0.0.5005", "amount": 5}
                ],
                "nft_transfers": [],
                "staking_reward_transfers": []
            }
        ],
        "links": {"next": null}
    }"#;

    let page: TransactionPage = serde_json::from_str(body).unwrap();
    let tx = &page.items[0];
    assert!(tx.is_successful());
    assert_eq!(tx.token_transfers.len(), 2);
    let net: i64 = tx.token_transfers.iter().map(|t| t.amount).sum();
    assert_eq!(net, 0, "token transfer list balances to zero");
}
