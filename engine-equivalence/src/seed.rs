//! Known good inputs every fuzz target starts from.

use anyhow::{Context, Result};
use engine_format::{
    AccessListItem, Address, Data, ExecutionBlock, ExecutionHeader, Hash, Quantity, Transaction,
    TransactionType, UInt,
};
use engine_reference::{
    Bloom, Bytes, ForkChoiceResponse, Header, PayloadStatusV1, B256, B64, U256, U64,
};
use serde_json::Value;

pub const FORK_CHOICE_TARGET: &str = "fork_choice_response";
pub const HEADER_TARGET: &str = "execution_header";
pub const BLOCK_TARGET: &str = "execution_block";

pub fn fork_choice_seed() -> Result<Vec<u8>> {
    let mut latest_valid_hash = [0u8; 32];
    latest_valid_hash[..2].copy_from_slice(&[0xff, 0x01]);

    let seed = ForkChoiceResponse {
        payload_status: PayloadStatusV1 {
            status: "INVALID_TERMINAL_BLOCK".into(),
            latest_valid_hash: Some(B256::from(latest_valid_hash)),
            validation_error: Some("asjajshjahsaj".into()),
        },
        payload_id: Some(B64::from([0x01, 0xff, 0xaa, 0x00, 0xee, 0xfe, 0x00, 0x00])),
    };

    serde_json::to_vec(&seed).context("serialize fork choice seed")
}

pub fn header_seed() -> Result<Vec<u8>> {
    let seed = Header {
        parent_hash: B256::from([0x11; 32]),
        ommers_hash: B256::from([0x1d; 32]),
        beneficiary: engine_reference::Address::from([0x33; 20]),
        state_root: B256::from([0x44; 32]),
        transactions_root: B256::from([0x55; 32]),
        receipts_root: B256::from([0x66; 32]),
        logs_bloom: Bloom::from([0x01; 256]),
        difficulty: U256::from(131_072u64),
        number: U64::from(1_000_000u64),
        gas_limit: U64::from(30_000_000u64),
        gas_used: U64::from(21_000u64),
        timestamp: U64::from(1_700_000_000u64),
        extra_data: Bytes::from(b"seed".to_vec()),
        mix_hash: B256::from([0x77; 32]),
        nonce: B64::from([0x88; 8]),
        base_fee_per_gas: Some(U256::from(7u64)),
        withdrawals_root: Some(B256::from([0x99; 32])),
        blob_gas_used: Some(U64::from(0x20000u64)),
        excess_blob_gas: Some(U64::from(0u64)),
        parent_beacon_block_root: Some(B256::from([0xaa; 32])),
    };

    serde_json::to_vec(&seed).context("serialize header seed")
}

/// Block with one transaction of every supported type, each carrying its
/// recomputed `hash` key.
pub fn execution_block_seed() -> Result<Vec<u8>> {
    let legacy = Transaction {
        kind: TransactionType::LEGACY,
        nonce: UInt::from(9),
        gas_price: Some(Quantity::from(20_000_000_000u64)),
        gas: UInt::from(21_000),
        to: Some(Address::from([0x35; 20])),
        value: Quantity::from(1_000_000_000_000_000_000u64),
        input: Data::default(),
        v: Quantity::from(37u64),
        r: Quantity::from([0x28; 32]),
        s: Quantity::from([0x67; 32]),
        ..Default::default()
    };
    let access_list = Transaction {
        kind: TransactionType::ACCESS_LIST,
        chain_id: Some(Quantity::from(1u64)),
        nonce: UInt::from(1),
        gas_price: Some(Quantity::from(25_000_000_000u64)),
        gas: UInt::from(30_000),
        to: Some(Address::from([0x36; 20])),
        value: Quantity::from(1u64),
        input: Data::default(),
        access_list: Some(Vec::new()),
        v: Quantity::default(),
        r: Quantity::from([0x5e; 32]),
        s: Quantity::from([0x6f; 32]),
        ..Default::default()
    };
    let dynamic_fee = Transaction {
        kind: TransactionType::DYNAMIC_FEE,
        chain_id: Some(Quantity::from(1u64)),
        nonce: UInt::from(0),
        max_priority_fee_per_gas: Some(Quantity::from(1_000_000_000u64)),
        max_fee_per_gas: Some(Quantity::from(30_000_000_000u64)),
        gas: UInt::from(50_000),
        to: None,
        value: Quantity::default(),
        input: Data::from(vec![0x60, 0x00]),
        access_list: Some(vec![AccessListItem {
            address: Address::from([0x42; 20]),
            storage_keys: vec![Hash::from([0x01; 32])],
        }]),
        v: Quantity::from(1u64),
        r: Quantity::from([0x3c; 32]),
        s: Quantity::from([0x4d; 32]),
        ..Default::default()
    };

    let block = ExecutionBlock {
        header: ExecutionHeader {
            number: UInt::from(17_000_000),
            gas_limit: UInt::from(30_000_000),
            gas_used: UInt::from(101_000),
            timestamp: UInt::from(1_681_338_455),
            base_fee_per_gas: Some(Quantity::from(7u64)),
            ..Default::default()
        },
        hash: Hash::from([0x9c; 32]),
        transactions: vec![legacy, access_list, dynamic_fee],
        total_difficulty: "0xc70d815d562d3cfa955".into(),
    };

    let mut transactions = Vec::with_capacity(block.transactions.len());
    for tx in &block.transactions {
        let mut json = serde_json::to_value(tx).context("serialize seed transaction")?;
        let hash = tx.hash().context("hash seed transaction")?;
        if let Value::Object(map) = &mut json {
            map.insert("hash".into(), Value::String(hash.to_string()));
        }
        transactions.push(json);
    }

    let mut json = serde_json::to_value(&block).context("serialize block seed")?;
    if let Value::Object(map) = &mut json {
        map.insert("transactions".into(), Value::Array(transactions));
    }

    serde_json::to_vec(&json).context("serialize block seed")
}

/// Every seed, keyed by the fuzz target it belongs to.
pub fn seeds() -> Result<Vec<(&'static str, Vec<u8>)>> {
    Ok(vec![
        (FORK_CHOICE_TARGET, fork_choice_seed()?),
        (HEADER_TARGET, header_seed()?),
        (BLOCK_TARGET, execution_block_seed()?),
    ])
}
