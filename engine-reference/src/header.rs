use alloy_primitives::{Address, Bloom, Bytes, B256, B64, U256, U64};
use serde::{Deserialize, Serialize};

use crate::hexutil;

/// Execution block header.
///
/// Inputs may carry keys that are not header fields, such as `hash` or
/// `transactions`; they are ignored. Values must be strict engine api hex.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(with = "hexutil::fixed")]
    pub parent_hash: B256,
    #[serde(rename = "sha3Uncles", with = "hexutil::fixed")]
    pub ommers_hash: B256,
    #[serde(rename = "miner", with = "hexutil::fixed")]
    pub beneficiary: Address,
    #[serde(with = "hexutil::fixed")]
    pub state_root: B256,
    #[serde(with = "hexutil::fixed")]
    pub transactions_root: B256,
    #[serde(with = "hexutil::fixed")]
    pub receipts_root: B256,
    #[serde(with = "hexutil::fixed")]
    pub logs_bloom: Bloom,
    #[serde(with = "hexutil::quantity")]
    pub difficulty: U256,
    #[serde(with = "hexutil::quantity")]
    pub number: U64,
    #[serde(with = "hexutil::quantity")]
    pub gas_limit: U64,
    #[serde(with = "hexutil::quantity")]
    pub gas_used: U64,
    #[serde(with = "hexutil::quantity")]
    pub timestamp: U64,
    #[serde(with = "hexutil::data")]
    pub extra_data: Bytes,
    #[serde(default, with = "hexutil::fixed")]
    pub mix_hash: B256,
    #[serde(default, with = "hexutil::fixed")]
    pub nonce: B64,
    #[serde(default, with = "hexutil::opt_quantity")]
    pub base_fee_per_gas: Option<U256>,
    #[serde(default, with = "hexutil::opt_fixed")]
    pub withdrawals_root: Option<B256>,
    #[serde(default, with = "hexutil::opt_quantity")]
    pub blob_gas_used: Option<U64>,
    #[serde(default, with = "hexutil::opt_quantity")]
    pub excess_blob_gas: Option<U64>,
    #[serde(default, with = "hexutil::opt_fixed")]
    pub parent_beacon_block_root: Option<B256>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn header_json() -> serde_json::Value {
        serde_json::json!({
            "parentHash": format!("0x{}", "11".repeat(32)),
            "sha3Uncles": format!("0x{}", "22".repeat(32)),
            "miner": format!("0x{}", "33".repeat(20)),
            "stateRoot": format!("0x{}", "44".repeat(32)),
            "transactionsRoot": format!("0x{}", "55".repeat(32)),
            "receiptsRoot": format!("0x{}", "66".repeat(32)),
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "difficulty": "0x0",
            "number": "0x10",
            "gasLimit": "0x1c9c380",
            "gasUsed": "0x5208",
            "timestamp": "0x65f1b057",
            "extraData": "0xbeef",
            "baseFeePerGas": "0x7",
            "hash": format!("0x{}", "77".repeat(32)),
        })
    }

    #[test]
    fn test_deserialize() {
        let header: Header = serde_json::from_value(header_json()).unwrap();

        assert_eq!(header.parent_hash, B256::from([0x11; 32]));
        assert_eq!(header.beneficiary, Address::from([0x33; 20]));
        assert_eq!(header.number, U64::from(16));
        assert_eq!(header.gas_used, U64::from(21_000));
        assert_eq!(header.extra_data, Bytes::from(hex!("beef").to_vec()));
        assert_eq!(header.base_fee_per_gas, Some(U256::from(7)));
        assert_eq!(header.mix_hash, B256::ZERO);
        assert_eq!(header.withdrawals_root, None);
    }

    #[test]
    fn test_round_trip() {
        let header: Header = serde_json::from_value(header_json()).unwrap();
        let json = serde_json::to_vec(&header).unwrap();

        assert_eq!(serde_json::from_slice::<Header>(&json).unwrap(), header);
    }

    #[test]
    fn test_missing_required_field() {
        let mut json = header_json();
        json.as_object_mut().unwrap().remove("gasLimit");

        assert!(serde_json::from_value::<Header>(json).is_err());
    }

    #[test]
    fn test_loose_values_are_rejected() {
        let cases = [
            ("number", serde_json::json!("16")),
            ("number", serde_json::json!(16)),
            ("number", serde_json::json!("0x010")),
            ("extraData", serde_json::json!("beef")),
            ("extraData", serde_json::json!("0xbee")),
            ("difficulty", serde_json::json!("0x")),
            ("parentHash", serde_json::json!("11".repeat(32))),
            ("logsBloom", serde_json::json!("0x00")),
            ("baseFeePerGas", serde_json::json!(7)),
        ];

        for (key, value) in cases {
            let mut json = header_json();
            json[key] = value.clone();
            assert!(
                serde_json::from_value::<Header>(json).is_err(),
                "{key}: {value}"
            );
        }
    }

    #[test]
    fn test_null_and_missing_optionals() {
        let mut json = header_json();
        json["baseFeePerGas"] = serde_json::Value::Null;
        json.as_object_mut().unwrap().remove("mixHash");

        let header: Header = serde_json::from_value(json).unwrap();
        assert_eq!(header.base_fee_per_gas, None);
        assert_eq!(header.mix_hash, B256::ZERO);
    }
}
