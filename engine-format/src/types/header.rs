use serde::{Deserialize, Serialize};

use super::{Address, BlockNumber, BloomFilter, Data, Hash, Nonce, Quantity, UInt};

/// Execution layer block header as returned by `eth_getBlockByHash`.
///
/// Fields after `nonce` were introduced by later forks and may be absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct ExecutionHeader {
    pub parent_hash: Hash,
    pub sha3_uncles: Hash,
    pub miner: Address,
    pub state_root: Hash,
    pub transactions_root: Hash,
    pub receipts_root: Hash,
    pub logs_bloom: BloomFilter,
    pub difficulty: Quantity,
    pub number: BlockNumber,
    pub gas_limit: UInt,
    pub gas_used: UInt,
    pub timestamp: UInt,
    pub extra_data: Data,
    #[serde(default)]
    pub mix_hash: Hash,
    #[serde(default)]
    pub nonce: Nonce,
    #[serde(default)]
    pub base_fee_per_gas: Option<Quantity>,
    #[serde(default)]
    pub withdrawals_root: Option<Hash>,
    #[serde(default)]
    pub blob_gas_used: Option<UInt>,
    #[serde(default)]
    pub excess_blob_gas: Option<UInt>,
    #[serde(default)]
    pub parent_beacon_block_root: Option<Hash>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_header_json() -> serde_json::Value {
        let zero_hash = format!("0x{}", "00".repeat(32));
        serde_json::json!({
            "parentHash": zero_hash,
            "sha3Uncles": zero_hash,
            "miner": format!("0x{}", "00".repeat(20)),
            "stateRoot": zero_hash,
            "transactionsRoot": zero_hash,
            "receiptsRoot": zero_hash,
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "difficulty": "0x0",
            "number": "0x1",
            "gasLimit": "0x1c9c380",
            "gasUsed": "0x0",
            "timestamp": "0x65f1b057",
            "extraData": "0x",
        })
    }

    #[test]
    fn test_pre_london_header() {
        let header: ExecutionHeader = serde_json::from_value(minimal_header_json()).unwrap();

        assert_eq!(header.number, UInt::from(1));
        assert_eq!(header.gas_limit, UInt::from(30_000_000));
        assert!(header.mix_hash.is_zero());
        assert_eq!(header.base_fee_per_gas, None);
        assert_eq!(header.parent_beacon_block_root, None);
    }

    #[test]
    fn test_missing_required_field() {
        let mut json = minimal_header_json();
        json.as_object_mut().unwrap().remove("stateRoot");

        let err = serde_json::from_value::<ExecutionHeader>(json).unwrap_err();
        assert_eq!(err.to_string(), "missing field `stateRoot`");
    }

    #[test]
    fn test_null_optional_fields() {
        let mut json = minimal_header_json();
        let obj = json.as_object_mut().unwrap();
        obj.insert("baseFeePerGas".into(), serde_json::Value::Null);
        obj.insert("blobGasUsed".into(), serde_json::Value::Null);

        let header: ExecutionHeader = serde_json::from_value(json).unwrap();
        assert_eq!(header.base_fee_per_gas, None);
        assert_eq!(header.blob_gas_used, None);
    }

    #[test]
    fn test_short_bloom_is_rejected() {
        let mut json = minimal_header_json();
        json["logsBloom"] = serde_json::Value::String("0x00".into());

        assert!(serde_json::from_value::<ExecutionHeader>(json).is_err());
    }
}
