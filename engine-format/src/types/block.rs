use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::{ExecutionHeader, Hash, Transaction};

/// Block envelope: the header flattened into the same object as the block
/// hash, total difficulty and the full transaction list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionBlock {
    #[serde(flatten)]
    pub header: ExecutionHeader,
    #[serde(default)]
    pub hash: Hash,
    #[serde(default, deserialize_with = "signed_transactions")]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total_difficulty: String,
}

/// Fields of [`ExecutionBlock`] with their wire names.
///
/// The flattened header has no wire name of its own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumIter,
    strum_macros::EnumProperty,
    strum_macros::IntoStaticStr,
)]
pub enum ExecutionBlockField {
    Header,
    #[strum(props(wire = "hash"))]
    Hash,
    #[strum(props(wire = "transactions"))]
    Transactions,
    #[strum(props(wire = "totalDifficulty"))]
    TotalDifficulty,
}

// Every transaction in a decoded block must be hashable.
fn signed_transactions<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    let transactions = Vec::<Transaction>::deserialize(deserializer)?;

    for (i, tx) in transactions.iter().enumerate() {
        tx.canonical_encoding()
            .map_err(|e| D::Error::custom(format!("transaction {i}: {e}")))?;
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumProperty, IntoEnumIterator};

    #[test]
    fn test_wire_names_match_serialization() {
        let json = serde_json::to_value(ExecutionBlock::default()).unwrap();
        let obj = json.as_object().unwrap();

        for field in ExecutionBlockField::iter() {
            if let Some(wire) = field.get_str("wire") {
                assert!(obj.contains_key(wire), "{wire} is not serialized");
            }
        }
    }

    #[test]
    fn test_envelope_keys_are_declared() {
        let header = serde_json::to_value(ExecutionHeader::default()).unwrap();
        let block = serde_json::to_value(ExecutionBlock::default()).unwrap();

        let declared: Vec<&str> = ExecutionBlockField::iter()
            .filter_map(|f| f.get_str("wire"))
            .collect();

        for key in block.as_object().unwrap().keys() {
            assert!(
                header.get(key).is_some() || declared.contains(&key.as_str()),
                "{key} has no declared field"
            );
        }
    }

    #[test]
    fn test_header_only_block() {
        let header = serde_json::to_value(ExecutionHeader::default()).unwrap();
        let block: ExecutionBlock = serde_json::from_value(header).unwrap();

        assert!(block.transactions.is_empty());
        assert!(block.hash.is_zero());
        assert!(block.total_difficulty.is_empty());
    }

    #[test]
    fn test_unhashable_transaction_is_rejected() {
        let mut json = serde_json::to_value(ExecutionBlock::default()).unwrap();
        // legacy transaction without gasPrice
        json["transactions"] = serde_json::json!([{
            "type": "0x0",
            "nonce": "0x0",
            "gas": "0x5208",
            "to": null,
            "value": "0x0",
            "input": "0x",
            "v": "0x1b",
            "r": "0x1",
            "s": "0x1",
        }]);

        let err = serde_json::from_value::<ExecutionBlock>(json).unwrap_err();
        assert!(err.to_string().contains("missing field \"gasPrice\""));
    }
}
