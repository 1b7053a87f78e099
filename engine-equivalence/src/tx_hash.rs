use serde_json::{Map, Value};

use crate::model::ContentHashed;

/// Result of comparing recomputed transaction hashes with the `hash` keys of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxHashCheck {
    /// No transactions, or every hash key matches.
    Consistent,
    /// Raw transaction list or one of its entries is not the expected shape.
    Malformed { index: usize },
    /// Entry has no `hash` key.
    Stripped { index: usize },
    Mismatch {
        index: usize,
        computed: String,
        claimed: String,
    },
}

impl TxHashCheck {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent)
    }
}

/// Walks the decoded transactions in order and stops at the first entry whose
/// raw `hash` key is missing or differs from the recomputed hash.
pub fn check_transaction_hashes<T: ContentHashed>(
    transactions: &[T],
    json_map: &Map<String, Value>,
) -> TxHashCheck {
    if transactions.is_empty() {
        return TxHashCheck::Consistent;
    }

    let Some(entries) = json_map.get("transactions").and_then(Value::as_array) else {
        return TxHashCheck::Malformed { index: 0 };
    };

    for (index, tx) in transactions.iter().enumerate() {
        let Some(entry) = entries.get(index).and_then(Value::as_object) else {
            return TxHashCheck::Malformed { index };
        };
        let Some(claimed) = entry.get("hash") else {
            return TxHashCheck::Stripped { index };
        };
        let computed = match tx.content_hash() {
            Ok(hash) => hash,
            Err(e) => {
                log::trace!("transaction {index} can't be hashed: {e}");
                return TxHashCheck::Malformed { index };
            }
        };

        if claimed.as_str() != Some(computed.as_str()) {
            let claimed = match claimed {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return TxHashCheck::Mismatch {
                index,
                computed,
                claimed,
            };
        }
    }

    TxHashCheck::Consistent
}
