use std::fmt::Debug;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{is_oversized, CheckConfig, TxHashPolicy};
use crate::error::{CheckError, Divergence, StructureError};
use crate::header::HeaderComparator;
use crate::model::{BlockEnvelope, HeaderEnvelope, WireFields, WireModel};
use crate::structure::{json_fields_are_valid, validate_block_consistency};
use crate::tx_hash::{check_transaction_hashes, TxHashCheck};
use crate::Outcome;

/// Checks a full block: transaction hashes, completeness and structural
/// consistency of the client decoding, its own round trip and finally the
/// header comparison against the reference model.
///
/// The header comparison reads the input as the bare header type of the
/// client block.
pub struct ExecutionBlockComparator<W, N: HeaderEnvelope> {
    max_input_len: Option<usize>,
    tx_hash_mismatch: TxHashPolicy,
    header: HeaderComparator<W, N::Header>,
}

impl<W, N> ExecutionBlockComparator<W, N>
where
    W: WireModel + Serialize + PartialEq + Debug,
    N: WireModel + WireFields + BlockEnvelope + PartialEq + Debug,
    N::Header: WireModel + HeaderEnvelope,
{
    pub fn new(cfg: &CheckConfig) -> Self {
        Self {
            max_input_len: cfg.max_input_len,
            tx_hash_mismatch: cfg.tx_hash_mismatch,
            header: HeaderComparator::new(cfg),
        }
    }

    pub fn check(&self, input: &[u8]) -> Result<Outcome, CheckError> {
        if is_oversized(self.max_input_len, input) {
            return Ok(Outcome::Oversized);
        }

        let (json_map, block) = match (
            serde_json::from_slice::<Map<String, Value>>(input),
            N::decode(input),
        ) {
            (Ok(json_map), Ok(block)) => (json_map, block),
            (_, Err(e)) | (Err(e), _) => {
                log::trace!("block input rejected: {e}");
                return Ok(Outcome::Rejected);
            }
        };

        match check_transaction_hashes(block.transactions(), &json_map) {
            TxHashCheck::Consistent => {}
            TxHashCheck::Mismatch {
                index,
                computed,
                claimed,
            } if self.tx_hash_mismatch == TxHashPolicy::Report => {
                return Err(CheckError::divergence(
                    input,
                    Divergence::TransactionHash {
                        index,
                        computed,
                        claimed,
                    },
                ));
            }
            other => {
                log::trace!("transactions outside the hash contract: {other:?}");
                return Ok(Outcome::TransactionsOutsideContract(other));
            }
        }

        if !json_fields_are_valid::<N>(&json_map)? {
            log::trace!("block json is missing a declared key");
            return Ok(Outcome::Incomplete);
        }

        validate_block_consistency(&block, &json_map).map_err(|e| match e {
            StructureError::Schema(e) => CheckError::Schema(e),
            StructureError::Divergence(d) => CheckError::divergence(input, d),
        })?;

        self.self_round_trip(&block)
            .map_err(|d| CheckError::divergence(input, d))?;

        self.header.check(input)
    }

    // Transaction hashes are covered by the equality, they are derived from the decoded fields.
    fn self_round_trip(&self, block: &N) -> Result<(), Divergence> {
        let encoded = block.encode().map_err(|e| Divergence::SelfRoundTrip {
            detail: format!("encoding failed: {e}"),
        })?;
        let decoded = N::decode(&encoded).map_err(|e| Divergence::SelfRoundTrip {
            detail: format!("decoding own encoding failed: {e}"),
        })?;

        if &decoded != block {
            return Err(Divergence::SelfRoundTrip {
                detail: format!("{block:?} read back as {decoded:?}"),
            });
        }

        Ok(())
    }
}
