use crate::tx_hash::TxHashCheck;

/// Result of a trial that found no divergence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every compared value agreed.
    Equivalent,
    /// Both models refused the input.
    Rejected,
    /// Input exceeds the configured maximum length.
    Oversized,
    /// Client re-encoding reads back as `UNKNOWN`, payload status fields were not compared.
    UnknownStatus,
    /// Block json lacks a key its field table declares.
    Incomplete,
    /// Some transaction lacks a `hash` key matching its content.
    TransactionsOutsideContract(TxHashCheck),
}
