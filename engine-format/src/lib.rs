//! # Engine Format
//!
//! Consensus client side representation of the execution engine api objects
//! that the consensus layer reads over json-rpc.
//!
//! Values use the engine api hex conventions: fixed size data and byte
//! strings are `0x` prefixed hex with an even digit count, quantities are
//! `0x` prefixed hex without leading zeros.
//!
//! ## Key Types
//!
//! - [`ForkchoiceUpdatedResponse`] - result of `engine_forkchoiceUpdated`
//! - [`ExecutionBlock`] - block envelope with header and signed transactions
//! - [`ExecutionHeader`] - execution layer block header
//! - [`Transaction`] - signed transaction that can recompute its own hash
//! - [`ExecutionBlockField`] - field table of [`ExecutionBlock`] with wire names
//!
//! ## Example
//!
//! ```
//! use engine_format::{Hash, PayloadId};
//!
//! let id: PayloadId = "0x01ffaa00eefe0000".parse()?;
//! println!("Payload id: {}", id);
//!
//! let hash: Hash = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
//! println!("Hash: {}", hash);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
    AccessListItem, Address, BlockNumber, BloomFilter, Data, ExecutionBlock, ExecutionBlockField,
    ExecutionHeader, FixedSizeData, ForkchoiceUpdatedResponse, Hash, Hex, Nonce, PayloadId,
    PayloadStatus, PayloadStatusKind, Quantity, Transaction, TransactionType, UInt,
};
