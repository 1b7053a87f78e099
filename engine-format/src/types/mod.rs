use serde::{Deserialize, Deserializer};

mod block;
mod data;
mod fixed_size_data;
mod fork_choice;
mod header;
mod hex;
mod payload_status;
mod quantity;
mod rlp;
mod transaction;
mod transaction_type;
mod uint;

pub use block::{ExecutionBlock, ExecutionBlockField};
pub use data::Data;
pub use fixed_size_data::FixedSizeData;
pub use fork_choice::{ForkchoiceUpdatedResponse, PayloadStatus};
pub use header::ExecutionHeader;
pub use hex::Hex;
pub use payload_status::PayloadStatusKind;
pub use quantity::Quantity;
pub use transaction::{AccessListItem, Transaction};
pub use transaction_type::TransactionType;
pub use uint::UInt;

/// EVM hash is 32 bytes of data
pub type Hash = FixedSizeData<32>;

/// EVM address is 20 bytes of data
pub type Address = FixedSizeData<20>;

/// Proof of work nonce, 8 bytes of data
pub type Nonce = FixedSizeData<8>;

/// Identifier of a payload build process started by forkchoiceUpdated
pub type PayloadId = FixedSizeData<8>;

/// Logs bloom is 256 bytes of data
pub type BloomFilter = FixedSizeData<256>;

pub type BlockNumber = UInt;

/// Reads an explicit `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
