//! # Engine Reference
//!
//! Execution client side representation of the engine api objects, built on
//! the `alloy-primitives` fixed bytes and integer types behind strict engine
//! api hex codecs. It shares no code with the consensus client types and
//! serves as the reference model when both are compared.

mod fork_choice;
mod header;
mod hexutil;

pub use alloy_primitives::{Address, Bloom, Bytes, B256, B64, U256, U64};
pub use fork_choice::{ForkChoiceResponse, PayloadStatusV1};
pub use header::Header;

use serde::{Deserialize, Deserializer};

// JSON `null` leaves non-nullable fields at their zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
