use alloy_primitives::keccak256;
use alloy_rlp::Encodable;
use serde::{Deserialize, Serialize};

use super::rlp::{encode_fields, List, OptionalBytes};
use super::{Address, Data, Hash, Quantity, TransactionType, UInt};
use crate::{Error, Result};

/// Signed transaction inside an execution block.
///
/// The `hash` key that RPC servers attach to each transaction object is not
/// read; [`Transaction::hash`] recomputes it from the canonical encoding.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Quantity>,
    pub nonce: UInt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<Quantity>,
    pub gas: UInt,
    pub to: Option<Address>,
    pub value: Quantity,
    pub input: Data,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list: Option<Vec<AccessListItem>>,
    pub v: Quantity,
    pub r: Quantity,
    pub s: Quantity,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<Hash>,
}

impl Transaction {
    /// EIP-2718 encoding: the RLP list of signed fields, prefixed with the
    /// type byte unless the transaction is legacy.
    pub fn canonical_encoding(&self) -> Result<Vec<u8>> {
        let to = OptionalBytes(self.to.as_ref().map(AsRef::as_ref));

        match self.kind {
            TransactionType::LEGACY => {
                let gas_price = self.require(&self.gas_price, "gasPrice")?;
                Ok(encode_fields(&[
                    &self.nonce,
                    gas_price,
                    &self.gas,
                    &to,
                    &self.value,
                    &self.input,
                    &self.v,
                    &self.r,
                    &self.s,
                ]))
            }
            TransactionType::ACCESS_LIST => {
                let chain_id = self.require(&self.chain_id, "chainId")?;
                let gas_price = self.require(&self.gas_price, "gasPrice")?;
                let access_list = List(self.require(&self.access_list, "accessList")?);
                Ok(typed(
                    self.kind,
                    &[
                        chain_id,
                        &self.nonce,
                        gas_price,
                        &self.gas,
                        &to,
                        &self.value,
                        &self.input,
                        &access_list,
                        &self.v,
                        &self.r,
                        &self.s,
                    ],
                ))
            }
            TransactionType::DYNAMIC_FEE => {
                let chain_id = self.require(&self.chain_id, "chainId")?;
                let max_priority_fee_per_gas =
                    self.require(&self.max_priority_fee_per_gas, "maxPriorityFeePerGas")?;
                let max_fee_per_gas = self.require(&self.max_fee_per_gas, "maxFeePerGas")?;
                let access_list = List(self.require(&self.access_list, "accessList")?);
                Ok(typed(
                    self.kind,
                    &[
                        chain_id,
                        &self.nonce,
                        max_priority_fee_per_gas,
                        max_fee_per_gas,
                        &self.gas,
                        &to,
                        &self.value,
                        &self.input,
                        &access_list,
                        &self.v,
                        &self.r,
                        &self.s,
                    ],
                ))
            }
            other => Err(Error::UnknownTransactionType(other.to_string())),
        }
    }

    /// Keccak256 of [`Transaction::canonical_encoding`].
    pub fn hash(&self) -> Result<Hash> {
        let encoded = self.canonical_encoding()?;
        Ok(Hash::from(keccak256(encoded).0))
    }

    fn require<'a, T>(&self, field: &'a Option<T>, name: &'static str) -> Result<&'a T> {
        field.as_ref().ok_or_else(|| Error::MissingTransactionField {
            kind: self.kind.to_string(),
            field: name,
        })
    }
}

fn typed(kind: TransactionType, fields: &[&dyn Encodable]) -> Vec<u8> {
    let body = encode_fields(fields);
    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(*kind);
    out.extend_from_slice(&body);
    out
}
