use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;

use super::hex::strip_prefix;
use super::quantity::encode_hex;
use super::Hex;
use crate::{Error, Result};

/// EIP-2718 transaction type byte.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct TransactionType(u8);

impl TransactionType {
    pub const LEGACY: Self = Self(0x00);
    pub const ACCESS_LIST: Self = Self(0x01);
    pub const DYNAMIC_FEE: Self = Self(0x02);
}

struct TransactionTypeVisitor;

impl<'de> Visitor<'de> for TransactionTypeVisitor {
    type Value = TransactionType;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for transaction type")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        TransactionType::decode_hex(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TransactionTypeVisitor)
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode_hex())
    }
}

impl Hex for TransactionType {
    fn encode_hex(&self) -> String {
        encode_hex(&self.to_be_bytes())
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        let value = strip_prefix(hex)?;

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::UnknownTransactionType(hex.to_owned()));
        }

        u8::from_str_radix(value, 16)
            .map_err(|_| Error::DecodeNumberFromHex(hex.to_string()))
            .map(Into::into)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionType;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_serde_zero() {
        assert_eq!(TransactionType::default(), TransactionType::LEGACY);

        assert_tokens(&TransactionType::LEGACY, &[Token::Str("0x0")]);
    }

    #[test]
    fn test_serde() {
        assert_tokens(&TransactionType::DYNAMIC_FEE, &[Token::Str("0x2")]);
        assert_de_tokens(&TransactionType::ACCESS_LIST, &[Token::Str("0x01")]);
    }

    #[test]
    #[should_panic(expected = "Invalid Number from Hex")]
    fn test_serde_overflow() {
        assert_de_tokens(
            &TransactionType::from(19),
            &[Token::Str("0xffffffffffffffffa")],
        );
    }
}
