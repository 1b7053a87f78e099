use crate::{Error, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::result::Result as StdResult;

use super::hex::{decode_digits, strip_prefix, Hex};

const MAX_QUANTITY_DIGITS: usize = 64;

/// Arbitrary precision unsigned integer up to 256 bits.
///
/// Stored big endian without leading zero bytes, zero is a single `0` byte.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, derive_more::From, derive_more::Into, derive_more::Deref,
)]
pub struct Quantity(Box<[u8]>);

impl Quantity {
    pub fn is_zero(&self) -> bool {
        self.0.as_ref() == [0]
    }

    /// Big endian bytes with every leading zero stripped, empty for zero.
    pub fn minimal_bytes(&self) -> &[u8] {
        if self.is_zero() {
            &[]
        } else {
            &self.0
        }
    }
}

impl AsRef<[u8]> for Quantity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Quantity {
    fn from(buf: Vec<u8>) -> Self {
        Self::from(buf.as_slice())
    }
}

impl From<&[u8]> for Quantity {
    fn from(buf: &[u8]) -> Self {
        match buf.iter().position(|b| *b != 0) {
            Some(idx) => Self(buf[idx..].into()),
            None => Self::default(),
        }
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::from(value.to_be_bytes().as_slice())
    }
}

impl Default for Quantity {
    fn default() -> Quantity {
        Quantity(Box::new([0]))
    }
}

impl<const N: usize> From<[u8; N]> for Quantity {
    fn from(buf: [u8; N]) -> Self {
        Self::from(buf.as_slice())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Quantity {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=32)?;
        Ok(Self::from(u.bytes(len)?))
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for a quantity")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Quantity::decode_hex(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(QuantityVisitor)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode_hex())
    }
}

impl Hex for Quantity {
    fn encode_hex(&self) -> String {
        encode_hex(&self.0)
    }

    fn decode_hex(hex: &str) -> Result<Self> {
        Ok(Self::from(decode_hex(hex)?))
    }
}

pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    if value == "0x0" {
        return Ok(vec![0]);
    }

    let val = strip_prefix(value)?;

    if val.is_empty() || val.starts_with('0') {
        return Err(Error::UnexpectedQuantity(value.to_owned()));
    }

    if val.len() > MAX_QUANTITY_DIGITS {
        return Err(Error::QuantityTooLarge(value.to_owned()));
    }

    let mut val: Cow<_> = val.into();

    if val.len() % 2 != 0 {
        val = format!("0{val}").into();
    }

    decode_digits(val.as_ref())
}

pub fn encode_hex(buf: &[u8]) -> String {
    let hex_val = faster_hex::hex_string(buf);

    match hex_val.find(|c| c != '0') {
        Some(idx) => format!("0x{}", &hex_val[idx..]),
        None => "0x0".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::Quantity;
    use hex_literal::hex;
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_ser_tokens, Token};

    #[test]
    fn test_serde_zero() {
        assert_eq!(Quantity::default(), Quantity::from(vec![0]));
        assert_ser_tokens(&Quantity::default(), &[Token::Str("0x0")]);
        assert_de_tokens(&Quantity::default(), &[Token::Str("0x0")]);
    }

    #[test]
    fn test_serialize() {
        assert_ser_tokens(&Quantity::from(hex!("420000")), &[Token::Str("0x420000")]);
        assert_ser_tokens(&Quantity::from(hex!("000042")), &[Token::Str("0x42")]);
        assert_ser_tokens(&Quantity::from(1_000_000_000u64), &[Token::Str("0x3b9aca00")]);
    }

    #[test]
    fn test_deserialize() {
        assert_de_tokens(&Quantity::from(hex!("420000")), &[Token::Str("0x420000")]);
        assert_de_tokens(&Quantity::from(hex!("0420")), &[Token::Str("0x420")]);
    }

    #[test]
    fn test_deserialize_leading_zeroes() {
        assert_de_tokens_error::<Quantity>(
            &[Token::Str("0x00420000")],
            "Unexpected quantity. Value was: 0x00420000",
        );
    }

    #[test]
    fn test_deserialize_empty() {
        assert_de_tokens_error::<Quantity>(
            &[Token::Str("0x")],
            "Unexpected quantity. Value was: 0x",
        );
    }

    #[test]
    fn test_deserialize_too_large() {
        let value = format!("0x1{}", "0".repeat(64));
        assert!(serde_json::from_value::<Quantity>(serde_json::Value::String(value)).is_err());
    }

    #[test]
    fn test_from_slice_canonicalizes() {
        assert_eq!(Quantity::from(vec![0, 0, 1]).as_ref(), &[1]);
        assert_eq!(Quantity::from(Vec::new()), Quantity::default());
    }

    #[test]
    fn test_minimal_bytes() {
        assert!(Quantity::default().minimal_bytes().is_empty());
        assert_eq!(Quantity::from(0x0102u64).minimal_bytes(), &[1, 2]);
    }
}
