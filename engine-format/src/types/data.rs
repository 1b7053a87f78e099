use crate::Result;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;

use super::hex::{decode_prefixed, encode_prefixed, Hex};

/// Variable length binary value such as `extraData` or transaction input.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Data(Box<[u8]>);

impl AsRef<[u8]> for Data {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Data {
    fn from(buf: Vec<u8>) -> Self {
        Self(buf.into())
    }
}

impl From<&[u8]> for Data {
    fn from(buf: &[u8]) -> Self {
        Self(buf.into())
    }
}

impl<const N: usize> From<[u8; N]> for Data {
    fn from(buf: [u8; N]) -> Self {
        Self(buf.into())
    }
}

struct DataVisitor;

impl<'de> Visitor<'de> for DataVisitor {
    type Value = Data;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for data")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Data::decode_hex(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Data {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DataVisitor)
    }
}

impl Serialize for Data {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode_hex())
    }
}

impl Hex for Data {
    fn encode_hex(&self) -> String {
        encode_prefixed(&self.0)
    }

    // Odd digit counts are rejected rather than left padded.
    fn decode_hex(hex: &str) -> Result<Self> {
        Ok(Self::from(decode_prefixed(hex)?))
    }
}

#[cfg(test)]
mod tests {
    use super::Data;
    use hex_literal::hex;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_serde_empty() {
        assert_tokens(&Data::default(), &[Token::Str("0x")]);
    }

    #[test]
    fn test_serde() {
        assert_tokens(&Data::from(hex!("004200")), &[Token::Str("0x004200")]);
        assert_tokens(&Data::from(hex!("000042")), &[Token::Str("0x000042")]);
        assert_tokens(&Data::from(hex!("00")), &[Token::Str("0x00")]);
    }

    #[test]
    fn test_odd_length() {
        assert_de_tokens_error::<Data>(
            &[Token::Str("0x420")],
            "Hex string has an odd number of digits. Value was: \"0x420\"",
        );
    }
}
