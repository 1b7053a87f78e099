use super::hex::strip_prefix;
use super::quantity::encode_hex;
use crate::{Error, Hex};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::Add,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct UInt(u64);

impl FromStr for UInt {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        let digits = strip_prefix(value)?;

        if digits.is_empty()
            || (digits.len() > 1 && digits.starts_with('0'))
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(Error::UnexpectedQuantity(value.to_owned()));
        }

        u64::from_str_radix(digits, 16)
            .map_err(|e| Error::DecodeNumberFromHex(e.to_string()))
            .map(Into::into)
    }
}

struct UIntVisitor;

impl<'de> Visitor<'de> for UIntVisitor {
    type Value = UInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for integer")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        UInt::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for UInt {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(UIntVisitor)
    }
}

impl Serialize for UInt {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode_hex())
    }
}

impl Hex for UInt {
    fn encode_hex(&self) -> String {
        encode_hex(&self.to_be_bytes())
    }

    fn decode_hex(hex: &str) -> crate::Result<Self> {
        Self::from_str(hex)
    }
}
