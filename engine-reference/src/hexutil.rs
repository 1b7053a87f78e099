//! Strict engine api hex codecs for the alloy types.
//!
//! The stock alloy codecs also read unprefixed hex, decimal strings and json
//! numbers. Engine api values are always `0x` prefixed hex strings, byte
//! strings have an even digit count and quantities have no leading zeros.

use alloy_primitives::{Address, Bloom, FixedBytes, Uint};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed width value built from exactly `LEN` bytes.
pub(crate) trait FixedHex: Sized {
    const LEN: usize;

    fn from_bytes(bytes: &[u8]) -> Self;
}

impl<const N: usize> FixedHex for FixedBytes<N> {
    const LEN: usize = N;

    fn from_bytes(bytes: &[u8]) -> Self {
        FixedBytes::from_slice(bytes)
    }
}

impl FixedHex for Address {
    const LEN: usize = 20;

    fn from_bytes(bytes: &[u8]) -> Self {
        Address::from_slice(bytes)
    }
}

impl FixedHex for Bloom {
    const LEN: usize = 256;

    fn from_bytes(bytes: &[u8]) -> Self {
        Bloom::from_slice(bytes)
    }
}

// Writing goes through the stock codecs, they already emit the strict form.
pub(crate) fn serialize<T: Serialize, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.serialize(serializer)
}

fn digits(value: &str) -> Result<&str, String> {
    value
        .strip_prefix("0x")
        .ok_or_else(|| format!("hex string without 0x prefix: {value}"))
}

pub(crate) fn decode_bytes(value: &str) -> Result<Vec<u8>, String> {
    let digits = digits(value)?;
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits: {value}"));
    }

    let mut out = vec![0; digits.len() / 2];
    faster_hex::hex_decode(digits.as_bytes(), &mut out)
        .map_err(|e| format!("invalid hex {value}: {e}"))?;

    Ok(out)
}

pub(crate) fn decode_fixed<T: FixedHex>(value: &str) -> Result<T, String> {
    let bytes = decode_bytes(value)?;
    if bytes.len() != T::LEN {
        return Err(format!("expected {} bytes, got {}", T::LEN, bytes.len()));
    }

    Ok(T::from_bytes(&bytes))
}

pub(crate) fn decode_quantity<const BITS: usize, const LIMBS: usize>(
    value: &str,
) -> Result<Uint<BITS, LIMBS>, String> {
    let digits = digits(value)?;
    if digits.is_empty()
        || (digits.len() > 1 && digits.starts_with('0'))
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(format!("invalid quantity: {value}"));
    }

    Uint::from_str_radix(digits, 16).map_err(|e| format!("invalid quantity {value}: {e}"))
}

pub(crate) mod fixed {
    use super::*;
    pub(crate) use super::serialize;

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FixedHex,
    {
        let value = String::deserialize(deserializer)?;
        decode_fixed(&value).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod opt_fixed {
    use super::*;
    pub(crate) use super::serialize;

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FixedHex,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| decode_fixed(&value))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

pub(crate) mod data {
    use super::*;
    use alloy_primitives::Bytes;
    pub(crate) use super::serialize;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        decode_bytes(&value)
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}

pub(crate) mod quantity {
    use super::*;
    pub(crate) use super::serialize;

    pub(crate) fn deserialize<'de, D, const BITS: usize, const LIMBS: usize>(
        deserializer: D,
    ) -> Result<Uint<BITS, LIMBS>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        decode_quantity(&value).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod opt_quantity {
    use super::*;
    pub(crate) use super::serialize;

    pub(crate) fn deserialize<'de, D, const BITS: usize, const LIMBS: usize>(
        deserializer: D,
    ) -> Result<Option<Uint<BITS, LIMBS>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| decode_quantity(&value))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{B64, U256, U64};

    #[test]
    fn test_quantity() {
        assert_eq!(decode_quantity::<64, 1>("0x0"), Ok(U64::ZERO));
        assert_eq!(decode_quantity::<64, 1>("0x10"), Ok(U64::from(16)));
        assert_eq!(decode_quantity::<256, 4>("0xABC"), Ok(U256::from(0xabc)));
    }

    #[test]
    fn test_quantity_rejects_loose_forms() {
        for value in ["16", "0x", "0x00", "0x010", "0X10", "0x1_0", "0x+1", "0xg"] {
            assert!(decode_quantity::<64, 1>(value).is_err(), "{value}");
        }
        assert!(decode_quantity::<64, 1>("0x10000000000000000").is_err());
        assert!(decode_quantity::<256, 4>(&format!("0x1{}", "0".repeat(64))).is_err());
    }

    #[test]
    fn test_fixed() {
        assert_eq!(
            decode_fixed::<B64>("0x01ffaa00eefe0000"),
            Ok(B64::from([0x01, 0xff, 0xaa, 0x00, 0xee, 0xfe, 0x00, 0x00]))
        );
        assert_eq!(
            decode_fixed::<Address>(&format!("0x{}", "AB".repeat(20))),
            Ok(Address::from([0xab; 20]))
        );
    }

    #[test]
    fn test_fixed_rejects_loose_forms() {
        for value in [
            "01ffaa00eefe0000",
            "0x01ffaa00eefe00",
            "0x01ffaa00eefe000000",
            "0x1ffaa00eefe0000",
        ] {
            assert!(decode_fixed::<B64>(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_bytes() {
        assert_eq!(decode_bytes("0x"), Ok(Vec::new()));
        assert_eq!(decode_bytes("0xbeef"), Ok(vec![0xbe, 0xef]));
        assert!(decode_bytes("beef").is_err());
        assert!(decode_bytes("0xbee").is_err());
    }
}
