use crate::{Error, Result};

pub trait Hex: Sized {
    fn encode_hex(&self) -> String;
    fn decode_hex(hex: &str) -> Result<Self>;
}

/// Strips the mandatory `0x` prefix of an engine api hex string.
pub(crate) fn strip_prefix(value: &str) -> Result<&str> {
    value
        .strip_prefix("0x")
        .ok_or_else(|| Error::InvalidHexPrefix(value.to_owned()))
}

/// Decodes `0x` prefixed hex with an even number of digits.
pub(crate) fn decode_prefixed(value: &str) -> Result<Vec<u8>> {
    let digits = strip_prefix(value)?;

    if digits.len() % 2 != 0 {
        return Err(Error::OddLengthHex(value.to_owned()));
    }

    decode_digits(digits)
}

pub(crate) fn decode_digits(digits: &str) -> Result<Vec<u8>> {
    let mut dst = vec![0; digits.len() / 2];

    faster_hex::hex_decode(digits.as_bytes(), &mut dst).map_err(Error::DecodeHex)?;

    Ok(dst)
}

pub(crate) fn encode_prefixed(buf: &[u8]) -> String {
    format!("0x{}", faster_hex::hex_string(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_prefixed() {
        assert_eq!(decode_prefixed("0x00ff").unwrap(), vec![0, 0xff]);
        assert_eq!(decode_prefixed("0xABcd").unwrap(), vec![0xab, 0xcd]);
        assert!(decode_prefixed("0x").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            decode_prefixed("00ff"),
            Err(Error::InvalidHexPrefix(_))
        ));
        assert!(matches!(decode_prefixed("0xfff"), Err(Error::OddLengthHex(_))));
        assert!(matches!(decode_prefixed("0xzz"), Err(Error::DecodeHex(_))));
    }
}
