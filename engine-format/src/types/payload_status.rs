use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use crate::{Error, Result};

/// `status` of an engine api payload status object.
///
/// Strings outside the known set decode to [`PayloadStatusKind::Unknown`], as does `null`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PayloadStatusKind {
    #[default]
    Unknown,
    Valid,
    Invalid,
    Syncing,
    Accepted,
    InvalidBlockHash,
    InvalidTerminalBlock,
}

impl PayloadStatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Syncing => "SYNCING",
            Self::Accepted => "ACCEPTED",
            Self::InvalidBlockHash => "INVALID_BLOCK_HASH",
            Self::InvalidTerminalBlock => "INVALID_TERMINAL_BLOCK",
        }
    }

    /// Lenient parse used on the wire.
    pub fn from_wire(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }
}

impl FromStr for PayloadStatusKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UNKNOWN" => Ok(Self::Unknown),
            "VALID" => Ok(Self::Valid),
            "INVALID" => Ok(Self::Invalid),
            "SYNCING" => Ok(Self::Syncing),
            "ACCEPTED" => Ok(Self::Accepted),
            "INVALID_BLOCK_HASH" => Ok(Self::InvalidBlockHash),
            "INVALID_TERMINAL_BLOCK" => Ok(Self::InvalidTerminalBlock),
            _ => Err(Error::UnknownPayloadStatus(s.to_owned())),
        }
    }
}

struct PayloadStatusKindVisitor;

impl Visitor<'_> for PayloadStatusKindVisitor {
    type Value = PayloadStatusKind;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string for payload status")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(PayloadStatusKind::from_wire(value))
    }

    fn visit_unit<E>(self) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(PayloadStatusKind::Unknown)
    }
}

impl<'de> Deserialize<'de> for PayloadStatusKind {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PayloadStatusKindVisitor)
    }
}

impl Serialize for PayloadStatusKind {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Debug for PayloadStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadStatusKind({})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::PayloadStatusKind;
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(&PayloadStatusKind::Valid, &[Token::Str("VALID")]);
        assert_tokens(
            &PayloadStatusKind::InvalidTerminalBlock,
            &[Token::Str("INVALID_TERMINAL_BLOCK")],
        );
    }

    #[test]
    fn test_de_unrecognized_is_unknown() {
        assert_de_tokens(&PayloadStatusKind::Unknown, &[Token::Str("valid")]);
        assert_de_tokens(&PayloadStatusKind::Unknown, &[Token::Str("")]);
        assert_de_tokens(&PayloadStatusKind::Unknown, &[Token::Unit]);
    }

    #[test]
    fn test_de_wrong_type() {
        assert_de_tokens_error::<PayloadStatusKind>(
            &[Token::U64(1)],
            "invalid type: integer `1`, expected string for payload status",
        );
    }
}
