//! Seams between the comparators and the models they compare.

use engine_format::{
    ExecutionBlock, ExecutionBlockField, ExecutionHeader, ForkchoiceUpdatedResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use strum::{EnumProperty, IntoEnumIterator};

/// Decode and encode at the json wire format.
pub trait WireModel: Sized {
    fn decode(bytes: &[u8]) -> serde_json::Result<Self>;
    fn encode(&self) -> serde_json::Result<Vec<u8>>;
}

impl<T> WireModel for T
where
    T: Serialize + DeserializeOwned,
{
    fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// The four values compared between fork choice round trips.
pub trait ForkChoiceView {
    fn status(&self) -> &str;
    fn payload_id(&self) -> Option<&[u8]>;
    fn latest_valid_hash(&self) -> Option<&[u8]>;
    fn validation_error(&self) -> Option<&str>;
}

impl ForkChoiceView for engine_reference::ForkChoiceResponse {
    fn status(&self) -> &str {
        &self.payload_status.status
    }

    fn payload_id(&self) -> Option<&[u8]> {
        self.payload_id.as_ref().map(|id| id.as_slice())
    }

    fn latest_valid_hash(&self) -> Option<&[u8]> {
        self.payload_status
            .latest_valid_hash
            .as_ref()
            .map(|hash| hash.as_slice())
    }

    fn validation_error(&self) -> Option<&str> {
        self.payload_status.validation_error.as_deref()
    }
}

impl ForkChoiceView for ForkchoiceUpdatedResponse {
    fn status(&self) -> &str {
        self.status
            .as_ref()
            .map(|s| s.status.as_str())
            .unwrap_or_default()
    }

    fn payload_id(&self) -> Option<&[u8]> {
        self.payload_id.as_ref().map(AsRef::as_ref)
    }

    fn latest_valid_hash(&self) -> Option<&[u8]> {
        self.status
            .as_ref()
            .and_then(|s| s.latest_valid_hash.as_ref())
            .map(AsRef::as_ref)
    }

    fn validation_error(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.validation_error.as_str())
    }
}

/// Model that carries an execution header, possibly inside a larger envelope.
pub trait HeaderEnvelope {
    type Header: Serialize;

    fn header(&self) -> &Self::Header;
}

impl HeaderEnvelope for ExecutionHeader {
    type Header = Self;

    fn header(&self) -> &Self {
        self
    }
}

impl HeaderEnvelope for ExecutionBlock {
    type Header = ExecutionHeader;

    fn header(&self) -> &ExecutionHeader {
        &self.header
    }
}

/// Value that can recompute its own content hash, rendered the way it appears on the wire.
pub trait ContentHashed {
    type Error: std::fmt::Display;

    fn content_hash(&self) -> Result<String, Self::Error>;
}

impl ContentHashed for engine_format::Transaction {
    type Error = engine_format::Error;

    fn content_hash(&self) -> Result<String, Self::Error> {
        Ok(self.hash()?.to_string())
    }
}

pub trait BlockEnvelope: HeaderEnvelope {
    type Transaction: ContentHashed;

    fn transactions(&self) -> &[Self::Transaction];
}

impl BlockEnvelope for ExecutionBlock {
    type Transaction = engine_format::Transaction;

    fn transactions(&self) -> &[engine_format::Transaction] {
        &self.transactions
    }
}

/// How the structural checker treats a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Embedded into the parent object. Compared by the header comparator.
    Flattened,
    /// Must be present. Contents are checked elsewhere.
    Nested,
    /// Raw value goes through the client hash codec before comparing.
    Hash,
    /// JSON value of the decoded field must equal the raw value.
    Raw,
}

/// Field table of a decoded model.
///
/// Every field that is not [`FieldRule::Flattened`] needs a `wire` property
/// naming its json key.
pub trait WireFields {
    type Field: IntoEnumIterator + EnumProperty + Copy + Into<&'static str>;

    fn rule(field: Self::Field) -> FieldRule;

    fn field_value(&self, field: Self::Field) -> serde_json::Result<Value>;

    fn wire_name(field: Self::Field) -> Option<&'static str> {
        field.get_str("wire")
    }
}

impl WireFields for ExecutionBlock {
    type Field = ExecutionBlockField;

    fn rule(field: ExecutionBlockField) -> FieldRule {
        match field {
            ExecutionBlockField::Header => FieldRule::Flattened,
            ExecutionBlockField::Hash => FieldRule::Hash,
            ExecutionBlockField::Transactions => FieldRule::Nested,
            ExecutionBlockField::TotalDifficulty => FieldRule::Raw,
        }
    }

    fn field_value(&self, field: ExecutionBlockField) -> serde_json::Result<Value> {
        match field {
            ExecutionBlockField::Header => serde_json::to_value(&self.header),
            ExecutionBlockField::Hash => serde_json::to_value(&self.hash),
            ExecutionBlockField::Transactions => serde_json::to_value(&self.transactions),
            ExecutionBlockField::TotalDifficulty => serde_json::to_value(&self.total_difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_format::{Hash, PayloadStatus, PayloadStatusKind};

    #[test]
    fn test_client_view_without_status() {
        let resp = ForkchoiceUpdatedResponse::default();

        assert_eq!(resp.status(), "");
        assert_eq!(resp.validation_error(), None);
        assert_eq!(resp.latest_valid_hash(), None);
    }

    #[test]
    fn test_client_view() {
        let resp = ForkchoiceUpdatedResponse {
            status: Some(PayloadStatus {
                status: PayloadStatusKind::Syncing,
                latest_valid_hash: Some(Hash::from([7; 32])),
                validation_error: String::new(),
            }),
            payload_id: None,
        };

        assert_eq!(resp.status(), "SYNCING");
        assert_eq!(resp.validation_error(), Some(""));
        assert_eq!(resp.latest_valid_hash(), Some(&[7u8; 32][..]));
    }

    #[test]
    fn test_reference_view() {
        let resp = engine_reference::ForkChoiceResponse {
            payload_id: Some(engine_reference::B64::from([1; 8])),
            ..Default::default()
        };

        assert_eq!(resp.status(), "");
        assert_eq!(resp.payload_id(), Some(&[1u8; 8][..]));
        assert_eq!(resp.validation_error(), None);
    }

    #[test]
    fn test_block_field_values() {
        let block = ExecutionBlock {
            total_difficulty: "0x10".into(),
            ..Default::default()
        };

        assert_eq!(
            block
                .field_value(ExecutionBlockField::TotalDifficulty)
                .unwrap(),
            Value::String("0x10".into())
        );
        assert_eq!(
            ExecutionBlock::wire_name(ExecutionBlockField::Hash),
            Some("hash")
        );
        assert_eq!(ExecutionBlock::wire_name(ExecutionBlockField::Header), None);
    }
}
