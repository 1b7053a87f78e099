use serde::{Deserialize, Serialize};

use super::{null_as_default, Hash, PayloadId, PayloadStatusKind};

/// Response of `engine_forkchoiceUpdated`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceUpdatedResponse {
    #[serde(default, rename = "payloadStatus")]
    pub status: Option<PayloadStatus>,
    #[serde(default)]
    pub payload_id: Option<PayloadId>,
}

/// Payload status object.
///
/// A missing or `null` validation error reads as the empty string, and an
/// empty validation error is written as `""`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct PayloadStatus {
    #[serde(default)]
    pub status: PayloadStatusKind,
    #[serde(default)]
    pub latest_valid_hash: Option<Hash>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation_error: String,
}
