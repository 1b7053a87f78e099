use alloy_primitives::{B256, B64};
use serde::{Deserialize, Serialize};

use crate::{hexutil, null_as_default};

/// Result of `engine_forkchoiceUpdatedV*`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkChoiceResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload_status: PayloadStatusV1,
    #[serde(default, with = "hexutil::opt_fixed")]
    pub payload_id: Option<B64>,
}

/// Payload status as defined by the engine api, with `status` kept as the raw string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadStatusV1 {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, with = "hexutil::opt_fixed")]
    pub latest_valid_hash: Option<B256>,
    #[serde(default)]
    pub validation_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, b64};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let resp = ForkChoiceResponse {
            payload_status: PayloadStatusV1 {
                status: "INVALID".into(),
                latest_valid_hash: Some(b256!(
                    "ff01000000000000000000000000000000000000000000000000000000000000"
                )),
                validation_error: Some("bad block".into()),
            },
            payload_id: Some(b64!("01ffaa00eefe0000")),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"payloadStatus":{"status":"INVALID","latestValidHash":"0xff01000000000000000000000000000000000000000000000000000000000000","validationError":"bad block"},"payloadId":"0x01ffaa00eefe0000"}"#
        );
        assert_eq!(serde_json::from_str::<ForkChoiceResponse>(&json).unwrap(), resp);
    }

    #[test]
    fn test_null_payload_status() {
        let resp: ForkChoiceResponse =
            serde_json::from_str(r#"{"payloadStatus":null,"payloadId":null}"#).unwrap();
        assert_eq!(resp, ForkChoiceResponse::default());
    }

    #[test]
    fn test_status_keeps_raw_string() {
        let resp: ForkChoiceResponse =
            serde_json::from_str(r#"{"payloadStatus":{"status":"SOMETHING"}}"#).unwrap();
        assert_eq!(resp.payload_status.status, "SOMETHING");
        assert_eq!(resp.payload_status.validation_error, None);
    }

    #[test]
    fn test_wrong_types() {
        assert!(serde_json::from_str::<ForkChoiceResponse>(r#"{"payloadStatus":7}"#).is_err());
        assert!(
            serde_json::from_str::<ForkChoiceResponse>(r#"{"payloadStatus":{"status":1}}"#)
                .is_err()
        );
    }

    #[test]
    fn test_loose_hex_is_rejected() {
        for json in [
            r#"{"payloadId":"01ffaa00eefe0000"}"#,
            r#"{"payloadId":"0x01ffaa00eefe00"}"#,
            r#"{"payloadId":[1,255,170,0,238,254,0,0]}"#,
            r#"{"payloadStatus":{"latestValidHash":"0xff01"}}"#,
        ] {
            assert!(serde_json::from_str::<ForkChoiceResponse>(json).is_err(), "{json}");
        }
    }
}
