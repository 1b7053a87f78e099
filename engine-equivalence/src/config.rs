use serde::{Deserialize, Serialize};

/// Knobs of the comparators. Every `None` resolves to the documented default.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Stop comparing payload status fields once the client re-encoding
    /// reads back as `UNKNOWN`. Defaults to true.
    pub exempt_unknown_status: Option<bool>,
    /// Keep comparing the payload id inside the `UNKNOWN` exemption.
    /// Defaults to true.
    pub compare_payload_id_on_unknown: Option<bool>,
    /// Treat an absent validation error and `""` as the same value.
    /// Defaults to true.
    pub empty_validation_error_is_absent: Option<bool>,
    /// What to do when a transaction `hash` key disagrees with the recomputed
    /// hash. Reported by default.
    #[serde(default)]
    pub tx_hash_mismatch: TxHashPolicy,
    /// Inputs longer than this many bytes are skipped. Unbounded by default.
    pub max_input_len: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxHashPolicy {
    /// Report the mismatch as a divergence.
    Report,
    /// Treat the input as having rewritten a convenience field and stop the
    /// trial without comparing.
    Skip,
}

impl Default for TxHashPolicy {
    fn default() -> Self {
        Self::Report
    }
}

pub(crate) fn is_oversized(max_input_len: Option<usize>, input: &[u8]) -> bool {
    max_input_len.is_some_and(|max| input.len() > max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let cfg: CheckConfig =
            serde_json::from_str(r#"{"tx_hash_mismatch":"skip","max_input_len":4096}"#).unwrap();

        assert_eq!(cfg.tx_hash_mismatch, TxHashPolicy::Skip);
        assert_eq!(cfg.max_input_len, Some(4096));
        assert_eq!(cfg.exempt_unknown_status, None);
    }

    #[test]
    fn test_empty_config() {
        let cfg: CheckConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.tx_hash_mismatch, TxHashPolicy::Report);
        assert_eq!(CheckConfig::default().tx_hash_mismatch, TxHashPolicy::Report);
    }

    #[test]
    fn test_is_oversized() {
        assert!(!is_oversized(None, &[0; 10]));
        assert!(!is_oversized(Some(10), &[0; 10]));
        assert!(is_oversized(Some(9), &[0; 10]));
    }
}
