use std::fmt;

/// Field table declares a field the checker cannot locate on the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Field {field} has no wire name")]
    MissingWireName { field: &'static str },
}

/// Which re-encoding the reference model read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Round {
    #[strum(to_string = "client re-encoding")]
    ClientReEncoding,
    #[strum(to_string = "reference re-encoding")]
    ReferenceReEncoding,
}

/// Observed disagreement between the models, or between a model and its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Divergence {
    #[error("Decoders disagree. reference: {reference}, client: {client}")]
    DecodeAgreement { reference: String, client: String },
    #[error("Encoders disagree. reference: {reference}, client: {client}")]
    EncodeAgreement { reference: String, client: String },
    #[error("Reference model failed to decode the {round}: {error}")]
    ReDecode { round: Round, error: String },
    #[error("{field} differs after round trip. client re-encoding: {client}, reference re-encoding: {reference}")]
    RoundTrip {
        field: &'static str,
        client: String,
        reference: String,
    },
    #[error("Header differs after round trip in {fields:?}. client re-encoding: {client}, reference re-encoding: {reference}")]
    HeaderRoundTrip {
        fields: Vec<String>,
        client: String,
        reference: String,
    },
    #[error("{wire_name} doesn't exist in json map for field {field}")]
    MissingWireKey {
        field: &'static str,
        wire_name: &'static str,
    },
    #[error("Fields don't match, {raw} and {decoded} are not equal for field {field}")]
    FieldMismatch {
        field: &'static str,
        raw: String,
        decoded: String,
    },
    #[error("Client model changed after its own round trip: {detail}")]
    SelfRoundTrip { detail: String },
    #[error("Transaction {index} hashes to {computed} but the input claims {claimed}")]
    TransactionHash {
        index: usize,
        computed: String,
        claimed: String,
    },
}

/// A divergence together with the input that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    input: Vec<u8>,
    divergence: Divergence,
}

impl Finding {
    pub fn new(input: &[u8], divergence: Divergence) -> Self {
        Self {
            input: input.to_vec(),
            divergence,
        }
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn divergence(&self) -> &Divergence {
        &self.divergence
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\ninput ({} bytes): 0x{}",
            self.divergence,
            self.input.len(),
            faster_hex::hex_string(&self.input)
        )
    }
}

impl std::error::Error for Finding {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.divergence)
    }
}

/// Failure of a single trial.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Divergence found: {0}")]
    Divergence(Box<Finding>),
}

impl CheckError {
    pub(crate) fn divergence(input: &[u8], divergence: Divergence) -> Self {
        log::debug!("{divergence}");
        Self::Divergence(Box::new(Finding::new(input, divergence)))
    }

    /// The divergence, if this is not a schema error.
    pub fn as_divergence(&self) -> Option<&Divergence> {
        match self {
            Self::Divergence(finding) => Some(finding.divergence()),
            Self::Schema(_) => None,
        }
    }
}

/// Error of the structural block checker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Divergence(#[from] Divergence),
}

pub(crate) fn verdict<T>(res: &serde_json::Result<T>) -> String {
    match res {
        Ok(_) => "ok".to_owned(),
        Err(e) => format!("error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display() {
        let finding = Finding::new(
            b"{}",
            Divergence::SelfRoundTrip {
                detail: "lost hash".into(),
            },
        );

        assert_eq!(
            finding.to_string(),
            "Client model changed after its own round trip: lost hash\ninput (2 bytes): 0x7b7d"
        );
    }

    #[test]
    fn test_round_display() {
        assert_eq!(Round::ClientReEncoding.to_string(), "client re-encoding");
        assert_eq!(
            Divergence::ReDecode {
                round: Round::ReferenceReEncoding,
                error: "eof".into()
            }
            .to_string(),
            "Reference model failed to decode the reference re-encoding: eof"
        );
    }

    #[test]
    fn test_verdict() {
        let err = serde_json::from_str::<u8>("x");
        assert!(verdict(&err).starts_with("error: "));
        assert_eq!(verdict(&serde_json::from_str::<u8>("1")), "ok");
    }
}
