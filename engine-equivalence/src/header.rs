use std::fmt::Debug;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::config::{is_oversized, CheckConfig};
use crate::error::{verdict, CheckError, Divergence, Round};
use crate::model::{HeaderEnvelope, WireModel};
use crate::Outcome;

/// Differential check of execution headers.
///
/// The client model may wrap the header in a larger envelope, only the header
/// it carries is re-encoded. Both re-encodings read back by the reference
/// model must be equal.
pub struct HeaderComparator<W, N> {
    max_input_len: Option<usize>,
    _models: PhantomData<fn() -> (W, N)>,
}

impl<W, N> HeaderComparator<W, N>
where
    W: WireModel + Serialize + PartialEq + Debug,
    N: WireModel + HeaderEnvelope,
{
    pub fn new(cfg: &CheckConfig) -> Self {
        Self {
            max_input_len: cfg.max_input_len,
            _models: PhantomData,
        }
    }

    pub fn check(&self, input: &[u8]) -> Result<Outcome, CheckError> {
        if is_oversized(self.max_input_len, input) {
            return Ok(Outcome::Oversized);
        }

        self.compare(input)
            .map_err(|d| CheckError::divergence(input, d))
    }

    fn compare(&self, input: &[u8]) -> Result<Outcome, Divergence> {
        let (reference, client) = match (W::decode(input), N::decode(input)) {
            (Ok(reference), Ok(client)) => (reference, client),
            (Err(e), Err(_)) => {
                log::trace!("both models rejected header: {e}");
                return Ok(Outcome::Rejected);
            }
            (reference, client) => {
                return Err(Divergence::DecodeAgreement {
                    reference: verdict(&reference),
                    client: verdict(&client),
                })
            }
        };

        let client_blob = serde_json::to_vec(client.header());
        let (reference_blob, client_blob) = match (reference.encode(), client_blob) {
            (Ok(reference), Ok(client)) => (reference, client),
            (Err(e), Err(_)) => {
                log::trace!("both models failed to encode header: {e}");
                return Ok(Outcome::Rejected);
            }
            (reference, client) => {
                return Err(Divergence::EncodeAgreement {
                    reference: verdict(&reference),
                    client: verdict(&client),
                })
            }
        };

        let from_client = W::decode(&client_blob).map_err(|e| Divergence::ReDecode {
            round: Round::ClientReEncoding,
            error: e.to_string(),
        })?;
        let from_reference = W::decode(&reference_blob).map_err(|e| Divergence::ReDecode {
            round: Round::ReferenceReEncoding,
            error: e.to_string(),
        })?;

        if from_client != from_reference {
            return Err(Divergence::HeaderRoundTrip {
                fields: differing_fields(&from_client, &from_reference),
                client: format!("{from_client:?}"),
                reference: format!("{from_reference:?}"),
            });
        }

        Ok(Outcome::Equivalent)
    }
}

// Wire names of the top level keys whose values differ.
fn differing_fields<T: Serialize>(a: &T, b: &T) -> Vec<String> {
    let (Ok(Value::Object(a)), Ok(Value::Object(b))) =
        (serde_json::to_value(a), serde_json::to_value(b))
    else {
        return Vec::new();
    };

    let mut fields: Vec<String> = a
        .iter()
        .filter(|(key, value)| b.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();
    fields.extend(b.keys().filter(|key| !a.contains_key(key.as_str())).cloned());
    fields
}
