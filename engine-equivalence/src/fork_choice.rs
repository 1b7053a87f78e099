use std::fmt::Debug;
use std::marker::PhantomData;

use crate::config::{is_oversized, CheckConfig};
use crate::error::{verdict, CheckError, Divergence, Round};
use crate::model::{ForkChoiceView, WireModel};
use crate::Outcome;

/// Status string the client model writes for statuses it does not recognize.
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

/// Compared values of one fork choice round trip, as read by the reference model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkChoiceSnapshot {
    pub payload_id: Option<Vec<u8>>,
    pub status: String,
    pub latest_valid_hash: Option<Vec<u8>>,
    pub validation_error: Option<String>,
}

impl ForkChoiceSnapshot {
    pub fn capture<V: ForkChoiceView>(view: &V, empty_validation_error_is_absent: bool) -> Self {
        let validation_error = view
            .validation_error()
            .filter(|e| !(empty_validation_error_is_absent && e.is_empty()))
            .map(str::to_owned);

        Self {
            payload_id: view.payload_id().map(<[u8]>::to_vec),
            status: view.status().to_owned(),
            latest_valid_hash: view.latest_valid_hash().map(<[u8]>::to_vec),
            validation_error,
        }
    }
}

/// Differential check of fork choice responses.
///
/// `W` is the reference model, `N` the client model. An input is decoded by
/// both, each decoded value is re-encoded and both encodings are read back by
/// the reference model. The two readings must agree.
pub struct ForkChoiceComparator<W, N> {
    max_input_len: Option<usize>,
    exempt_unknown_status: bool,
    compare_payload_id_on_unknown: bool,
    empty_validation_error_is_absent: bool,
    _models: PhantomData<fn() -> (W, N)>,
}

impl<W, N> ForkChoiceComparator<W, N>
where
    W: WireModel + ForkChoiceView,
    N: WireModel,
{
    pub fn new(cfg: &CheckConfig) -> Self {
        Self {
            max_input_len: cfg.max_input_len,
            exempt_unknown_status: cfg.exempt_unknown_status.unwrap_or(true),
            compare_payload_id_on_unknown: cfg.compare_payload_id_on_unknown.unwrap_or(true),
            empty_validation_error_is_absent: cfg.empty_validation_error_is_absent.unwrap_or(true),
            _models: PhantomData,
        }
    }

    /// Runs one trial on `input`.
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
                log::trace!("both models rejected input: {e}");
                return Ok(Outcome::Rejected);
            }
            (reference, client) => {
                return Err(Divergence::DecodeAgreement {
                    reference: verdict(&reference),
                    client: verdict(&client),
                })
            }
        };

        let (reference_blob, client_blob) = match (reference.encode(), client.encode()) {
            (Ok(reference), Ok(client)) => (reference, client),
            (Err(e), Err(_)) => {
                log::trace!("both models failed to encode: {e}");
                return Ok(Outcome::Rejected);
            }
            (reference, client) => {
                return Err(Divergence::EncodeAgreement {
                    reference: verdict(&reference),
                    client: verdict(&client),
                })
            }
        };

        let from_client = read_back::<W>(&client_blob, Round::ClientReEncoding)?;
        let unknown = self.exempt_unknown_status && from_client.status() == UNKNOWN_STATUS;
        if unknown && !self.compare_payload_id_on_unknown {
            log::trace!("client re-encoding has unknown status, skipping comparison");
            return Ok(Outcome::UnknownStatus);
        }
        let from_reference = read_back::<W>(&reference_blob, Round::ReferenceReEncoding)?;

        let empty_is_absent = self.empty_validation_error_is_absent;
        let client = ForkChoiceSnapshot::capture(&from_client, empty_is_absent);
        let reference = ForkChoiceSnapshot::capture(&from_reference, empty_is_absent);

        ensure_equal("payload id", &client.payload_id, &reference.payload_id, show_bytes)?;
        if unknown {
            log::trace!("client re-encoding has unknown status, skipping payload status");
            return Ok(Outcome::UnknownStatus);
        }
        ensure_equal("status", &client.status, &reference.status, |s| format!("{s:?}"))?;
        ensure_equal(
            "latest valid hash",
            &client.latest_valid_hash,
            &reference.latest_valid_hash,
            show_bytes,
        )?;
        ensure_equal(
            "validation error",
            &client.validation_error,
            &reference.validation_error,
            |e| match e {
                Some(e) => format!("{e:?}"),
                None => "absent".to_owned(),
            },
        )?;

        Ok(Outcome::Equivalent)
    }
}

fn read_back<W: WireModel>(blob: &[u8], round: Round) -> Result<W, Divergence> {
    W::decode(blob).map_err(|e| Divergence::ReDecode {
        round,
        error: e.to_string(),
    })
}

fn ensure_equal<T: PartialEq + Debug>(
    field: &'static str,
    client: &T,
    reference: &T,
    show: impl Fn(&T) -> String,
) -> Result<(), Divergence> {
    if client == reference {
        return Ok(());
    }

    Err(Divergence::RoundTrip {
        field,
        client: show(client),
        reference: show(reference),
    })
}

fn show_bytes(bytes: &Option<Vec<u8>>) -> String {
    match bytes {
        Some(bytes) => format!("0x{}", faster_hex::hex_string(bytes)),
        None => "absent".to_owned(),
    }
}
