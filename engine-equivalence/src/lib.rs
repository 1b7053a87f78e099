//! # Engine Equivalence
//!
//! Differential checks of two independently written json codecs for the
//! engine api: a reference model, as an execution client would write it, and
//! a client model, as a consensus client reads it. Any input both accept must
//! produce the same values after a round trip through either encoder.
//!
//! ## Example
//!
//! ```
//! use engine_equivalence::{seed, CheckConfig, EngineForkChoiceComparator, Outcome};
//!
//! let cmp = EngineForkChoiceComparator::new(&CheckConfig::default());
//! let outcome = cmp.check(&seed::fork_choice_seed()?)?;
//!
//! assert_eq!(outcome, Outcome::Equivalent);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod block;
mod config;
mod error;
mod fork_choice;
mod header;
pub mod model;
mod outcome;
pub mod seed;
pub mod structure;
pub mod tx_hash;

pub use block::ExecutionBlockComparator;
pub use config::{CheckConfig, TxHashPolicy};
pub use error::{CheckError, Divergence, Finding, Round, SchemaError, StructureError};
pub use fork_choice::{ForkChoiceComparator, ForkChoiceSnapshot, UNKNOWN_STATUS};
pub use header::HeaderComparator;
pub use outcome::Outcome;

/// Fork choice comparator over the shipped models.
pub type EngineForkChoiceComparator = ForkChoiceComparator<
    engine_reference::ForkChoiceResponse,
    engine_format::ForkchoiceUpdatedResponse,
>;

/// Header comparator over the shipped models.
///
/// Both sides read the bare header, so block envelope keys such as `hash` or
/// `transactions` are ignored by either model.
pub type EngineHeaderComparator =
    HeaderComparator<engine_reference::Header, engine_format::ExecutionHeader>;

/// Block comparator over the shipped models. The header part is checked with
/// an [`EngineHeaderComparator`].
pub type EngineBlockComparator =
    ExecutionBlockComparator<engine_reference::Header, engine_format::ExecutionBlock>;
