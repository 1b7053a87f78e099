#![no_main]

use engine_equivalence::{CheckConfig, EngineForkChoiceComparator, Outcome};
use engine_format::ForkchoiceUpdatedResponse;
use libfuzzer_sys::fuzz_target;

// Anything the client model writes must be read the same way by the reference model.
fuzz_target!(|data: ForkchoiceUpdatedResponse| {
    let json = serde_json::to_vec(&data).unwrap();

    let cmp = EngineForkChoiceComparator::new(&CheckConfig::default());
    match cmp.check(&json) {
        Ok(Outcome::Equivalent | Outcome::UnknownStatus) => {}
        Ok(outcome) => panic!("client encoding was not accepted: {outcome:?}"),
        Err(e) => panic!("{e}"),
    }
});
