#![no_main]

use engine_equivalence::{CheckConfig, EngineForkChoiceComparator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let cmp = EngineForkChoiceComparator::new(&CheckConfig::default());

    if let Err(e) = cmp.check(data) {
        panic!("{e}");
    }
});
