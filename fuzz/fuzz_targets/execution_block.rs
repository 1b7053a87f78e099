#![no_main]

use engine_equivalence::{CheckConfig, EngineBlockComparator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let cmp = EngineBlockComparator::new(&CheckConfig::default());

    if let Err(e) = cmp.check(data) {
        panic!("{e}");
    }
});
