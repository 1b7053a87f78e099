#![no_main]

use engine_equivalence::{CheckConfig, EngineHeaderComparator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let cmp = EngineHeaderComparator::new(&CheckConfig::default());

    if let Err(e) = cmp.check(data) {
        panic!("{e}");
    }
});
