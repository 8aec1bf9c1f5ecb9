#![no_main]

use envelope_core::validate;
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must never panic, and the verdict must not depend on
// anything but the input.
fuzz_target!(|data: &[u8]| {
    for force in [false, true] {
        let first = validate(data, force);
        assert_eq!(first, validate(data, force));
    }
});
