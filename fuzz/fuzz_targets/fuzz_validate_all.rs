#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        for scheme in idnum::registry::all() {
            let _ = (scheme.compact)(s);
            let _ = (scheme.validate)(s);
            let _ = (scheme.format)(s);
        }
        let _ = idnum::registry::guess(s);
    }
});
