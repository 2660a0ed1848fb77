#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // validate → format must not panic, and a validated IBAN must
        // survive its own formatting.
        if let Ok(canonical) = idnum::iban::validate(s) {
            let formatted = idnum::iban::format(&canonical);
            assert_eq!(idnum::iban::validate(&formatted).as_deref(), Ok(canonical.as_str()));
        } else {
            let _ = idnum::iban::format(s);
        }
    }
});
