#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The alphanumeric-key and prefix-stripping paths must not panic
        // on any input, multibyte included.
        let _ = idnum::fr::tva::validate(s);
        let _ = idnum::fr::tva::format(s);
    }
});
