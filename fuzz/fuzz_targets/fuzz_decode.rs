#![no_main]

use libfuzzer_sys::fuzz_target;
use pbkdf2_credential::core::format::parse_iterations;
use pbkdf2_credential::Pbkdf2Hasher;

fuzz_target!(|data: &str| {
    // Decoding arbitrary input should never panic
    let hasher = Pbkdf2Hasher::default();
    if let Ok(parts) = hasher.decode(data) {
        let _ = parts.parse_iterations();
        assert_eq!(parts.to_string(), data);
    }
    let _ = parse_iterations(data);
});
