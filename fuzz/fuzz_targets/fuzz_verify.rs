#![no_main]

use libfuzzer_sys::fuzz_target;
use pbkdf2_credential::Pbkdf2Hasher;

// Larger counts only slow each run down without reaching new code.
const MAX_FUZZ_ITERATIONS: u32 = 64;

fuzz_target!(|data: &str| {
    // Verifying arbitrary input should never panic
    let hasher = Pbkdf2Hasher::default();
    let cheap = hasher
        .decode(data)
        .and_then(|parts| parts.parse_iterations())
        .map_or(true, |iterations| iterations <= MAX_FUZZ_ITERATIONS);

    if cheap {
        let _ = hasher.verify("password", data);
        let _ = hasher.needs_rehash(data);
    }
});
