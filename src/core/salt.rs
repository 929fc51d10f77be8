//! Salt generation.
//!
//! Salts are printable tokens drawn uniformly from the 62-symbol alphabet
//! `a-z`, `A-Z`, `0-9`, which never contains the `$` delimiter. Only
//! cryptographically secure generators are accepted.

use rand::distr::{Alphanumeric, SampleString};
use rand::CryptoRng;

use crate::core::error::{CredentialError, CredentialResult};

/// Generates a salt of `length` characters using the thread-local CSPRNG.
///
/// # Errors
///
/// Returns `CredentialError::InvalidArgument` if `length` is zero.
///
/// # Example
///
/// ```rust
/// use pbkdf2_credential::generate_salt;
///
/// let salt = generate_salt(12).expect("positive length");
/// assert_eq!(salt.len(), 12);
/// assert!(salt.bytes().all(|b| b.is_ascii_alphanumeric()));
/// ```
pub fn generate_salt(length: usize) -> CredentialResult<String> {
    generate_salt_with(&mut rand::rng(), length)
}

/// Generates a salt of `length` characters from the given random source.
///
/// # Errors
///
/// Returns `CredentialError::InvalidArgument` if `length` is zero.
pub fn generate_salt_with<R: CryptoRng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> CredentialResult<String> {
    if length == 0 {
        return Err(CredentialError::InvalidArgument(
            "salt length must be positive",
        ));
    }

    Ok(Alphanumeric.sample_string(rng, length))
}

/// Returns true if every character of `salt` belongs to the salt alphabet.
///
/// Salts outside the alphabet still verify; they only mark a credential for
/// re-encoding.
#[must_use]
pub fn is_salt_alphabet(salt: &str) -> bool {
    salt.bytes().all(|b| b.is_ascii_alphanumeric())
}
