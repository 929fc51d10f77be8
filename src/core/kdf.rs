//! PBKDF2-HMAC-SHA256 key derivation and derived-key comparison.

use hmac::Hmac;
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::core::error::{CredentialError, CredentialResult};

/// Derives `key_length` bytes from a password and salt using PBKDF2-HMAC-SHA256.
///
/// The returned buffer is wiped when dropped.
///
/// # Errors
///
/// Returns `CredentialError::InvalidArgument` if `iterations` or `key_length`
/// is zero, and `CredentialError::KeyDerivationFailed` if the HMAC cannot be
/// keyed with the password.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
) -> CredentialResult<Zeroizing<Vec<u8>>> {
    if iterations == 0 {
        return Err(CredentialError::InvalidArgument(
            "iterations must be positive",
        ));
    }

    if key_length == 0 {
        return Err(CredentialError::InvalidArgument(
            "key length must be positive",
        ));
    }

    let mut key = Zeroizing::new(vec![0u8; key_length]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key)
        .map_err(|_| CredentialError::KeyDerivationFailed)?;

    Ok(key)
}

/// Compares a freshly derived key against a stored one in constant time.
///
/// Every byte of `expected` is examined even when `stored` has a different
/// length, so the running time depends only on `expected.len()`.
#[must_use]
pub fn keys_match(expected: &[u8], stored: &[u8]) -> bool {
    let same_len = (expected.len() as u64).ct_eq(&(stored.len() as u64));

    let same_bytes = expected
        .iter()
        .enumerate()
        .fold(Choice::from(1), |acc, (i, byte)| {
            acc & byte.ct_eq(&stored.get(i).copied().unwrap_or(0))
        });

    (same_len & same_bytes).into()
}
