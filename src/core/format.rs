//! Parsing and generation of the credential string format.
//!
//! Credentials follow the format: `{algorithm}${iterations}${salt}${hash}`
//! where `hash` is the standard, padded base64 encoding of the derived key.

use crate::core::error::{CredentialError, CredentialResult};

/// Field separator. No valid field value may contain it.
pub const DELIMITER: char = '$';

/// Number of fields in a well-formed credential.
pub const FIELD_COUNT: usize = 4;

/// Splits a credential string into its four raw fields.
///
/// # Errors
///
/// Returns `CredentialError::InvalidFormat` if the string does not have exactly
/// four `$`-separated fields.
pub fn split_fields(encoded: &str) -> CredentialResult<[&str; FIELD_COUNT]> {
    let mut parts = encoded.split(DELIMITER);

    let fields = [parts.next(), parts.next(), parts.next(), parts.next()];
    if parts.next().is_some() {
        return Err(CredentialError::InvalidFormat);
    }

    match fields {
        [Some(algorithm), Some(iterations), Some(salt), Some(hash)] => {
            Ok([algorithm, iterations, salt, hash])
        }
        _ => Err(CredentialError::InvalidFormat),
    }
}

/// Validates that a credential carries the expected algorithm tag.
///
/// # Returns
///
/// All four fields, unmodified.
///
/// # Errors
///
/// Returns `CredentialError::InvalidFormat` if the field count is wrong and
/// `CredentialError::InvalidAlgorithm` if the tag does not match exactly.
pub fn validate_algorithm<'a>(
    encoded: &'a str,
    expected_tag: &str,
) -> CredentialResult<[&'a str; FIELD_COUNT]> {
    let fields = split_fields(encoded)?;

    if fields[0] != expected_tag {
        return Err(CredentialError::InvalidAlgorithm);
    }

    Ok(fields)
}

/// Parses an iteration field as a positive decimal integer.
///
/// A leading `+` and leading zeros are tolerated, matching what a plain
/// decimal parse accepts. Use [`is_canonical_iterations`] to tell whether the
/// field is the rendering [`make_credential`] writes.
///
/// # Errors
///
/// Returns `CredentialError::InvalidIterations` if the field is not numeric,
/// is negative or zero, or does not fit in `u32`.
pub fn parse_iterations(field: &str) -> CredentialResult<u32> {
    match field.parse::<u32>() {
        Ok(0) | Err(_) => Err(CredentialError::InvalidIterations),
        Ok(iterations) => Ok(iterations),
    }
}

/// Returns true if `field` is exactly how [`make_credential`] renders
/// `iterations`: no sign and no leading zeros.
#[must_use]
pub fn is_canonical_iterations(field: &str, iterations: u32) -> bool {
    field == iterations.to_string()
}

/// Constructs a credential string from already-encoded fields.
#[must_use]
pub fn make_credential(algorithm: &str, iterations: u32, salt: &str, hash: &str) -> String {
    format!("{algorithm}{DELIMITER}{iterations}{DELIMITER}{salt}{DELIMITER}{hash}")
}
