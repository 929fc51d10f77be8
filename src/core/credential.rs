//! `CredentialParts` - the decoded fields of a credential string.

use core::fmt::{self, Debug, Display};

use crate::core::error::CredentialResult;
use crate::core::format::{parse_iterations, validate_algorithm, DELIMITER};

/// The four fields of a credential, borrowed from the encoded string.
///
/// Fields are returned exactly as stored. The iteration count stays a string
/// until [`CredentialParts::parse_iterations`] is called.
///
/// # Example
///
/// ```rust
/// use pbkdf2_credential::CredentialParts;
///
/// let encoded = "pbkdf2_sha256$120000$AbC123xyz789$5Y/nr5TnM0eoDjR74fJgDZ3uJel5BhOdgGQQEewBHOA=";
/// let parts = CredentialParts::parse(encoded, "pbkdf2_sha256").expect("well-formed");
///
/// assert_eq!(parts.iterations, "120000");
/// assert_eq!(parts.salt, "AbC123xyz789");
/// assert_eq!(parts.to_string(), encoded);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CredentialParts<'a> {
    /// Algorithm tag.
    pub algorithm: &'a str,
    /// Decimal iteration count, unparsed.
    pub iterations: &'a str,
    /// Salt characters.
    pub salt: &'a str,
    /// Base64 encoding of the derived key.
    pub hash: &'a str,
}

impl<'a> CredentialParts<'a> {
    /// Splits `encoded` and checks its algorithm tag against `expected_tag`.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidFormat` if the string does not have
    /// exactly four fields and `CredentialError::InvalidAlgorithm` if the first
    /// field is not `expected_tag`.
    pub fn parse(encoded: &'a str, expected_tag: &str) -> CredentialResult<Self> {
        let [algorithm, iterations, salt, hash] = validate_algorithm(encoded, expected_tag)?;

        Ok(Self {
            algorithm,
            iterations,
            salt,
            hash,
        })
    }

    /// Parses the iteration field.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidIterations` if the field is not a
    /// positive decimal integer.
    pub fn parse_iterations(&self) -> CredentialResult<u32> {
        parse_iterations(self.iterations)
    }
}

impl Display for CredentialParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.algorithm, self.iterations, self.salt, self.hash
        )
    }
}

impl Debug for CredentialParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialParts")
            .field("algorithm", &self.algorithm)
            .field("iterations", &self.iterations)
            .field("salt_len", &self.salt.len())
            .field("hash", &"[REDACTED]")
            .finish()
    }
}
