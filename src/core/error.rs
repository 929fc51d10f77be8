//! Error types for credential operations.
//!
//! A wrong password is not an error: [`verify`](crate::Pbkdf2Hasher::verify)
//! returns `Ok(false)` for a mismatch. The variants here cover credentials that
//! cannot be interpreted at all and arguments that can never produce one.
//! Messages never carry password or key material.

use thiserror::Error;

/// Errors that can occur when encoding, decoding or verifying credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The credential does not split into exactly four `$`-separated fields.
    #[error("Credential format can not be parsed")]
    InvalidFormat,

    /// The algorithm field does not match the configured tag.
    ///
    /// Reported separately from [`CredentialError::InvalidFormat`] so callers
    /// can route credentials from another scheme to a legacy or migration path.
    #[error("Invalid hash algorithm")]
    InvalidAlgorithm,

    /// The iteration field is not a canonical positive decimal integer.
    #[error("Invalid iteration count")]
    InvalidIterations,

    /// The stored iteration count is below the configured minimum.
    #[error("Iteration count {found} is below the minimum of {minimum}")]
    WeakIterations {
        /// Iteration count embedded in the credential.
        found: u32,
        /// Configured floor.
        minimum: u32,
    },

    /// A caller-supplied argument can never yield a valid credential.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The PBKDF2 pseudorandom function could not be initialized.
    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

/// Result type alias for credential operations.
pub type CredentialResult<T> = Result<T, CredentialError>;
