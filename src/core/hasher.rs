//! `Pbkdf2Hasher` - encode, decode and verify password credentials.
//!
//! Format: `{algorithm}${iterations}${salt}${base64(PBKDF2-HMAC-SHA256(password, salt))}`

use base64::prelude::*;
use rand::CryptoRng;
use zeroize::Zeroizing;

use crate::core::credential::CredentialParts;
use crate::core::error::{CredentialError, CredentialResult};
use crate::core::format::{is_canonical_iterations, make_credential, DELIMITER};
use crate::core::kdf::{derive_key, keys_match};
use crate::core::params::HasherConfig;
use crate::core::salt::{generate_salt_with, is_salt_alphabet};

/// Produces and checks PBKDF2-HMAC-SHA256 password credentials.
///
/// The hasher only holds its configuration, so one instance can be shared
/// across threads. Salts come from the thread-local CSPRNG unless a source is
/// passed explicitly.
///
/// # Example
///
/// ```rust
/// use pbkdf2_credential::Pbkdf2Hasher;
///
/// let hasher = Pbkdf2Hasher::default();
///
/// let encoded = hasher.encode_default("testpwd").expect("encode should succeed");
/// assert!(encoded.starts_with("pbkdf2_sha256$120000$"));
///
/// assert!(hasher.verify("testpwd", &encoded).expect("well-formed"));
/// assert!(!hasher.verify("wrongPwd", &encoded).expect("well-formed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pbkdf2Hasher {
    config: HasherConfig,
}

impl Pbkdf2Hasher {
    /// Creates a hasher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidArgument` if the configuration fails
    /// [`HasherConfig::validate`].
    pub fn new(config: HasherConfig) -> CredentialResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Encodes a password with a fresh salt and the configured iteration count.
    ///
    /// # Errors
    ///
    /// Returns an error if key derivation fails.
    pub fn encode_default(&self, password: impl AsRef<[u8]>) -> CredentialResult<String> {
        self.encode_default_with_rng(&mut rand::rng(), password)
    }

    /// Like [`Pbkdf2Hasher::encode_default`], drawing the salt from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if key derivation fails.
    pub fn encode_default_with_rng<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        password: impl AsRef<[u8]>,
    ) -> CredentialResult<String> {
        let salt = generate_salt_with(rng, self.config.salt_size)?;
        self.encode(password, &salt, self.config.iterations)
    }

    /// Encodes a password with a caller-supplied salt and iteration count.
    ///
    /// The result is a pure function of its arguments and the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidArgument` if `iterations` is zero or the
    /// salt is empty or contains the `$` delimiter.
    pub fn encode(
        &self,
        password: impl AsRef<[u8]>,
        salt: &str,
        iterations: u32,
    ) -> CredentialResult<String> {
        if salt.is_empty() {
            return Err(CredentialError::InvalidArgument("salt must not be empty"));
        }

        if salt.contains(DELIMITER) {
            return Err(CredentialError::InvalidArgument(
                "salt must not contain '$'",
            ));
        }

        let key = derive_key(
            password.as_ref(),
            salt.as_bytes(),
            iterations,
            self.config.key_length,
        )?;
        let hash = BASE64_STANDARD.encode(&*key);

        tracing::debug!(iterations, salt_len = salt.len(), "encoded credential");

        Ok(make_credential(
            &self.config.algorithm_tag,
            iterations,
            salt,
            &hash,
        ))
    }

    /// Splits a credential into its fields.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidFormat` if the string does not have
    /// exactly four fields and `CredentialError::InvalidAlgorithm` if the tag is
    /// not the configured one.
    pub fn decode<'a>(&self, encoded: &'a str) -> CredentialResult<CredentialParts<'a>> {
        CredentialParts::parse(encoded, &self.config.algorithm_tag)
    }

    /// Checks a candidate password against a stored credential.
    ///
    /// Returns `Ok(false)` when the password does not match. The derived keys
    /// are compared in constant time. A numeric iteration field with a sign or
    /// leading zeros is never written by [`Pbkdf2Hasher::encode`], so it is a
    /// mismatch rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidFormat`, `CredentialError::InvalidAlgorithm`
    /// or `CredentialError::InvalidIterations` if the credential is malformed,
    /// and `CredentialError::WeakIterations` if its iteration count is below
    /// the configured minimum.
    pub fn verify(&self, password: impl AsRef<[u8]>, encoded: &str) -> CredentialResult<bool> {
        let parts = self.decode(encoded)?;
        let iterations = self.checked_iterations(&parts)?;

        if !is_canonical_iterations(parts.iterations, iterations) {
            tracing::debug!(iterations, matched = false, "iteration field is not canonical");
            return Ok(false);
        }

        // Non-canonical base64 can never be produced by `encode`.
        let Ok(stored) = BASE64_STANDARD.decode(parts.hash).map(Zeroizing::new) else {
            tracing::debug!(iterations, matched = false, "stored hash is not valid base64");
            return Ok(false);
        };

        let candidate = derive_key(
            password.as_ref(),
            parts.salt.as_bytes(),
            iterations,
            self.config.key_length,
        )?;
        let matched = keys_match(&candidate, &stored);

        tracing::debug!(iterations, matched, "verified credential");

        Ok(matched)
    }

    /// Reports whether a stored credential should be re-encoded with the
    /// current configuration.
    ///
    /// True when the iteration count differs from the configured one or is
    /// not written canonically, when the salt is shorter than the configured
    /// size or uses characters outside `a-z A-Z 0-9`, or when the stored key
    /// does not have the configured length.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Pbkdf2Hasher::verify`] for malformed
    /// credentials.
    pub fn needs_rehash(&self, encoded: &str) -> CredentialResult<bool> {
        let parts = self.decode(encoded)?;
        let iterations = self.checked_iterations(&parts)?;

        let key_len = BASE64_STANDARD
            .decode(parts.hash)
            .map(|key| Zeroizing::new(key).len())
            .ok();

        Ok(iterations != self.config.iterations
            || !is_canonical_iterations(parts.iterations, iterations)
            || parts.salt.len() < self.config.salt_size
            || !is_salt_alphabet(parts.salt)
            || key_len != Some(self.config.key_length))
    }

    fn checked_iterations(&self, parts: &CredentialParts<'_>) -> CredentialResult<u32> {
        let iterations = parts.parse_iterations()?;

        if iterations < self.config.min_iterations {
            return Err(CredentialError::WeakIterations {
                found: iterations,
                minimum: self.config.min_iterations,
            });
        }

        Ok(iterations)
    }
}
