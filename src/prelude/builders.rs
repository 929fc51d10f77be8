//! Builder for configuring a [`Pbkdf2Hasher`].
//!
//! # Example
//!
//! ```rust
//! use pbkdf2_credential::prelude::*;
//!
//! let hasher = HasherBuilder::new()
//!     .iterations(310_000)
//!     .salt_size(16)
//!     .min_iterations(100_000)
//!     .try_build()
//!     .expect("valid configuration");
//!
//! assert_eq!(hasher.config().salt_size, 16);
//! ```

use crate::core::error::CredentialResult;
use crate::core::hasher::Pbkdf2Hasher;
use crate::core::params::HasherConfig;

/// Fluent builder for [`Pbkdf2Hasher`].
///
/// Starts from the defaults in [`HasherConfig::default`]. Values are checked
/// once, in [`HasherBuilder::try_build`].
#[derive(Debug, Clone, Default)]
pub struct HasherBuilder {
    config: HasherConfig,
}

impl HasherBuilder {
    /// Creates a builder with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    #[must_use]
    pub fn from_config(config: HasherConfig) -> Self {
        Self { config }
    }

    /// Sets the PBKDF2 work factor for new credentials.
    #[must_use]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets the salt length in characters.
    #[must_use]
    pub fn salt_size(mut self, salt_size: usize) -> Self {
        self.config.salt_size = salt_size;
        self
    }

    /// Sets the derived key length in bytes.
    #[must_use]
    pub fn key_length(mut self, key_length: usize) -> Self {
        self.config.key_length = key_length;
        self
    }

    /// Sets the algorithm tag written to and expected from credentials.
    #[must_use]
    pub fn algorithm_tag(mut self, algorithm_tag: impl Into<String>) -> Self {
        self.config.algorithm_tag = algorithm_tag.into();
        self
    }

    /// Sets the lowest iteration count accepted from stored credentials.
    #[must_use]
    pub fn min_iterations(mut self, min_iterations: u32) -> Self {
        self.config.min_iterations = min_iterations;
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub const fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Validates the configuration and creates the hasher.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidArgument` if the configuration is invalid.
    pub fn try_build(self) -> CredentialResult<Pbkdf2Hasher> {
        Pbkdf2Hasher::new(self.config)
    }
}
