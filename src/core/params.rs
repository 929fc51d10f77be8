//! Default parameters and hasher configuration.
//!
//! Every value that shapes a credential is a named constant here and can be
//! overridden through [`HasherConfig`].

use crate::core::error::{CredentialError, CredentialResult};
use crate::core::format::DELIMITER;

/// Algorithm tag written as the first field of every credential.
pub const ALGORITHM_TAG: &str = "pbkdf2_sha256";

/// Default PBKDF2 work factor.
pub const DEFAULT_ITERATIONS: u32 = 120_000;

/// Default salt length in characters.
pub const DEFAULT_SALT_SIZE: usize = 12;

/// Default derived key length in bytes (SHA-256 output size).
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Default floor applied to iteration counts read back from stored credentials.
///
/// A floor of 1 accepts every positive count, so credentials written by earlier
/// deployments keep verifying.
pub const DEFAULT_MIN_ITERATIONS: u32 = 1;

/// Configuration of a [`Pbkdf2Hasher`](crate::Pbkdf2Hasher).
///
/// # Example
///
/// ```rust
/// use pbkdf2_credential::{HasherConfig, Pbkdf2Hasher};
///
/// let config = HasherConfig {
///     iterations: 310_000,
///     min_iterations: 100_000,
///     ..HasherConfig::default()
/// };
/// let hasher = Pbkdf2Hasher::new(config).expect("valid config");
/// assert_eq!(hasher.config().iterations, 310_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HasherConfig {
    /// PBKDF2 work factor used for new credentials.
    pub iterations: u32,

    /// Salt length in characters for new credentials.
    pub salt_size: usize,

    /// Derived key length in bytes.
    pub key_length: usize,

    /// Format identifier, matched exactly on decode.
    pub algorithm_tag: String,

    /// Lowest iteration count accepted when verifying a stored credential.
    pub min_iterations: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            salt_size: DEFAULT_SALT_SIZE,
            key_length: DEFAULT_KEY_LENGTH,
            algorithm_tag: ALGORITHM_TAG.to_owned(),
            min_iterations: DEFAULT_MIN_ITERATIONS,
        }
    }
}

impl HasherConfig {
    /// Checks that the configuration can produce and read credentials.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidArgument` if a count or length is zero,
    /// if `min_iterations` exceeds `iterations`, or if the algorithm tag is
    /// empty, contains the `$` delimiter, or is not printable ASCII.
    pub fn validate(&self) -> CredentialResult<()> {
        if self.iterations == 0 {
            return Err(CredentialError::InvalidArgument(
                "iterations must be positive",
            ));
        }

        if self.salt_size == 0 {
            return Err(CredentialError::InvalidArgument(
                "salt size must be positive",
            ));
        }

        if self.key_length == 0 {
            return Err(CredentialError::InvalidArgument(
                "key length must be positive",
            ));
        }

        if self.min_iterations == 0 || self.min_iterations > self.iterations {
            return Err(CredentialError::InvalidArgument(
                "minimum iterations must be between 1 and iterations",
            ));
        }

        if self.algorithm_tag.is_empty()
            || self.algorithm_tag.contains(DELIMITER)
            || !self.algorithm_tag.bytes().all(|b| b.is_ascii_graphic())
        {
            return Err(CredentialError::InvalidArgument(
                "algorithm tag must be non-empty printable ASCII without '$'",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HasherConfig::default();
        assert_eq!(config.iterations, 120_000);
        assert_eq!(config.salt_size, 12);
        assert_eq!(config.key_length, 32);
        assert_eq!(config.algorithm_tag, "pbkdf2_sha256");
        assert_eq!(config.min_iterations, 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = HasherConfig {
            iterations: 0,
            ..HasherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CredentialError::InvalidArgument(_))
        ));

        let config = HasherConfig {
            salt_size: 0,
            ..HasherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CredentialError::InvalidArgument(_))
        ));

        let config = HasherConfig {
            key_length: 0,
            ..HasherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CredentialError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_min_iterations_bounds() {
        let config = HasherConfig {
            iterations: 1_000,
            min_iterations: 1_001,
            ..HasherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CredentialError::InvalidArgument(_))
        ));

        let config = HasherConfig {
            iterations: 1_000,
            min_iterations: 1_000,
            ..HasherConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_algorithm_tag() {
        for tag in ["", "pbkdf2$sha256", "pbkdf2 sha256", "pbkdf2_sha256\n"] {
            let config = HasherConfig {
                algorithm_tag: tag.to_owned(),
                ..HasherConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(CredentialError::InvalidArgument(_))),
                "tag {tag:?} should be rejected"
            );
        }

        let config = HasherConfig {
            algorithm_tag: "pbkdf2_sha256_v2".to_owned(),
            ..HasherConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() -> Result<(), serde_json::Error> {
        let config: HasherConfig = serde_json::from_str(r#"{"iterations": 600000}"#)?;
        assert_eq!(config.iterations, 600_000);
        assert_eq!(config.salt_size, DEFAULT_SALT_SIZE);
        assert_eq!(config.algorithm_tag, ALGORITHM_TAG);
        Ok(())
    }
}
