//! Self-describing PBKDF2-HMAC-SHA256 password credentials.
//!
//! A credential is a single string that carries everything needed to check a
//! password later, without storing the password itself:
//!
//! ```text
//! pbkdf2_sha256$120000$AbC123xyz789$5Y/nr5TnM0eoDjR74fJgDZ3uJel5BhOdgGQQEewBHOA=
//! ```
//!
//! | Field | Content |
//! |-------|---------|
//! | algorithm | `pbkdf2_sha256`, matched exactly |
//! | iterations | PBKDF2 work factor, canonical decimal |
//! | salt | 12 characters from `a-z A-Z 0-9` |
//! | hash | 32-byte derived key, standard base64 with padding |
//!
//! # Quick Start
//!
//! ```rust
//! use pbkdf2_credential::Pbkdf2Hasher;
//!
//! let hasher = Pbkdf2Hasher::default();
//!
//! let encoded = hasher.encode_default("testpwd").expect("encode should succeed");
//!
//! assert!(hasher.verify("testpwd", &encoded).expect("well-formed"));
//! assert!(!hasher.verify("wrongPwd", &encoded).expect("well-formed"));
//! ```
//!
//! A wrong password is `Ok(false)`. Errors are reserved for credentials that
//! cannot be interpreted, see [`CredentialError`].
//!
//! # Features
//!
//! - `prelude` (default) - [`prelude`] module with the [`HasherBuilder`](prelude::HasherBuilder)
//! - `serde` - `Serialize`/`Deserialize` for [`HasherConfig`]
//!
//! # Security
//!
//! - Salts come from a CSPRNG, or from any caller-supplied `CryptoRng`
//! - Derived keys are compared in constant time and zeroized on drop
//! - Debug output redacts the stored hash
//! - No unsafe code
//!
//! # Logging
//!
//! Encode and verify emit `debug` events through [`tracing`] with the
//! iteration count and outcome only. No subscriber is installed by this crate.

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::credential::CredentialParts;
pub use crate::core::error::{CredentialError, CredentialResult};
pub use crate::core::hasher::Pbkdf2Hasher;
pub use crate::core::params::{
    HasherConfig, ALGORITHM_TAG, DEFAULT_ITERATIONS, DEFAULT_KEY_LENGTH, DEFAULT_MIN_ITERATIONS,
    DEFAULT_SALT_SIZE,
};
pub use crate::core::salt::{generate_salt, generate_salt_with};
