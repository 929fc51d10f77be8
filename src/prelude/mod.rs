//! Ergonomic layer for credential operations.
//!
//! ```rust
//! use pbkdf2_credential::prelude::*;
//! ```

mod builders;

pub use builders::HasherBuilder;

// Re-export core types for convenience
pub use crate::core::credential::CredentialParts;
pub use crate::core::error::{CredentialError, CredentialResult};
pub use crate::core::hasher::Pbkdf2Hasher;
pub use crate::core::params::HasherConfig;
pub use crate::core::salt::{generate_salt, generate_salt_with};
