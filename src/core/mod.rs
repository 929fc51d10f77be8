//! Core credential types and operations.
//!
//! - [`params`] - Default parameters and [`HasherConfig`](params::HasherConfig)
//! - [`error`] - Error types for credential operations
//! - [`format`] - Splitting and joining of the `$`-delimited format
//! - [`credential`] - The typed [`CredentialParts`](credential::CredentialParts) record
//! - [`salt`] - Salt generation
//! - [`kdf`] - PBKDF2-HMAC-SHA256 derivation and key comparison
//! - [`hasher`] - [`Pbkdf2Hasher`](hasher::Pbkdf2Hasher), tying it together

pub mod credential;
pub mod error;
pub mod format;
pub mod hasher;
pub mod kdf;
pub mod params;
pub mod salt;

// Re-export commonly used items
pub use credential::CredentialParts;
pub use error::{CredentialError, CredentialResult};
pub use hasher::Pbkdf2Hasher;
pub use params::HasherConfig;
