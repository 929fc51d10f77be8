//! Test vector types for credential tests.
//!
//! Success vectors were generated independently of this crate and pin the
//! exact string format, so stored credentials stay readable across releases.

// Some fields are only read by a subset of the tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Error class a failing vector must produce.
///
/// `Mismatch` is not an error: `verify` must return `Ok(false)` even for the
/// password the stored key was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedError {
    Format,
    Algorithm,
    Iterations,
    Mismatch,
}

/// Test vector for a `pbkdf2_sha256` credential.
#[derive(Debug, Deserialize)]
pub struct CredentialTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Plaintext password (null for fail tests)
    pub password: Option<String>,
    /// Salt characters (null for fail tests)
    pub salt: Option<String>,
    /// Iteration count (null for fail tests)
    pub iterations: Option<u32>,
    /// Derived key length in bytes, 32 when absent
    #[serde(rename = "key-length", default)]
    pub key_length: Option<usize>,
    /// Encoded credential string
    pub encoded: String,
    /// Expected error class (fail tests only)
    #[serde(default)]
    pub error: Option<ExpectedError>,
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
