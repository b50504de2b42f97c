//! Test vector types for ML-DSA key envelope tests.
//!
//! Full keys run to several kilobytes, so vectors describe payloads by their
//! fixed header bytes and total length; key bytes are a seed plus fill
//! patterns the tests expand.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Header bytes expected at a fixed offset.
#[derive(Debug, Deserialize)]
pub struct HeaderBytes {
    pub offset: usize,
    /// Hex-encoded bytes
    pub hex: String,
}

/// Encode-then-decode vector for one private key layout.
#[derive(Debug, Deserialize)]
pub struct PrivateEncodeVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    pub algorithm: String,
    /// Configuration string used for encoding
    #[serde(rename = "output-formats")]
    pub output_formats: String,
    /// Canonical name of the layout that must be produced and recognized
    pub format: String,
    /// Hex-encoded 32-byte seed
    pub seed: String,
    /// Every byte of the expanded private key
    #[serde(rename = "private-fill")]
    pub private_fill: u8,
    /// Every byte of the public key
    #[serde(rename = "public-fill")]
    pub public_fill: u8,
    pub length: usize,
    pub headers: Vec<HeaderBytes>,
    #[serde(rename = "seed-offset")]
    pub seed_offset: Option<usize>,
    #[serde(rename = "private-offset")]
    pub private_offset: Option<usize>,
    #[serde(rename = "public-offset")]
    pub public_offset: Option<usize>,
}

/// Payload that must be rejected on decode.
#[derive(Debug, Deserialize)]
pub struct PrivateDecodeFailVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    pub algorithm: String,
    /// Hex-encoded algorithm identifier overriding the variant's own
    #[serde(default)]
    pub oid: Option<String>,
    /// Whether the algorithm identifier carries parameters
    #[serde(default)]
    pub parameters: bool,
    #[serde(rename = "input-formats", default)]
    pub input_formats: Option<String>,
    /// Hex-encoded leading payload bytes; the rest is zero
    pub prefix: String,
    pub length: usize,
    /// `bad-encoding`, `no-format-enabled`, `unexpected-parameters` or
    /// `not-this-key-type`
    pub error: String,
}

/// Expected SPKI prefix of a variant.
#[derive(Debug, Deserialize)]
pub struct PublicVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    pub algorithm: String,
    /// Hex-encoded 22-byte prefix
    pub prefix: String,
    pub length: usize,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Builds a payload of `length` bytes starting with `prefix`, zero-filled.
pub fn padded(prefix: &[u8], length: usize) -> Vec<u8> {
    let mut payload = prefix.to_vec();
    payload.resize(length, 0);
    payload
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
