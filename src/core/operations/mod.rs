//! Encoding and decoding of ML-DSA key envelopes.
//!
//! - [`public_key`] - `SubjectPublicKeyInfo` prefix match and wrap
//! - [`private_key`] - PKCS#8 private key payload layouts

pub mod private_key;
pub mod public_key;
