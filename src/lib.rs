//! Multi-format key material codec for ML-DSA (FIPS 204).
//!
//! ML-DSA private keys have been stored in several incompatible PKCS#8
//! payload layouts over the standard's drafts: seed and expanded key
//! together, either one alone, with or without their own DER headers, and a
//! legacy layout that appends the public key. None of them is
//! self-describing. This crate recognizes every layout from its exact length
//! and leading tag bytes, validates each field offset, and writes any of them
//! back out under a caller-chosen preference order. Public keys are handled
//! as `SubjectPublicKeyInfo` envelopes.
//!
//! # Quick Start
//!
//! ```rust
//! use mldsa_keyfmt::core::config::CodecConfig;
//! use mldsa_keyfmt::core::types::MlDsaPrivateKey;
//! use mldsa_keyfmt::core::variant::MlDsa65;
//!
//! let seed = [0x11u8; 32];
//! let expanded = vec![0x22u8; 4032];
//! let key = MlDsaPrivateKey::<MlDsa65>::with_seed_and_expanded(seed, &expanded)?;
//!
//! // Write the standard seed + expanded key layout.
//! let payload = key.to_pkcs8_payload(&CodecConfig::default())?;
//! assert_eq!(payload.len(), 0x0fea);
//!
//! // Read it back, accepting only that layout.
//! let config = CodecConfig::default().with_input_formats("seed-priv");
//! let parsed = MlDsaPrivateKey::<MlDsa65>::from_pkcs8_payload(&payload, &config)?;
//! assert_eq!(parsed, key);
//! # Ok::<(), mldsa_keyfmt::CodecError>(())
//! ```
//!
//! # Private Key Layouts
//!
//! | Name | Alias | Content |
//! |------|-------|---------|
//! | `seed-priv` | | `SEQUENCE { OCTET STRING seed, OCTET STRING key }` |
//! | `priv-only` | | `OCTET STRING key` |
//! | `legacy-combined` | `oqskeypair` | `OCTET STRING (key ‖ public key)` |
//! | `seed-only` | | `[0] IMPLICIT seed` |
//! | `bare-priv` | | raw expanded key |
//! | `bare-seed` | | raw seed |
//!
//! # Configuration
//!
//! Every call takes a [`CodecConfig`]. `input-formats` and `output-formats`
//! are lists of layout names separated by spaces, tabs or commas; the first
//! listed layout has the highest priority and unknown names are ignored. A
//! name may be abbreviated to any prefix, e.g. `seed` for `seed-priv`.
//!
//! # Features
//!
//! - `serde` - (de)serialize [`CodecConfig`] with the kebab-case key names
//! - `prelude` - the [`prelude`] module of convenient imports
//!
//! # Security
//!
//! - Key material is zeroized on drop
//! - Debug output redacts sensitive key material
//! - Constant-time comparison for private keys
//! - Key bytes are never logged
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use self::core::config::{CodecConfig, SeedPolicy};
pub use self::core::error::{CodecError, CodecResult};
pub use self::core::params::{AlgorithmId, ParameterSet};
pub use self::core::types::{MlDsaPrivateKey, MlDsaPublicKey};
pub use self::core::variant::{MlDsa44, MlDsa65, MlDsa87, MlDsaVariant};

/// Variant-specific type aliases.
pub mod types {
    use super::core::types;
    use super::core::variant::{MlDsa44, MlDsa65, MlDsa87};

    /// ML-DSA-44 private key.
    pub type MlDsa44PrivateKey = types::MlDsaPrivateKey<MlDsa44>;
    /// ML-DSA-44 public key.
    pub type MlDsa44PublicKey = types::MlDsaPublicKey<MlDsa44>;
    /// ML-DSA-65 private key.
    pub type MlDsa65PrivateKey = types::MlDsaPrivateKey<MlDsa65>;
    /// ML-DSA-65 public key.
    pub type MlDsa65PublicKey = types::MlDsaPublicKey<MlDsa65>;
    /// ML-DSA-87 private key.
    pub type MlDsa87PrivateKey = types::MlDsaPrivateKey<MlDsa87>;
    /// ML-DSA-87 public key.
    pub type MlDsa87PublicKey = types::MlDsaPublicKey<MlDsa87>;
}
