//! Builder patterns for key codec operations.
//!
//! This module provides a fluent builder over [`CodecConfig`] with preset
//! output profiles, bound to one variant so decode and encode calls need no
//! further type annotations.
//!
//! # Output Profiles
//!
//! | Profile | Output formats | Seed kept on decode |
//! |---------|----------------|---------------------|
//! | `standard()` | `seed-priv`, then `priv-only` | yes |
//! | `seed_only()` | `seed-only`, then `priv-only` | yes |
//! | `expanded_only()` | `priv-only` | no |
//!
//! All profiles accept every input layout.
//!
//! # Example
//!
//! ```rust
//! use mldsa_keyfmt::prelude::*;
//!
//! let key = MlDsaPrivateKey::<MlDsa44>::with_seed_and_expanded([0x42u8; 32], &[1u8; 2560])
//!     .expect("sized key");
//!
//! let payload = KeyCodecBuilder::<MlDsa44>::seed_only()
//!     .encode(&key)
//!     .expect("encode should succeed");
//! assert_eq!(payload.len(), 34);
//!
//! let parsed = KeyCodecBuilder::<MlDsa44>::new()
//!     .input_formats("seed-only")
//!     .decode(&payload)
//!     .expect("decode should succeed");
//! assert_eq!(parsed.seed(), key.seed());
//! ```

use core::marker::PhantomData;

use zeroize::Zeroizing;

use crate::core::config::CodecConfig;
use crate::core::error::CodecResult;
use crate::core::types::MlDsaPrivateKey;
use crate::core::variant::MlDsaVariant;

/// Builder for private key payload encoding and decoding.
#[derive(Debug, Clone)]
pub struct KeyCodecBuilder<V: MlDsaVariant> {
    config: CodecConfig,
    _variant: PhantomData<V>,
}

impl<V: MlDsaVariant> Default for KeyCodecBuilder<V> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<V: MlDsaVariant> KeyCodecBuilder<V> {
    /// Creates a new builder with the standard profile.
    ///
    /// Equivalent to calling `KeyCodecBuilder::standard()`.
    #[must_use]
    pub fn new() -> Self {
        Self::standard()
    }

    /// Standard profile: seed and expanded key together when the seed is
    /// known, the expanded key alone otherwise.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_output("seed-priv, priv-only", true)
    }

    /// Seed profile: the shortest standard layout, falling back to the
    /// expanded key when no seed is available.
    #[must_use]
    pub fn seed_only() -> Self {
        Self::with_output("seed-only, priv-only", true)
    }

    /// Expanded-key profile: never writes or keeps a seed.
    #[must_use]
    pub fn expanded_only() -> Self {
        Self::with_output("priv-only", false)
    }

    fn with_output(output_formats: &str, retain_seed: bool) -> Self {
        Self {
            config: CodecConfig::default()
                .with_output_formats(output_formats)
                .with_retain_seed(retain_seed),
            _variant: PhantomData,
        }
    }

    /// Sets the accepted input layouts, in priority order.
    #[must_use]
    pub fn input_formats(mut self, formats: impl Into<String>) -> Self {
        self.config.input_formats = Some(formats.into());
        self
    }

    /// Sets the output layouts, in priority order.
    #[must_use]
    pub fn output_formats(mut self, formats: impl Into<String>) -> Self {
        self.config.output_formats = Some(formats.into());
        self
    }

    /// Sets whether decoded keys keep their seed next to an expanded key.
    #[must_use]
    pub fn retain_seed(mut self, retain: bool) -> Self {
        self.config.retain_seed = retain;
        self
    }

    /// Sets whether key constructors should re-derive from the seed.
    #[must_use]
    pub fn prefer_seed(mut self, prefer: bool) -> Self {
        self.config.prefer_seed = prefer;
        self
    }

    /// Returns the configuration this builder describes.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Consumes the builder, returning its configuration.
    #[must_use]
    pub fn into_config(self) -> CodecConfig {
        self.config
    }

    /// Decodes a PKCS#8 private key payload.
    ///
    /// # Errors
    ///
    /// See [`MlDsaPrivateKey::from_pkcs8_payload`].
    pub fn decode(&self, payload: &[u8]) -> CodecResult<MlDsaPrivateKey<V>> {
        MlDsaPrivateKey::from_pkcs8_payload(payload, &self.config)
    }

    /// Encodes a key as a PKCS#8 private key payload.
    ///
    /// # Errors
    ///
    /// See [`MlDsaPrivateKey::to_pkcs8_payload`].
    pub fn encode(&self, key: &MlDsaPrivateKey<V>) -> CodecResult<Zeroizing<Vec<u8>>> {
        key.to_pkcs8_payload(&self.config)
    }

    /// Length of the payload [`Self::encode`] would produce.
    ///
    /// # Errors
    ///
    /// See [`MlDsaPrivateKey::pkcs8_payload_len`].
    pub fn encoded_len(&self, key: &MlDsaPrivateKey<V>) -> CodecResult<usize> {
        key.pkcs8_payload_len(&self.config)
    }
}
