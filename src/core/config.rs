//! Per-call codec configuration.
//!
//! Nothing is read from ambient state: every decode and encode call receives
//! a `CodecConfig`, so different threads can use different settings at the
//! same time.
//!
//! With the `serde` feature the configuration can be loaded from any serde
//! source using the external key names:
//!
//! ```json
//! {
//!   "input-formats": "seed-priv, priv-only",
//!   "output-formats": "seed-only",
//!   "retain-seed": true,
//!   "prefer-seed": false
//! }
//! ```

/// Format selection and seed handling settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct CodecConfig {
    /// Enabled decode layouts in priority order; `None` enables all.
    pub input_formats: Option<String>,
    /// Enabled encode layouts in priority order; `None` enables all.
    pub output_formats: Option<String>,
    /// Keep the seed alongside an expanded key.
    pub retain_seed: bool,
    /// Re-derive the expanded key from the seed when both are present.
    pub prefer_seed: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            input_formats: None,
            output_formats: None,
            retain_seed: true,
            prefer_seed: true,
        }
    }
}

impl CodecConfig {
    /// Default configuration: all formats, seed retained and preferred.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decode format list.
    #[must_use]
    pub fn with_input_formats(mut self, formats: impl Into<String>) -> Self {
        self.input_formats = Some(formats.into());
        self
    }

    /// Sets the encode format list.
    #[must_use]
    pub fn with_output_formats(mut self, formats: impl Into<String>) -> Self {
        self.output_formats = Some(formats.into());
        self
    }

    /// Sets the `retain-seed` flag.
    #[must_use]
    pub fn with_retain_seed(mut self, retain: bool) -> Self {
        self.retain_seed = retain;
        self
    }

    /// Sets the `prefer-seed` flag.
    #[must_use]
    pub fn with_prefer_seed(mut self, prefer: bool) -> Self {
        self.prefer_seed = prefer;
        self
    }

    /// The seed flags handed to the key constructor after decoding.
    #[must_use]
    pub const fn seed_policy(&self) -> SeedPolicy {
        SeedPolicy {
            retain_seed: self.retain_seed,
            prefer_seed: self.prefer_seed,
        }
    }
}

/// How a key constructor should reconcile a seed with an expanded key.
///
/// The codec does not interpret these flags; it passes them through with the
/// decoded material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedPolicy {
    /// Keep the seed after the key is loaded.
    pub retain_seed: bool,
    /// Derive the expanded key from the seed rather than trusting a stored one.
    pub prefer_seed: bool,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        CodecConfig::default().seed_policy()
    }
}
