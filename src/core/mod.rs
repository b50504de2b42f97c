//! Core ML-DSA key encoding types and operations.
//!
//! This module provides the building blocks of the codec:
//!
//! - [`params`] - Parameter registry (key sizes, object identifiers)
//! - [`format`] - Compile-time validated envelope tables
//! - [`preference`] - Format preference resolution
//! - [`config`] - Per-call configuration
//! - [`cursor`] - Bounds-checked byte cursors
//! - [`error`] - Error types for codec operations
//! - [`operations`] - Public and private key envelope codecs
//! - [`variant`] - Variant markers (`MlDsa44`, `MlDsa65`, `MlDsa87`)
//! - [`types`] - Typed key wrappers

pub mod config;
pub mod cursor;
pub mod error;
pub mod format;
pub mod operations;
pub mod params;
pub mod preference;
pub mod types;
pub mod variant;

// Re-export commonly used items
pub use config::{CodecConfig, SeedPolicy};
pub use error::{CodecError, CodecResult};
pub use params::{AlgorithmId, ParameterSet};
pub use variant::{MlDsa44, MlDsa65, MlDsa87, MlDsaVariant};
