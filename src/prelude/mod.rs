//! Ergonomic layer for key codec operations.
//!
//! The prelude module provides the commonly used types, the variant markers
//! and a builder with preset output profiles.
//!
//! # Usage
//!
//! ```rust
//! use mldsa_keyfmt::prelude::*;
//!
//! let builder = KeyCodecBuilder::<MlDsa65>::standard();
//! assert!(builder.config().retain_seed);
//! ```

mod builders;

pub use builders::KeyCodecBuilder;

// Re-export core types for convenience
pub use crate::core::config::{CodecConfig, SeedPolicy};
pub use crate::core::error::{CodecError, CodecResult};
pub use crate::core::operations::private_key::{KeySource, PrivateKeyInfo};
pub use crate::core::params::{AlgorithmId, ParameterSet};
pub use crate::core::types::{MlDsaPrivateKey, MlDsaPublicKey};
pub use crate::core::variant::{MlDsa44, MlDsa65, MlDsa87, MlDsaVariant};
