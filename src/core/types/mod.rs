//! Typed key wrappers.
//!
//! - [`MlDsaPublicKey`] - Raw public key, SPKI envelope conversion
//! - [`MlDsaPrivateKey`] - Seed and/or expanded key, PKCS#8 payload conversion
//!
//! Both are generic over a variant marker from [`variant`](crate::core::variant),
//! so a key of one parameter set cannot be passed where another is expected.

mod private;
mod public;

pub use private::MlDsaPrivateKey;
pub use public::MlDsaPublicKey;
