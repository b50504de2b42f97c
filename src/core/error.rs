//! Error types for key material encoding and decoding.
//!
//! An algorithm identifier that belongs to some other key type is not an
//! error: decode entry points return `Ok(None)` so callers can try several
//! key types in turn. Everything below that level is a `CodecError`.

use thiserror::Error;

use crate::core::preference::Direction;

/// Errors that can occur when encoding or decoding ML-DSA key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The algorithm identifier carried parameters, which ML-DSA forbids.
    #[error("unexpected parameters with a PKCS#8 {algorithm} private key")]
    UnexpectedParameters {
        /// Algorithm name.
        algorithm: &'static str,
    },

    /// The configuration enables no format, or no enabled format fits.
    #[error("no matching enabled {algorithm} private key {direction} formats")]
    NoFormatEnabled {
        /// Algorithm name.
        algorithm: &'static str,
        /// Whether this was a decode (`input`) or encode (`output`).
        direction: Direction,
    },

    /// A tentatively matched layout failed a length, offset or tag check.
    #[error("error parsing {algorithm} key encoding")]
    BadEncoding {
        /// Algorithm name.
        algorithm: &'static str,
    },

    /// No private key bytes are available to encode.
    #[error("no {algorithm} private key data available")]
    NotAPrivateKey {
        /// Algorithm name.
        algorithm: &'static str,
    },

    /// No public key bytes are available to encode.
    #[error("no {algorithm} public key data available")]
    NotAPublicKey {
        /// Algorithm name.
        algorithm: &'static str,
    },

    /// Key material required by the chosen layout is absent.
    #[error("no {algorithm} key material available")]
    MissingKey {
        /// Algorithm name.
        algorithm: &'static str,
    },

    /// Raw key bytes of the wrong size were supplied.
    #[error("invalid {algorithm} key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Algorithm name.
        algorithm: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A format table produced inconsistent offsets.
    #[error("error encoding {algorithm} private key")]
    InternalConsistency {
        /// Algorithm name.
        algorithm: &'static str,
    },
}

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::UnexpectedParameters {
            algorithm: "ML-DSA-44",
        };
        assert_eq!(
            err.to_string(),
            "unexpected parameters with a PKCS#8 ML-DSA-44 private key"
        );

        let err = CodecError::NoFormatEnabled {
            algorithm: "ML-DSA-65",
            direction: Direction::Input,
        };
        assert_eq!(
            err.to_string(),
            "no matching enabled ML-DSA-65 private key input formats"
        );

        let err = CodecError::NoFormatEnabled {
            algorithm: "ML-DSA-87",
            direction: Direction::Output,
        };
        assert_eq!(
            err.to_string(),
            "no matching enabled ML-DSA-87 private key output formats"
        );

        let err = CodecError::BadEncoding {
            algorithm: "ML-DSA-44",
        };
        assert_eq!(err.to_string(), "error parsing ML-DSA-44 key encoding");

        let err = CodecError::NotAPrivateKey {
            algorithm: "ML-DSA-44",
        };
        assert_eq!(err.to_string(), "no ML-DSA-44 private key data available");

        let err = CodecError::NotAPublicKey {
            algorithm: "ML-DSA-44",
        };
        assert_eq!(err.to_string(), "no ML-DSA-44 public key data available");

        let err = CodecError::MissingKey {
            algorithm: "ML-DSA-44",
        };
        assert_eq!(err.to_string(), "no ML-DSA-44 key material available");

        let err = CodecError::InvalidKeyLength {
            algorithm: "ML-DSA-44",
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "invalid ML-DSA-44 key length: expected 32, got 31"
        );

        let err = CodecError::InternalConsistency {
            algorithm: "ML-DSA-44",
        };
        assert_eq!(err.to_string(), "error encoding ML-DSA-44 private key");
    }

    #[test]
    fn test_error_debug() {
        let err = CodecError::BadEncoding {
            algorithm: "ML-DSA-44",
        };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("BadEncoding"));
    }
}
