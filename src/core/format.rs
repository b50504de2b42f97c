//! Private and public key envelope layouts.
//!
//! For each parameter set there is one fixed SPKI prefix and six private key
//! layouts. The first three are the "either or both" choices of the
//! standardized private key structure plus a historical combined encoding:
//!
//! ```text
//! ML-DSA-PrivateKey ::= CHOICE {
//!   seed [0] IMPLICIT OCTET STRING SIZE (32),
//!   expandedKey OCTET STRING SIZE (2560 | 4032 | 4896),
//!   both SEQUENCE {
//!     seed OCTET STRING SIZE (32),
//!     expandedKey OCTET STRING SIZE (2560 | 4032 | 4896) } }
//! ```
//!
//! | Name | Content |
//! |------|---------|
//! | `seed-priv` | `SEQUENCE { OCTET STRING seed, OCTET STRING priv }` |
//! | `priv-only` | `OCTET STRING priv` |
//! | `legacy-combined` | `OCTET STRING (priv ‖ pub)` |
//! | `seed-only` | `[0] IMPLICIT OCTET STRING seed` |
//! | `bare-priv` | raw `priv` |
//! | `bare-seed` | raw `seed` |
//!
//! The tag and length bytes are embedded directly in the tables rather than
//! computed from the parameter set. Every table is checked for internal
//! consistency at compile time.

use crate::core::error::{CodecError, CodecResult};
use crate::core::params::{
    AlgorithmId, ParameterSet, ML_DSA_44, ML_DSA_65, ML_DSA_87, SEED_BYTES, SPKI_OVERHEAD,
};

/// Number of private key layouts per parameter set.
pub const FORMAT_COUNT: usize = 6;

/// How much of the leading 4-byte word of a payload is a real tag/length
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderShift {
    /// Full 4-byte header (`shift == 0`).
    Full,
    /// Only a 2-byte header; the low 16 bits of the word are payload
    /// (`shift == 2`).
    Short,
    /// No header at all (`shift == 4`).
    Bare,
}

impl HeaderShift {
    /// Number of bytes of the leading word that are *not* header.
    #[must_use]
    pub const fn shift(self) -> usize {
        match self {
            Self::Full => 0,
            Self::Short => 2,
            Self::Bare => 4,
        }
    }

    /// Number of header bytes at the start of the payload.
    #[must_use]
    pub const fn header_len(self) -> usize {
        4 - self.shift()
    }

    /// Checks the leading big-endian word of a payload against a magic.
    #[must_use]
    pub const fn accepts(self, word: u32, magic: u32) -> bool {
        match self {
            Self::Full => word == magic,
            Self::Short => word >> 16 == magic,
            Self::Bare => true,
        }
    }
}

/// The three kinds of sub-field a private key layout may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 32-byte seed, optionally preceded by a 2-byte tag/length.
    Seed,
    /// Expanded private key, optionally preceded by a 4-byte tag/length.
    Private,
    /// Public key, never separately wrapped.
    Public,
}

impl FieldKind {
    /// Width of the field's own tag/length header when it is not subsumed by
    /// the outer magic.
    #[must_use]
    pub const fn header_len(self) -> usize {
        match self {
            Self::Seed => 2,
            Self::Private => 4,
            Self::Public => 0,
        }
    }
}

/// Position of one sub-field in a private key layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    /// Offset of the raw field bytes from the start of the payload.
    pub offset: usize,
    /// Length of the raw field bytes.
    pub length: usize,
    /// Standalone tag/length preceding the field, or 0 when the header is
    /// part of the outer magic (or the field has none).
    pub magic: u32,
}

/// One of the six private key layouts of a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    /// Name used in `input-formats`/`output-formats` configuration.
    pub name: &'static str,
    /// Historical name also accepted in configuration.
    pub alias: Option<&'static str>,
    /// Exact payload length.
    pub total_length: usize,
    /// How much of the leading word is header.
    pub header_shift: HeaderShift,
    /// Expected leading tag/length (only the top `header_len()` bytes count).
    pub outer_magic: u32,
    /// Seed field, if the layout carries one.
    pub seed: Option<FieldLayout>,
    /// Expanded private key field, if the layout carries one.
    pub private: Option<FieldLayout>,
    /// Public key field (legacy combined layout only).
    pub public: Option<FieldLayout>,
}

impl FormatDescriptor {
    /// Case-insensitive comparison against a configuration token.
    #[must_use]
    pub fn matches_name(&self, token: &str) -> bool {
        self.name.eq_ignore_ascii_case(token)
            || self
                .alias
                .is_some_and(|alias| alias.eq_ignore_ascii_case(token))
    }

    /// Whether a configuration token is a non-empty, case-insensitive prefix
    /// of the name or alias. `"seed"` selects `seed-priv`.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        let is_prefix_of = |name: &str| {
            !token.is_empty()
                && name
                    .as_bytes()
                    .get(..token.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(token.as_bytes()))
        };
        is_prefix_of(self.name) || self.alias.is_some_and(is_prefix_of)
    }

    /// Returns the layout of the given field kind.
    #[must_use]
    pub const fn field(&self, kind: FieldKind) -> Option<FieldLayout> {
        match kind {
            FieldKind::Seed => self.seed,
            FieldKind::Private => self.private,
            FieldKind::Public => self.public,
        }
    }

    /// Whether every declared field length equals the parameter set's sizes.
    #[must_use]
    pub const fn fits(&self, params: &ParameterSet) -> bool {
        field_len_is(self.seed, SEED_BYTES)
            && field_len_is(self.private, params.private_len)
            && field_len_is(self.public, params.public_len)
    }

    /// Full structural check of the layout against a parameter set.
    ///
    /// Fields must follow each other without gaps, each either directly at
    /// the cursor (header subsumed by the outer magic) or after its own
    /// header, and the last field must end at `total_length`. Every length
    /// byte embedded in a magic must agree with the layout.
    #[must_use]
    pub const fn is_consistent(&self, params: &ParameterSet) -> bool {
        if !self.fits(params) || (self.seed.is_none() && self.private.is_none()) {
            return false;
        }

        let header_len = self.header_shift.header_len();
        let magic_ok = match self.header_shift {
            HeaderShift::Full => (self.outer_magic & 0xffff) as usize + 4 == self.total_length,
            HeaderShift::Short => {
                self.outer_magic <= 0xffff
                    && (self.outer_magic & 0xff) as usize + 2 == self.total_length
            }
            HeaderShift::Bare => self.outer_magic == 0,
        };
        if !magic_ok || self.total_length < header_len {
            return false;
        }

        let mut pos = header_len;
        if let Some(end) = field_end(pos, self.seed, FieldKind::Seed) {
            pos = end;
        } else if self.seed.is_some() {
            return false;
        }
        if let Some(end) = field_end(pos, self.private, FieldKind::Private) {
            pos = end;
        } else if self.private.is_some() {
            return false;
        }
        if let Some(end) = field_end(pos, self.public, FieldKind::Public) {
            pos = end;
        } else if self.public.is_some() {
            return false;
        }

        pos == self.total_length
    }
}

const fn field_len_is(field: Option<FieldLayout>, expected: usize) -> bool {
    match field {
        Some(field) => field.length == expected,
        None => true,
    }
}

// End offset of a field starting at `pos`, or `None` when absent or misplaced.
const fn field_end(pos: usize, field: Option<FieldLayout>, kind: FieldKind) -> Option<usize> {
    let Some(field) = field else {
        return None;
    };
    let header_len = kind.header_len();
    let placed = if field.offset == pos {
        field.magic == 0
    } else if header_len > 0 && field.offset == pos + header_len {
        // Standalone header: a tag byte followed by length bytes that must
        // encode the field length.
        let length_mask = if header_len == 2 { 0xff } else { 0xffff };
        field.magic != 0
            && (field.magic as u64) < (1u64 << (8 * header_len))
            && (field.magic & length_mask) as usize == field.length
    } else {
        false
    };
    if placed {
        Some(field.offset + field.length)
    } else {
        None
    }
}

/// Envelope tables for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTable {
    /// The variant these tables describe.
    pub algorithm: AlgorithmId,
    /// DER prefix of a `SubjectPublicKeyInfo` up to the raw key bytes.
    pub spki_prefix: [u8; SPKI_OVERHEAD],
    /// Private key layouts in canonical order.
    pub formats: [FormatDescriptor; FORMAT_COUNT],
}

impl FormatTable {
    /// Returns the tables of a variant.
    #[must_use]
    pub fn for_algorithm(algorithm: AlgorithmId) -> &'static Self {
        &FORMAT_TABLES[algorithm.index()]
    }

    /// Parameter set these tables belong to.
    #[must_use]
    pub fn parameter_set(&self) -> &'static ParameterSet {
        ParameterSet::of(self.algorithm)
    }

    /// Finds a layout by name or alias, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|format| format.matches_name(name))
    }

    /// Checks the SPKI prefix and all layouts against a parameter set.
    #[must_use]
    pub const fn is_consistent(&self, params: &ParameterSet) -> bool {
        if !spki_prefix_is_consistent(&self.spki_prefix, params) {
            return false;
        }
        let mut i = 0;
        while i < FORMAT_COUNT {
            if !self.formats[i].is_consistent(params) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Run-time form of [`Self::is_consistent`] against the table's own
    /// parameter set.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InternalConsistency` if the table is inconsistent.
    pub fn validate(&self) -> CodecResult<()> {
        let params = self.parameter_set();
        if self.is_consistent(params) {
            Ok(())
        } else {
            Err(CodecError::InternalConsistency {
                algorithm: params.name,
            })
        }
    }
}

// SEQUENCE { SEQUENCE { OID }, BIT STRING { 0x00, pub } }
const fn spki_prefix_is_consistent(prefix: &[u8; SPKI_OVERHEAD], params: &ParameterSet) -> bool {
    let oid = params.algorithm.oid_der();
    let mut i = 0;
    while i < oid.len() {
        if prefix[8 + i] != oid[i] {
            return false;
        }
        i += 1;
    }
    let outer_len = ((prefix[2] as usize) << 8) | prefix[3] as usize;
    let bits_len = ((prefix[19] as usize) << 8) | prefix[20] as usize;
    prefix[0] == 0x30
        && prefix[1] == 0x82
        && prefix[6] == 0x06
        && prefix[7] as usize == oid.len()
        && prefix[17] == 0x03
        && prefix[18] == 0x82
        && prefix[21] == 0x00
        && outer_len + 4 == SPKI_OVERHEAD + params.public_len
        && bits_len == params.public_len + 1
}

const fn field(offset: usize, length: usize, magic: u32) -> Option<FieldLayout> {
    Some(FieldLayout {
        offset,
        length,
        magic,
    })
}

/*
 * ML-DSA-44
 * Public key bytes:  1312 (0x0520)
 * Private key bytes: 2560 (0x0a00)
 */
const ML_DSA_44_TABLE: FormatTable = FormatTable {
    algorithm: AlgorithmId::MlDsa44,
    spki_prefix: [
        0x30, 0x82, 0x05, 0x32, 0x30, 0x0b, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
        0x03, 0x11, 0x03, 0x82, 0x05, 0x21, 0x00,
    ],
    formats: [
        FormatDescriptor {
            name: "seed-priv",
            alias: None,
            total_length: 0x0a2a,
            header_shift: HeaderShift::Full,
            outer_magic: 0x3082_0a26,
            seed: field(0x06, 0x20, 0x0420),
            private: field(0x2a, 0x0a00, 0x0482_0a00),
            public: None,
        },
        FormatDescriptor {
            name: "priv-only",
            alias: None,
            total_length: 0x0a04,
            header_shift: HeaderShift::Full,
            outer_magic: 0x0482_0a00,
            seed: None,
            private: field(0x04, 0x0a00, 0),
            public: None,
        },
        FormatDescriptor {
            name: "legacy-combined",
            alias: Some("oqskeypair"),
            total_length: 0x0f24,
            header_shift: HeaderShift::Full,
            outer_magic: 0x0482_0f20,
            seed: None,
            private: field(0x04, 0x0a00, 0),
            public: field(0x0a04, 0x0520, 0),
        },
        FormatDescriptor {
            name: "seed-only",
            alias: None,
            total_length: 0x0022,
            header_shift: HeaderShift::Short,
            outer_magic: 0x8020,
            seed: field(0x02, 0x20, 0),
            private: None,
            public: None,
        },
        FormatDescriptor {
            name: "bare-priv",
            alias: None,
            total_length: 0x0a00,
            header_shift: HeaderShift::Bare,
            outer_magic: 0,
            seed: None,
            private: field(0x00, 0x0a00, 0),
            public: None,
        },
        FormatDescriptor {
            name: "bare-seed",
            alias: None,
            total_length: 0x0020,
            header_shift: HeaderShift::Bare,
            outer_magic: 0,
            seed: field(0x00, 0x20, 0),
            private: None,
            public: None,
        },
    ],
};

/*
 * ML-DSA-65
 * Public key bytes:  1952 (0x07a0)
 * Private key bytes: 4032 (0x0fc0)
 */
const ML_DSA_65_TABLE: FormatTable = FormatTable {
    algorithm: AlgorithmId::MlDsa65,
    spki_prefix: [
        0x30, 0x82, 0x07, 0xb2, 0x30, 0x0b, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
        0x03, 0x12, 0x03, 0x82, 0x07, 0xa1, 0x00,
    ],
    formats: [
        FormatDescriptor {
            name: "seed-priv",
            alias: None,
            total_length: 0x0fea,
            header_shift: HeaderShift::Full,
            outer_magic: 0x3082_0fe6,
            seed: field(0x06, 0x20, 0x0420),
            private: field(0x2a, 0x0fc0, 0x0482_0fc0),
            public: None,
        },
        FormatDescriptor {
            name: "priv-only",
            alias: None,
            total_length: 0x0fc4,
            header_shift: HeaderShift::Full,
            outer_magic: 0x0482_0fc0,
            seed: None,
            private: field(0x04, 0x0fc0, 0),
            public: None,
        },
        FormatDescriptor {
            name: "legacy-combined",
            alias: Some("oqskeypair"),
            total_length: 0x1764,
            header_shift: HeaderShift::Full,
            outer_magic: 0x0482_1760,
            seed: None,
            private: field(0x04, 0x0fc0, 0),
            public: field(0x0fc4, 0x07a0, 0),
        },
        FormatDescriptor {
            name: "seed-only",
            alias: None,
            total_length: 0x0022,
            header_shift: HeaderShift::Short,
            outer_magic: 0x8020,
            seed: field(0x02, 0x20, 0),
            private: None,
            public: None,
        },
        FormatDescriptor {
            name: "bare-priv",
            alias: None,
            total_length: 0x0fc0,
            header_shift: HeaderShift::Bare,
            outer_magic: 0,
            seed: None,
            private: field(0x00, 0x0fc0, 0),
            public: None,
        },
        FormatDescriptor {
            name: "bare-seed",
            alias: None,
            total_length: 0x0020,
            header_shift: HeaderShift::Bare,
            outer_magic: 0,
            seed: field(0x00, 0x20, 0),
            private: None,
            public: None,
        },
    ],
};

/*
 * ML-DSA-87
 * Public key bytes:  2592 (0x0a20)
 * Private key bytes: 4896 (0x1320)
 */
const ML_DSA_87_TABLE: FormatTable = FormatTable {
    algorithm: AlgorithmId::MlDsa87,
    spki_prefix: [
        0x30, 0x82, 0x0a, 0x32, 0x30, 0x0b, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04,
        0x03, 0x13, 0x03, 0x82, 0x0a, 0x21, 0x00,
    ],
    formats: [
        FormatDescriptor {
            name: "seed-priv",
            alias: None,
            total_length: 0x134a,
            header_shift: HeaderShift::Full,
            outer_magic: 0x3082_1346,
            seed: field(0x06, 0x20, 0x0420),
            private: field(0x2a, 0x1320, 0x0482_1320),
            public: None,
        },
        FormatDescriptor {
            name: "priv-only",
            alias: None,
            total_length: 0x1324,
            header_shift: HeaderShift::Full,
            outer_magic: 0x0482_1320,
            seed: None,
            private: field(0x04, 0x1320, 0),
            public: None,
        },
        FormatDescriptor {
            name: "legacy-combined",
            alias: Some("oqskeypair"),
            total_length: 0x1d44,
            header_shift: HeaderShift::Full,
            outer_magic: 0x0482_1d40,
            seed: None,
            private: field(0x04, 0x1320, 0),
            public: field(0x1324, 0x0a20, 0),
        },
        FormatDescriptor {
            name: "seed-only",
            alias: None,
            total_length: 0x0022,
            header_shift: HeaderShift::Short,
            outer_magic: 0x8020,
            seed: field(0x02, 0x20, 0),
            private: None,
            public: None,
        },
        FormatDescriptor {
            name: "bare-priv",
            alias: None,
            total_length: 0x1320,
            header_shift: HeaderShift::Bare,
            outer_magic: 0,
            seed: None,
            private: field(0x00, 0x1320, 0),
            public: None,
        },
        FormatDescriptor {
            name: "bare-seed",
            alias: None,
            total_length: 0x0020,
            header_shift: HeaderShift::Bare,
            outer_magic: 0,
            seed: field(0x00, 0x20, 0),
            private: None,
            public: None,
        },
    ],
};

const _: () = assert!(ML_DSA_44_TABLE.is_consistent(&ML_DSA_44), "ML-DSA-44 format table");
const _: () = assert!(ML_DSA_65_TABLE.is_consistent(&ML_DSA_65), "ML-DSA-65 format table");
const _: () = assert!(ML_DSA_87_TABLE.is_consistent(&ML_DSA_87), "ML-DSA-87 format table");

static FORMAT_TABLES: [FormatTable; 3] = [ML_DSA_44_TABLE, ML_DSA_65_TABLE, ML_DSA_87_TABLE];
