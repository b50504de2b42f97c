//! Format preference resolution.
//!
//! A configuration string such as `"seed-only, priv-only"` selects and orders
//! the private key layouts tried by the decoder or emitted by the encoder.
//! Names are case-insensitive and separated by spaces, tabs or commas. A
//! token selects the first not yet ranked layout whose name it prefixes, so
//! `"seed"` means `seed-priv` and a second `"seed"` means `seed-only`. The
//! first occurrence of a name fixes its rank; repeats and unknown names are
//! ignored. Layouts that are not named are dropped, not merely deprioritized.
//!
//! Without a configuration string every layout is enabled in table order.

use core::fmt::{self, Display};

use crate::core::error::{CodecError, CodecResult};
use crate::core::format::{FormatDescriptor, FormatTable, FORMAT_COUNT};

/// Whether formats are being resolved for decoding or encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decoding (`input-formats`).
    Input,
    /// Encoding (`output-formats`).
    Output,
}

impl Direction {
    /// Lower-case label used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enabled layout together with its 1-based rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedFormat {
    /// 1 is tried (or emitted) first.
    pub priority: u8,
    /// The layout.
    pub format: &'static FormatDescriptor,
}

/// Ordered, deduplicated list of enabled layouts for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPreference {
    entries: Vec<RankedFormat>,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | ',')
}

impl FormatPreference {
    /// Resolves a configuration string against a format table.
    ///
    /// # Arguments
    ///
    /// * `table` - The parameter set's format table
    /// * `direction` - Decode or encode, for error reporting
    /// * `config` - Optional list of format names
    ///
    /// # Errors
    ///
    /// Returns `CodecError::NoFormatEnabled` if a configuration string is
    /// given but none of its tokens names a layout.
    pub fn resolve(
        table: &'static FormatTable,
        direction: Direction,
        config: Option<&str>,
    ) -> CodecResult<Self> {
        let mut ranks = [0u8; FORMAT_COUNT];

        match config {
            None => {
                for (rank, slot) in (1u8..).zip(ranks.iter_mut()) {
                    *slot = rank;
                }
            }
            Some(config) => {
                let mut count = 0u8;
                for token in config.split(is_separator).filter(|t| !t.is_empty()) {
                    if usize::from(count) == FORMAT_COUNT {
                        break;
                    }
                    let unassigned = table
                        .formats
                        .iter()
                        .zip(ranks.iter())
                        .position(|(format, &rank)| rank == 0 && format.matches_token(token));
                    match unassigned {
                        Some(i) => {
                            count += 1;
                            ranks[i] = count;
                        }
                        None => log::trace!(
                            "{}: ignoring {} format token {:?}",
                            table.algorithm,
                            direction,
                            token
                        ),
                    }
                }
                if count == 0 {
                    log::debug!(
                        "{}: no private key {} formats are enabled by {:?}",
                        table.algorithm,
                        direction,
                        config
                    );
                    return Err(CodecError::NoFormatEnabled {
                        algorithm: table.algorithm.name(),
                        direction,
                    });
                }
            }
        }

        // Stable sort; unranked slots sort last and are then dropped.
        let mut order: [usize; FORMAT_COUNT] = core::array::from_fn(|i| i);
        order.sort_by_key(|&i| if ranks[i] == 0 { u8::MAX } else { ranks[i] });

        let entries = order
            .iter()
            .filter(|&&i| ranks[i] != 0)
            .map(|&i| RankedFormat {
                priority: ranks[i],
                format: &table.formats[i],
            })
            .collect();

        Ok(Self { entries })
    }

    /// Enabled layouts in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &'static FormatDescriptor> + '_ {
        self.entries.iter().map(|entry| entry.format)
    }

    /// Enabled layouts with their ranks.
    #[must_use]
    pub fn ranked(&self) -> &[RankedFormat] {
        &self.entries
    }

    /// Names of the enabled layouts in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|format| format.name).collect()
    }

    /// Number of enabled layouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no layout is enabled. Never true for a resolved preference.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
