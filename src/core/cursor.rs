//! Bounds-checked cursors over key payloads.
//!
//! The decoder walks a payload left to right with [`ByteReader`]; the
//! encoder fills a fixed-size buffer with [`ByteWriter`]. Both track their
//! position explicitly so layouts can assert exact offsets, and neither can
//! read or write past its bounds.

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;
use zeroize::Zeroizing;

/// Cursor bound violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// A read needed more bytes than remain.
    #[error("unexpected end of input: need {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Bytes requested.
        needed: usize,
        /// Bytes left.
        remaining: usize,
    },

    /// A write would exceed the buffer's fixed capacity.
    #[error("output overflow: writing {needed} bytes, {remaining} remaining")]
    Overflow {
        /// Bytes to be written.
        needed: usize,
        /// Space left.
        remaining: usize,
    },
}

/// Read cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Starts reading at offset 0.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the cursor sits at the end of the buffer.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next `n` bytes and advances past them.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::UnexpectedEnd` if fewer than `n` bytes remain;
    /// the cursor does not move in that case.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        let bytes = self.peek(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// Returns the next `n` bytes without advancing.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::UnexpectedEnd` if fewer than `n` bytes remain.
    pub fn peek(&self, n: usize) -> Result<&'a [u8], CursorError> {
        if n > self.remaining() {
            return Err(CursorError::UnexpectedEnd {
                needed: n,
                remaining: self.remaining(),
            });
        }
        Ok(&self.buf[self.pos..self.pos + n])
    }

    /// Advances past `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::UnexpectedEnd` if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<(), CursorError> {
        self.take(n).map(|_| ())
    }

    /// Reads a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::UnexpectedEnd` if fewer than 2 bytes remain.
    pub fn read_u16_be(&mut self) -> Result<u16, CursorError> {
        self.take(2).map(BigEndian::read_u16)
    }

    /// Reads a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::UnexpectedEnd` if fewer than 4 bytes remain.
    pub fn read_u32_be(&mut self) -> Result<u32, CursorError> {
        self.take(4).map(BigEndian::read_u32)
    }

    /// Reads a big-endian `u32` without advancing.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::UnexpectedEnd` if fewer than 4 bytes remain.
    pub fn peek_u32_be(&self) -> Result<u32, CursorError> {
        self.peek(4).map(BigEndian::read_u32)
    }
}

/// Write cursor over an owned, fixed-capacity buffer.
///
/// The buffer is zeroized when dropped, so a partially written private key
/// left behind by a failed encode does not linger in memory.
pub struct ByteWriter {
    buf: Zeroizing<Vec<u8>>,
    capacity: usize,
}

impl ByteWriter {
    /// Allocates a buffer that accepts exactly `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Zeroizing::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Space left before the buffer is full.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Appends raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::Overflow` if the bytes do not fit; nothing is
    /// written in that case.
    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<(), CursorError> {
        if bytes.len() > self.remaining() {
            return Err(CursorError::Overflow {
                needed: bytes.len(),
                remaining: self.remaining(),
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::Overflow` if fewer than 2 bytes of space remain.
    pub fn put_u16_be(&mut self, value: u16) -> Result<(), CursorError> {
        let mut word = [0u8; 2];
        BigEndian::write_u16(&mut word, value);
        self.put_slice(&word)
    }

    /// Appends a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::Overflow` if fewer than 4 bytes of space remain.
    pub fn put_u32_be(&mut self, value: u32) -> Result<(), CursorError> {
        let mut word = [0u8; 4];
        BigEndian::write_u32(&mut word, value);
        self.put_slice(&word)
    }

    /// Returns the written bytes.
    #[must_use]
    pub fn into_inner(self) -> Zeroizing<Vec<u8>> {
        self.buf
    }
}

impl core::fmt::Debug for ByteWriter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteWriter")
            .field("position", &self.position())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_walks_buffer() -> Result<(), CursorError> {
        let data: [u8; 8] = [0x30, 0x82, 0x0a, 0x26, 0x04, 0x20, 0xaa, 0xbb];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.peek_u32_be()?, 0x3082_0a26);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u32_be()?, 0x3082_0a26);
        assert_eq!(reader.read_u16_be()?, 0x0420);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.take(2)?, &[0xaa, 0xbb]);
        assert!(reader.is_empty());
        Ok(())
    }

    #[test]
    fn test_reader_does_not_overrun() {
        let data = [1u8, 2, 3];
        let mut reader = ByteReader::new(&data);
        assert_eq!(
            reader.read_u32_be(),
            Err(CursorError::UnexpectedEnd {
                needed: 4,
                remaining: 3
            })
        );
        // A failed read leaves the cursor in place.
        assert_eq!(reader.position(), 0);
        assert!(reader.skip(3).is_ok());
        assert!(reader.skip(1).is_err());
    }

    #[test]
    fn test_writer_respects_capacity() -> Result<(), CursorError> {
        let mut writer = ByteWriter::with_capacity(7);
        writer.put_u32_be(0x0482_0a00)?;
        writer.put_u16_be(0x8020)?;
        assert_eq!(writer.position(), 6);
        assert_eq!(
            writer.put_u16_be(1),
            Err(CursorError::Overflow {
                needed: 2,
                remaining: 1
            })
        );
        writer.put_slice(&[0xff])?;
        assert_eq!(writer.remaining(), 0);
        assert_eq!(
            writer.into_inner().as_slice(),
            &[0x04, 0x82, 0x0a, 0x00, 0x80, 0x20, 0xff]
        );
        Ok(())
    }
}
