//! Binary buffer reader with cursor tracking.

use crate::{strings, BufferError};

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position and provides methods for reading
/// the little-endian integer types and single-byte strings found in
/// Turbo Pascal era record files. A read that would run past `end` returns
/// [`BufferError::EndOfBuffer`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use marks_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16_le().unwrap(), 0x0302);
/// assert_eq!(reader.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    ///
    /// `end` is clamped to the slice length.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Returns `true` when no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.x >= self.end
    }

    /// Fails unless at least `length` bytes remain.
    #[inline]
    pub fn ensure(&self, length: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if length > remaining {
            return Err(BufferError::EndOfBuffer {
                needed: length,
                remaining,
            });
        }
        Ok(())
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        Ok(self.uint8[self.x])
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.ensure(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.uint8[x..end])
    }

    /// Reads a fixed-size byte array and advances the cursor.
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let bin = self.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bin);
        Ok(out)
    }

    /// Creates a new Reader over the next `size` bytes and advances the cursor.
    pub fn cut(&mut self, size: usize) -> Result<Reader<'a>, BufferError> {
        self.ensure(size)?;
        let slice = Reader::from_slice(self.uint8, self.x, self.x + size);
        self.x += size;
        Ok(slice)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn u16_le(&mut self) -> Result<u16, BufferError> {
        Ok(u16::from_le_bytes(self.array()?))
    }

    /// Reads a signed 16-bit integer (little-endian).
    #[inline]
    pub fn i16_le(&mut self) -> Result<i16, BufferError> {
        Ok(i16::from_le_bytes(self.array()?))
    }

    /// Reads `size` bytes as Latin-1 text.
    ///
    /// Every byte value maps to a character, so this only fails when the
    /// buffer is too short.
    pub fn latin1(&mut self, size: usize) -> Result<String, BufferError> {
        Ok(strings::latin1(self.buf(size)?))
    }
}
