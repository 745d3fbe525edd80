//! Byte-level primitives for reading legacy gradebook files.
//!
//! # Overview
//!
//! - [`Reader`] - Reads little-endian binary data from a byte slice with
//!   cursor tracking. Every read checks availability first and fails with
//!   [`BufferError::EndOfBuffer`] without moving the cursor.
//! - [`latin1`] - Decodes bytes one-to-one into characters; never fails.
//! - [`print_octets`] / [`hex_dump`] - Debug formatting of raw bytes.
//!
//! # Example
//!
//! ```
//! use marks_buffers::Reader;
//!
//! let data = [0x03, b'A', b'B', b'C', 0x34, 0x12];
//! let mut reader = Reader::new(&data);
//!
//! assert_eq!(reader.u8().unwrap(), 3);
//! assert_eq!(reader.latin1(3).unwrap(), "ABC");
//! assert_eq!(reader.i16_le().unwrap(), 0x1234);
//! assert!(reader.u8().is_err());
//! ```

mod print_octets;
mod reader;
mod strings;

pub use print_octets::{hex_dump, print_octets};
pub use reader::Reader;
pub use strings::{latin1, latin1_bytes};

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Bytes the read needed.
        needed: usize,
        /// Bytes that were left.
        remaining: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer { needed, remaining } => write!(
                f,
                "end of buffer: needed {} bytes, {} remaining",
                needed, remaining
            ),
        }
    }
}

impl std::error::Error for BufferError {}
