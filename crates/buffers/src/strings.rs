//! Single-byte string decoding.

/// Decodes bytes as Latin-1 (ISO-8859-1).
///
/// Each byte maps to the code point of the same value, so decoding never
/// fails and never needs a replacement character.
///
/// # Example
///
/// ```
/// use marks_buffers::latin1;
///
/// assert_eq!(latin1(b"hello"), "hello");
/// assert_eq!(latin1(&[0x4e, 0x6f, 0xeb, 0x6c]), "Noël");
/// ```
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decodes a whole file's worth of Latin-1 bytes.
///
/// Same mapping as [`latin1`], taking ownership so callers reading text
/// files can hand over the buffer directly.
pub fn latin1_bytes(bytes: Vec<u8>) -> String {
    latin1(&bytes)
}
