//! Pascal `string[N]` fields.
//!
//! A `string[N]` occupies `N + 1` bytes on disk: a length byte followed by
//! `N` content bytes. Only the first `length` bytes are text; the rest is
//! whatever the editor left behind.

use marks_buffers::{latin1, BufferError, Reader};

/// Bytes a `string[width]` field occupies on disk.
pub const fn field_size(width: usize) -> usize {
    width + 1
}

/// Reads a `string[width]` field.
///
/// Always consumes exactly `width + 1` bytes, whatever the length byte says.
/// A length byte larger than `width` is clamped. The text is decoded as
/// Latin-1 and trailing whitespace is removed. When fewer than `width + 1`
/// bytes remain, nothing is consumed.
///
/// # Example
///
/// ```
/// use marks_codec::{read_pascal_str, Reader};
///
/// let mut data = vec![3u8];
/// data.extend_from_slice(b"ABC");
/// data.resize(21, b' ');
///
/// let mut reader = Reader::new(&data);
/// assert_eq!(read_pascal_str(&mut reader, 20).unwrap(), "ABC");
/// assert!(reader.is_empty());
/// ```
pub fn read_pascal_str(reader: &mut Reader<'_>, width: usize) -> Result<String, BufferError> {
    let mut field = reader.cut(field_size(width))?;
    let length = usize::from(field.u8()?).min(width);
    let content = field.buf(width)?;
    Ok(latin1(&content[..length]).trim_end().to_owned())
}
