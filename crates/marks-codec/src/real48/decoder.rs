use marks_buffers::{BufferError, Reader};

use super::{Mark, Real48Error};
use crate::constants::REAL48_SIZE;

/// Exponent bias of the Real48 format.
pub const REAL48_BIAS: i32 = 129;

const SIGN_BIT: u64 = 1 << 39;
const MANTISSA_MASK: u64 = SIGN_BIT - 1;
const MANTISSA_SCALE: f64 = SIGN_BIT as f64;

/// Decodes a 6-byte Real48 value.
///
/// # Example
///
/// ```
/// use marks_codec::decode_real48_array;
///
/// assert_eq!(decode_real48_array(&[0x81, 0, 0, 0, 0, 0]), Some(1.0));
/// assert_eq!(decode_real48_array(&[0x85, 0, 0, 0, 0, 0x08]), Some(17.0));
/// assert_eq!(decode_real48_array(&[0x00, 0, 0, 0, 0x80, 0x81]), None);
/// ```
pub fn decode_real48_array(bytes: &[u8; REAL48_SIZE]) -> Mark {
    let exponent = bytes[0];
    if exponent == 0 {
        return None;
    }

    let mut raw = [0u8; 8];
    raw[..5].copy_from_slice(&bytes[1..]);
    let bits = u64::from_le_bytes(raw);

    let sign = if bits & SIGN_BIT != 0 { -1.0 } else { 1.0 };
    let fraction = (bits & MANTISSA_MASK) as f64 / MANTISSA_SCALE;

    // Normalized: the leading one is implicit.
    Some(sign * (1.0 + fraction) * 2f64.powi(i32::from(exponent) - REAL48_BIAS))
}

/// Decodes a Real48 value from a slice, validating its length.
pub fn decode_real48(bytes: &[u8]) -> Result<Mark, Real48Error> {
    let bytes: &[u8; REAL48_SIZE] = bytes
        .try_into()
        .map_err(|_| Real48Error::InvalidLength(bytes.len()))?;
    Ok(decode_real48_array(bytes))
}

/// Reads one Real48 value from the cursor, consuming exactly 6 bytes.
pub fn read_real48(reader: &mut Reader<'_>) -> Result<Mark, BufferError> {
    Ok(decode_real48_array(&reader.array()?))
}
