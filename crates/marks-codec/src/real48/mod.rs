//! Turbo Pascal `Real` (Real48) decoding.
//!
//! Layout, with byte 0 first in the file:
//!
//! ```text
//! byte 0      bytes 1..=5 (little-endian, 40 bits)
//! exponent    [ s | 39-bit mantissa fraction ]
//! ```
//!
//! Value is `(-1)^s * (1 + fraction / 2^39) * 2^(exponent - 129)`. An
//! exponent byte of zero is the "no mark" sentinel whatever the other bytes
//! hold.

mod decoder;
mod error;

pub use decoder::{decode_real48, decode_real48_array, read_real48, REAL48_BIAS};
pub use error::Real48Error;

/// A decoded Real48 slot: `None` is the "no mark" sentinel.
pub type Mark = Option<f64>;
