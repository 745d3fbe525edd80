use thiserror::Error;

/// Error type for Real48 decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Real48Error {
    #[error("real48 value needs exactly 6 bytes, got {0}")]
    InvalidLength(usize),
}
