//! Student record decoding.
//!
//! A `.rec` file is a flat array of 796-byte `studentrec40` slots. Deleted
//! students leave a slot with an empty name behind; those are read past but
//! never handed to callers iterating a [`RecordReader`].

mod decoder;
mod reader;
mod types;

pub use decoder::decode_record;
pub use reader::{open_records, RecordError, RecordRead, RecordReader};
pub use types::StudentRecord;
