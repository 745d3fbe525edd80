//! Decoders for gradebook files written by a Turbo Pascal/Delphi marks program.
//!
//! A class lives in two files: a `.rec` file of fixed-size 796-byte student
//! records, and a `.txt` schema describing categories and assignments. This
//! crate decodes both:
//!
//! - [`real48`] - the 6-byte Pascal `Real` floating-point type.
//! - [`pascal`] - fixed-width, length-prefixed `string[N]` fields.
//! - [`schema`] - the positional `.txt` class schema.
//! - [`record`] - student records, one fixed-size slot at a time.
//! - [`format`] - the display rule shared by every report.
//!
//! # Example
//!
//! ```
//! use marks_codec::{RecordReader, RECORD_SIZE};
//!
//! // A file holding one blank slot and a few trailing bytes.
//! let mut data = vec![0u8; RECORD_SIZE];
//! data.extend_from_slice(&[1, 2, 3]);
//!
//! let students: Vec<_> = RecordReader::new(&data[..]).collect();
//! assert!(students.is_empty());
//! ```

pub mod constants;
pub mod format;
pub mod pascal;
pub mod real48;
pub mod record;
pub mod schema;

pub use constants::RECORD_SIZE;
pub use format::{format_mark, format_mark_or, is_recorded};
pub use marks_buffers::{BufferError, Reader};
pub use pascal::read_pascal_str;
pub use real48::{decode_real48, decode_real48_array, read_real48, Mark, Real48Error};
pub use record::{
    decode_record, open_records, RecordError, RecordRead, RecordReader, StudentRecord,
};
pub use schema::{
    parse_schema, parse_schema_lines, read_schema_file, Assignment, Category, ClassSchema,
    SchemaError,
};
