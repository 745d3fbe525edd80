//! Class schema (`.txt`) parsing.
//!
//! The schema is positional: one value per line, no keys, no delimiters.
//! Nine header lines carry the version, class identity and the three slot
//! counts; they are followed by two lines per category and six per
//! assignment.

mod error;
mod parser;
mod types;

pub use error::SchemaError;
pub use parser::{parse_schema, parse_schema_lines, read_schema_file, HEADER_LINES};
pub use types::{Assignment, Category, ClassSchema};
