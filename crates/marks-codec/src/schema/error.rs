use thiserror::Error;

/// Error type for class schema parsing. Every variant is fatal for the class.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema needs {needed} lines, found {found}")]
    MissingLines { needed: usize, found: usize },
    #[error("schema line {line}: expected {expected}, found {value:?}")]
    InvalidNumber {
        line: usize,
        expected: &'static str,
        value: String,
    },
    #[error("schema declares {count} {field}, a record only has {max} slots")]
    CountOutOfRange {
        field: &'static str,
        count: usize,
        max: usize,
    },
    #[error("failed to read schema: {0}")]
    Io(#[from] std::io::Error),
}
