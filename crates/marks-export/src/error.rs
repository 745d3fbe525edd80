use std::io;
use std::path::PathBuf;

use marks_codec::SchemaError;
use thiserror::Error;

/// Error type for loading and exporting classes.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
