//! Locating and loading classes.

use std::fs;
use std::path::{Path, PathBuf};

use marks_codec::{open_records, read_schema_file, ClassSchema, RecordReader, StudentRecord};
use serde::Serialize;
use tracing::debug;

use crate::ExportError;

/// The two files that make up a class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClassFiles {
    pub rec: PathBuf,
    pub schema: PathBuf,
}

impl ClassFiles {
    /// Pairs a `.rec` file with the `.txt` schema next to it.
    pub fn for_rec(rec: impl Into<PathBuf>) -> Self {
        let rec = rec.into();
        let schema = rec.with_extension("txt");
        Self { rec, schema }
    }
}

/// A decoded class: its schema and its non-blank students in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassData {
    pub schema: ClassSchema,
    pub students: Vec<StudentRecord>,
}

/// Finds every `.rec` file in `dir` that has a `.txt` schema beside it.
///
/// Results are sorted by path. `.rec` files without a schema are skipped.
pub fn discover_classes(dir: impl AsRef<Path>) -> Result<Vec<ClassFiles>, ExportError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| ExportError::io(dir, e))?;

    let mut classes = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ExportError::io(dir, e))?.path();
        let is_rec = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("rec"));
        if !is_rec || !path.is_file() {
            continue;
        }
        let files = ClassFiles::for_rec(path);
        if files.schema.is_file() {
            classes.push(files);
        } else {
            debug!(rec = %files.rec.display(), "no schema beside record file");
        }
    }
    classes.sort();
    Ok(classes)
}

/// Parses the schema and reads every student of a class.
pub fn load_class(files: &ClassFiles) -> Result<ClassData, ExportError> {
    let schema = read_schema_file(&files.schema).map_err(|source| ExportError::Schema {
        path: files.schema.clone(),
        source,
    })?;
    let mut records: RecordReader<_> =
        open_records(&files.rec).map_err(|e| ExportError::io(&files.rec, e))?;
    let students: Vec<StudentRecord> = records.by_ref().collect();
    debug!(
        class = %schema.class_code,
        slots = records.slots_read(),
        students = students.len(),
        "loaded class"
    );
    Ok(ClassData { schema, students })
}
