//! Class to CSV conversion.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::csv::{attendance_table, marks_table, summary_table, transposed_table, write_csv};
use crate::{discover_classes, load_class, ClassFiles, ExportError, ExportOptions};

/// Name of the batch summary written next to the class files.
pub const SUMMARY_FILE: &str = "_summary.csv";

/// What a converted class contributed to the batch summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub class_code: String,
    pub class_description: String,
    pub num_students: usize,
    pub num_assignments: usize,
}

/// Writes the CSV tables of one class into `output_dir`.
///
/// Files are named after the class code: `{code}_marks.csv`,
/// `{code}_attendance.csv` and, when enabled, `{code}_marks_transposed.csv`.
/// A class without students writes nothing and returns `None`.
pub fn convert_class(
    files: &ClassFiles,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<Option<ClassSummary>, ExportError> {
    info!(rec = %files.rec.display(), "processing class");
    let class = load_class(files)?;
    let code = &class.schema.class_code;

    if class.students.is_empty() {
        warn!(rec = %files.rec.display(), "no students found");
        return Ok(None);
    }

    let mut outputs: Vec<(PathBuf, _)> = vec![
        (output_dir.join(format!("{}_marks.csv", code)), marks_table(&class)),
        (
            output_dir.join(format!("{}_attendance.csv", code)),
            attendance_table(&class),
        ),
    ];
    if options.transposed {
        outputs.push((
            output_dir.join(format!("{}_marks_transposed.csv", code)),
            transposed_table(&class),
        ));
    }
    for (path, table) in &outputs {
        write_csv(path, table)?;
        info!(path = %path.display(), rows = table.len() - 1, "wrote table");
    }

    Ok(Some(ClassSummary {
        class_code: code.clone(),
        class_description: class.schema.class_description.clone(),
        num_students: class.students.len(),
        num_assignments: class.schema.num_assignments,
    }))
}

/// Converts every class found in `classes_dir` and writes the summary.
///
/// A class that fails to load is logged and left out; the rest of the batch
/// still converts. Fails only when the directories themselves are unusable.
pub fn convert_directory(
    classes_dir: &Path,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<Vec<ClassSummary>, ExportError> {
    fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;
    let classes = discover_classes(classes_dir)?;
    info!(count = classes.len(), dir = %classes_dir.display(), "found classes");

    let mut summaries = Vec::new();
    for files in &classes {
        match convert_class(files, output_dir, options) {
            Ok(Some(summary)) => summaries.push(summary),
            Ok(None) => {}
            Err(err) => error!(error = %err, "skipping class"),
        }
    }

    let summary_path = output_dir.join(SUMMARY_FILE);
    write_csv(&summary_path, &summary_table(&summaries))?;
    info!(path = %summary_path.display(), classes = summaries.len(), "wrote summary");
    Ok(summaries)
}
