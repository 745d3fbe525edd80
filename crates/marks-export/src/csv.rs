//! CSV tables of a class.
//!
//! Tables are plain rows of strings; [`write_csv`] handles quoting. Marks go
//! through [`format_mark`], so empty cells mean "no mark".

use std::fs;
use std::path::Path;

use marks_codec::format_mark;

use crate::{ClassData, ClassSummary, ExportError};

/// Rows of cells; the first row is the header.
pub type Table = Vec<Vec<String>>;

/// Quotes a field if it contains a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

/// Renders a table as CSV text with CRLF row endings.
pub fn to_csv_string(table: &Table) -> String {
    let mut out = String::new();
    for row in table {
        let cells: Vec<String> = row.iter().map(|cell| escape_field(cell)).collect();
        out.push_str(&cells.join(","));
        out.push_str("\r\n");
    }
    out
}

/// Writes a table to `path`.
pub fn write_csv(path: &Path, table: &Table) -> Result<(), ExportError> {
    fs::write(path, to_csv_string(table)).map_err(|e| ExportError::io(path, e))
}

/// Python-style rendering of a decimal from the schema (`20.0`, `25.5`).
pub(crate) fn decimal(value: f64) -> String {
    format!("{:?}", value)
}

fn identity(student: &marks_codec::StudentRecord) -> Vec<String> {
    vec![
        student.name.clone(),
        student.student_number.clone(),
        student.homeform.clone(),
    ]
}

/// One row per student: identity, assignment, category, term and final marks.
pub fn marks_table(class: &ClassData) -> Table {
    let schema = &class.schema;
    let mut header: Vec<String> = ["Student Name", "Student Number", "Homeform"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    header.extend(
        schema
            .assignments
            .iter()
            .map(|a| format!("{} ({})", a.name, a.date)),
    );
    header.extend(schema.categories.iter().map(|c| format!("{} %", c.name)));
    header.extend((1..=schema.num_terms).map(|n| format!("Term {} %", n)));
    header.push("Final Mark %".to_owned());

    let mut table = vec![header];
    for student in &class.students {
        let mut row = identity(student);
        row.extend(student.marks_for(schema).iter().map(|&m| format_mark(m)));
        row.extend(
            student
                .category_marks_for(schema)
                .iter()
                .map(|&m| format_mark(m)),
        );
        row.extend(student.term_marks_for(schema).iter().map(|&m| format_mark(m)));
        row.push(format_mark(student.final_mark));
        table.push(row);
    }
    table
}

/// One row per student: contact details and attendance counts.
///
/// Negative counts are the marks program's "not entered" and render blank.
pub fn attendance_table(class: &ClassData) -> Table {
    let count = |n: i16| if n >= 0 { n.to_string() } else { String::new() };

    let mut table: Table = vec![[
        "Student Name",
        "Student Number",
        "Homeform",
        "Phone",
        "Absences",
        "Lates",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()];
    for student in &class.students {
        let mut row = identity(student);
        row.push(student.phone.clone());
        row.push(count(student.absences));
        row.push(count(student.lates));
        table.push(row);
    }
    table
}

/// Students as columns, one row per assignment, category, term and final mark.
pub fn transposed_table(class: &ClassData) -> Table {
    let schema = &class.schema;
    let students = &class.students;

    let mut header = vec!["Assignment".to_owned()];
    header.extend(students.iter().map(|s| s.name.clone()));
    let mut table = vec![header];

    for (i, a) in schema.assignments.iter().enumerate() {
        let mut row = vec![format!("{} ({}) - {} pts", a.name, a.date, decimal(a.total))];
        row.extend(students.iter().map(|s| format_mark(s.marks[i])));
        table.push(row);
    }
    for (i, c) in schema.categories.iter().enumerate() {
        let mut row = vec![format!("{} % (weight: {}%)", c.name, decimal(c.weight))];
        row.extend(students.iter().map(|s| format_mark(s.category_marks[i])));
        table.push(row);
    }
    for i in 0..schema.num_terms {
        let mut row = vec![format!("Term {} %", i + 1)];
        row.extend(students.iter().map(|s| format_mark(s.term_marks[i])));
        table.push(row);
    }
    let mut row = vec!["Final Mark %".to_owned()];
    row.extend(students.iter().map(|s| format_mark(s.final_mark)));
    table.push(row);
    table
}

/// One row per converted class.
pub fn summary_table(summaries: &[ClassSummary]) -> Table {
    let mut table: Table = vec![[
        "Class Code",
        "Class Description",
        "Number of Students",
        "Number of Assignments",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()];
    for s in summaries {
        table.push(vec![
            s.class_code.clone(),
            s.class_description.clone(),
            s.num_students.to_string(),
            s.num_assignments.to_string(),
        ]);
    }
    table
}
