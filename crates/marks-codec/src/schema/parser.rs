use std::fs;
use std::path::Path;
use std::str::FromStr;

use marks_buffers::latin1_bytes;

use super::{Assignment, Category, ClassSchema, SchemaError};
use crate::constants::{CATEGORY_SLOTS, MARK_SLOTS, TERM_SLOTS};

/// Lines before the first category.
pub const HEADER_LINES: usize = 9;

const VERSION_LINE: usize = 0;
const CLASS_CODE_LINE: usize = 2;
const CLASS_DESCRIPTION_LINE: usize = 3;
const NUM_TERMS_LINE: usize = 6;
const NUM_CATEGORIES_LINE: usize = 7;
const NUM_ASSIGNMENTS_LINE: usize = 8;

const LINES_PER_CATEGORY: usize = 2;
const LINES_PER_ASSIGNMENT: usize = 6;

/// Trimmed schema lines with typed, position-checked access.
struct Lines {
    lines: Vec<String>,
}

impl Lines {
    fn text(&self, index: usize) -> Result<String, SchemaError> {
        self.lines
            .get(index)
            .cloned()
            .ok_or(SchemaError::MissingLines {
                needed: index + 1,
                found: self.lines.len(),
            })
    }

    fn number<T: FromStr>(&self, index: usize, expected: &'static str) -> Result<T, SchemaError> {
        let value = self.text(index)?;
        value
            .trim_start()
            .parse()
            .map_err(|_| SchemaError::InvalidNumber {
                line: index + 1,
                expected,
                value,
            })
    }

    fn count(&self, index: usize, field: &'static str, max: usize) -> Result<usize, SchemaError> {
        let count = self.number(index, "a count")?;
        if count > max {
            return Err(SchemaError::CountOutOfRange { field, count, max });
        }
        Ok(count)
    }
}

/// Parses schema text.
///
/// # Example
///
/// ```
/// use marks_codec::parse_schema;
///
/// let text = "4.0\nsecret\nICS4M1-1\nCS 12\n0\n0\n1\n1\n1\n\
///             TESTS\n100\nT1\n2024-01-15\nUnit test\n35\n1\n28.5\n";
/// let schema = parse_schema(text).unwrap();
/// assert_eq!(schema.class_code, "ICS4M1-1");
/// assert_eq!(schema.assignments[0].category_in(&schema).unwrap().name, "TESTS");
/// ```
pub fn parse_schema(text: &str) -> Result<ClassSchema, SchemaError> {
    parse_schema_lines(text.lines())
}

/// Parses schema lines in their fixed positional order.
///
/// Fails if fewer lines are present than the declared counts require or if a
/// numeric line does not parse. Lines past the last assignment are ignored.
pub fn parse_schema_lines<I, S>(lines: I) -> Result<ClassSchema, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = Lines {
        lines: lines
            .into_iter()
            .map(|line| line.as_ref().trim_end().to_owned())
            .collect(),
    };
    if lines.lines.len() < HEADER_LINES {
        return Err(SchemaError::MissingLines {
            needed: HEADER_LINES,
            found: lines.lines.len(),
        });
    }

    let version = lines.number(VERSION_LINE, "a version number")?;
    let class_code = lines.text(CLASS_CODE_LINE)?;
    let class_description = lines.text(CLASS_DESCRIPTION_LINE)?;
    let num_terms = lines.count(NUM_TERMS_LINE, "terms", TERM_SLOTS)?;
    let num_categories = lines.count(NUM_CATEGORIES_LINE, "categories", CATEGORY_SLOTS)?;
    let num_assignments = lines.count(NUM_ASSIGNMENTS_LINE, "assignments", MARK_SLOTS)?;

    let needed = HEADER_LINES
        + LINES_PER_CATEGORY * num_categories
        + LINES_PER_ASSIGNMENT * num_assignments;
    if lines.lines.len() < needed {
        return Err(SchemaError::MissingLines {
            needed,
            found: lines.lines.len(),
        });
    }

    let mut idx = HEADER_LINES;
    let mut categories = Vec::with_capacity(num_categories);
    for _ in 0..num_categories {
        categories.push(Category {
            name: lines.text(idx)?,
            weight: lines.number(idx + 1, "a category weight")?,
        });
        idx += LINES_PER_CATEGORY;
    }

    let mut assignments = Vec::with_capacity(num_assignments);
    for _ in 0..num_assignments {
        assignments.push(Assignment {
            name: lines.text(idx)?,
            date: lines.text(idx + 1)?,
            description: lines.text(idx + 2)?,
            total: lines.number(idx + 3, "assignment total points")?,
            category: lines.number(idx + 4, "a category index")?,
            average: lines.number(idx + 5, "an assignment average")?,
        });
        idx += LINES_PER_ASSIGNMENT;
    }

    Ok(ClassSchema {
        version,
        class_code,
        class_description,
        num_terms,
        num_categories,
        num_assignments,
        categories,
        assignments,
    })
}

/// Reads and parses a schema file.
///
/// The file is decoded as Latin-1, so stray bytes from the legacy editor
/// never abort parsing.
pub fn read_schema_file(path: impl AsRef<Path>) -> Result<ClassSchema, SchemaError> {
    let bytes = fs::read(path.as_ref())?;
    parse_schema(&latin1_bytes(bytes))
}
