use serde::Serialize;

use crate::constants::COMMENT_SLOTS;
use crate::real48::Mark;
use crate::schema::ClassSchema;

/// One decoded student slot.
///
/// The mark arrays always hold every slot of the binary layout (100, 10 and
/// 10); the schema says how many of them mean anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub student_number: String,
    pub homeform: String,
    pub marks: Vec<Mark>,
    pub category_marks: Vec<Mark>,
    pub term_marks: Vec<Mark>,
    pub final_mark: Mark,
    pub phone: String,
    pub absences: i16,
    pub lates: i16,
    pub comments: [i16; COMMENT_SLOTS],
}

impl StudentRecord {
    /// A slot with an empty name is a deleted student.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }

    /// Assignment marks the schema declares.
    pub fn marks_for(&self, schema: &ClassSchema) -> &[Mark] {
        prefix(&self.marks, schema.num_assignments)
    }

    /// Category marks the schema declares.
    pub fn category_marks_for(&self, schema: &ClassSchema) -> &[Mark] {
        prefix(&self.category_marks, schema.num_categories)
    }

    /// Term marks the schema declares.
    pub fn term_marks_for(&self, schema: &ClassSchema) -> &[Mark] {
        prefix(&self.term_marks, schema.num_terms)
    }
}

fn prefix(slots: &[Mark], count: usize) -> &[Mark] {
    &slots[..count.min(slots.len())]
}
