//! Fixture builders for gradebook files.
#![allow(dead_code)]

use marks_codec::constants::{
    CATEGORY_SLOTS, COMMENT_SLOTS, HOMEFORM_WIDTH, MARK_SLOTS, NAME_WIDTH, PHONE_WIDTH,
    STUDENT_NUMBER_WIDTH, TERM_SLOTS,
};
use marks_codec::RECORD_SIZE;

/// Encodes a value the way the marks program stores it. Test-only.
pub fn real48(value: Option<f64>) -> [u8; 6] {
    let Some(value) = value else {
        return [0; 6];
    };
    if value == 0.0 {
        return [0; 6];
    }
    let negative = value < 0.0;
    let abs = value.abs();
    let mut exponent = abs.log2().floor() as i32;
    while abs / 2f64.powi(exponent) >= 2.0 {
        exponent += 1;
    }
    while abs / 2f64.powi(exponent) < 1.0 {
        exponent -= 1;
    }
    let mut mantissa = ((abs / 2f64.powi(exponent) - 1.0) * (1u64 << 39) as f64).round() as u64;
    if mantissa == 1 << 39 {
        mantissa = 0;
        exponent += 1;
    }
    if negative {
        mantissa |= 1 << 39;
    }
    let mut out = [0u8; 6];
    out[0] = (exponent + 129) as u8;
    out[1..].copy_from_slice(&mantissa.to_le_bytes()[..5]);
    out
}

/// Encodes a `string[width]` field, padding with spaces.
pub fn pascal(text: &str, width: usize) -> Vec<u8> {
    let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
    let mut out = vec![bytes.len().min(width) as u8];
    out.extend(bytes.iter().take(width));
    out.resize(width + 1, b' ');
    out
}

/// Builder for one 796-byte student slot.
#[derive(Clone)]
pub struct RecordFixture {
    pub name: String,
    pub student_number: String,
    pub homeform: String,
    pub marks: Vec<Option<f64>>,
    pub category_marks: Vec<Option<f64>>,
    pub term_marks: Vec<Option<f64>>,
    pub final_mark: Option<f64>,
    pub phone: String,
    pub absences: i16,
    pub lates: i16,
    pub comments: [i16; COMMENT_SLOTS],
}

impl RecordFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            student_number: String::new(),
            homeform: String::new(),
            marks: vec![None; MARK_SLOTS],
            category_marks: vec![None; CATEGORY_SLOTS],
            term_marks: vec![None; TERM_SLOTS],
            final_mark: None,
            phone: String::new(),
            absences: 0,
            lates: 0,
            comments: [0; COMMENT_SLOTS],
        }
    }

    pub fn student_number(mut self, value: &str) -> Self {
        self.student_number = value.to_owned();
        self
    }

    pub fn homeform(mut self, value: &str) -> Self {
        self.homeform = value.to_owned();
        self
    }

    pub fn mark(mut self, slot: usize, value: f64) -> Self {
        self.marks[slot] = Some(value);
        self
    }

    pub fn category_mark(mut self, slot: usize, value: f64) -> Self {
        self.category_marks[slot] = Some(value);
        self
    }

    pub fn term_mark(mut self, slot: usize, value: f64) -> Self {
        self.term_marks[slot] = Some(value);
        self
    }

    pub fn final_mark(mut self, value: f64) -> Self {
        self.final_mark = Some(value);
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.phone = value.to_owned();
        self
    }

    pub fn attendance(mut self, absences: i16, lates: i16) -> Self {
        self.absences = absences;
        self.lates = lates;
        self
    }

    pub fn comments(mut self, comments: [i16; COMMENT_SLOTS]) -> Self {
        self.comments = comments;
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_SIZE);
        out.extend(pascal(&self.name, NAME_WIDTH));
        out.extend(pascal(&self.student_number, STUDENT_NUMBER_WIDTH));
        out.extend(pascal(&self.homeform, HOMEFORM_WIDTH));
        for mark in self
            .marks
            .iter()
            .chain(&self.category_marks)
            .chain(&self.term_marks)
        {
            out.extend(real48(*mark));
        }
        out.extend(real48(self.final_mark));
        out.extend(pascal(&self.phone, PHONE_WIDTH));
        out.extend(self.absences.to_le_bytes());
        out.extend(self.lates.to_le_bytes());
        for comment in self.comments {
            out.extend(comment.to_le_bytes());
        }
        assert_eq!(out.len(), RECORD_SIZE);
        out
    }
}

/// Concatenates slots into a `.rec` image.
pub fn rec_file(records: &[RecordFixture]) -> Vec<u8> {
    records.iter().flat_map(RecordFixture::bytes).collect()
}

/// Schema text for a class with the given counts, one value per line.
pub fn schema_text(num_terms: usize, num_categories: usize, num_assignments: usize) -> String {
    let mut lines = vec![
        "4.0".to_owned(),
        "secret".to_owned(),
        "ICS4M1-1".to_owned(),
        "CS 12 - PERIOD 3".to_owned(),
        "0".to_owned(),
        "0".to_owned(),
        num_terms.to_string(),
        num_categories.to_string(),
        num_assignments.to_string(),
    ];
    for c in 0..num_categories {
        lines.push(format!("CAT{}", c + 1));
        lines.push("20".to_owned());
    }
    for a in 0..num_assignments {
        lines.push(format!("A{}", a + 1));
        lines.push(format!("2024-02-{:02}", a + 1));
        lines.push(format!("Assignment {}", a + 1));
        lines.push("20".to_owned());
        lines.push(((a % num_categories.max(1)) + usize::from(num_categories > 0)).to_string());
        lines.push("15.5".to_owned());
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
