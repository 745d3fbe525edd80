//! On-disk class fixtures.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use marks_codec::RECORD_SIZE;

/// Encodes a mark the way the marks program stores it. Test-only.
pub fn real48(value: f64) -> [u8; 6] {
    let abs = value.abs();
    let mut exponent = 0i32;
    while abs / 2f64.powi(exponent) >= 2.0 {
        exponent += 1;
    }
    while abs / 2f64.powi(exponent) < 1.0 {
        exponent -= 1;
    }
    let mut mantissa = ((abs / 2f64.powi(exponent) - 1.0) * (1u64 << 39) as f64).round() as u64;
    if value < 0.0 {
        mantissa |= 1 << 39;
    }
    let mut out = [0u8; 6];
    out[0] = (exponent + 129) as u8;
    out[1..].copy_from_slice(&mantissa.to_le_bytes()[..5]);
    out
}

pub struct Student<'a> {
    pub name: &'a str,
    pub number: &'a str,
    pub homeform: &'a str,
    pub marks: &'a [(usize, f64)],
    pub category_marks: &'a [(usize, f64)],
    pub term_marks: &'a [(usize, f64)],
    pub final_mark: Option<f64>,
    pub phone: &'a str,
    pub absences: i16,
    pub lates: i16,
}

impl Student<'_> {
    pub fn blank() -> Student<'static> {
        Student {
            name: "",
            number: "",
            homeform: "",
            marks: &[],
            category_marks: &[],
            term_marks: &[],
            final_mark: None,
            phone: "",
            absences: 0,
            lates: 0,
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; RECORD_SIZE];
        put_str(&mut out[0..21], self.name);
        put_str(&mut out[21..32], self.number);
        put_str(&mut out[32..43], self.homeform);
        for &(slot, v) in self.marks {
            out[43 + slot * 6..49 + slot * 6].copy_from_slice(&real48(v));
        }
        for &(slot, v) in self.category_marks {
            out[643 + slot * 6..649 + slot * 6].copy_from_slice(&real48(v));
        }
        for &(slot, v) in self.term_marks {
            out[703 + slot * 6..709 + slot * 6].copy_from_slice(&real48(v));
        }
        if let Some(v) = self.final_mark {
            out[763..769].copy_from_slice(&real48(v));
        }
        put_str(&mut out[769..782], self.phone);
        out[782..784].copy_from_slice(&self.absences.to_le_bytes());
        out[784..786].copy_from_slice(&self.lates.to_le_bytes());
        out
    }
}

fn put_str(field: &mut [u8], text: &str) {
    field[0] = text.len() as u8;
    field[1..1 + text.len()].copy_from_slice(text.as_bytes());
}

pub const SCHEMA: &str = "4.0
secret
ICS4M1-1
CS 12, PERIOD 3
0
0
1
2
3
TESTS
60
ASSIGN
40
T1
2024-01-15
Unit 1 test
35
1
28.5
A1
2024-01-20
Loops
20
2
16
Q1
2024-01-25
Quiz
10
0
7.5
";

/// Writes `{stem}.rec` and `{stem}.txt` into `dir`.
pub fn write_class(dir: &Path, stem: &str, schema: &str, students: &[Student<'_>]) {
    let rec: Vec<u8> = students.iter().flat_map(Student::bytes).collect();
    fs::write(dir.join(format!("{stem}.rec")), rec).unwrap();
    fs::write(dir.join(format!("{stem}.txt")), schema).unwrap();
}

pub fn sample_students() -> Vec<Student<'static>> {
    vec![
        Student {
            name: "CHAN BOBBY",
            number: "312345678",
            homeform: "12A",
            marks: &[(0, 30.0), (1, 17.0), (2, 8.5)],
            category_marks: &[(0, 85.5), (1, 85.0)],
            term_marks: &[(0, 81.5)],
            final_mark: Some(82.0),
            phone: "416-555-0101",
            absences: 3,
            lates: 1,
        },
        Student::blank(),
        Student {
            name: "O'NEIL, PAT",
            number: "312345679",
            homeform: "12B",
            marks: &[(0, 33.0), (2, 999.0)],
            category_marks: &[(0, 94.5)],
            term_marks: &[],
            final_mark: None,
            phone: "",
            absences: -1,
            lates: 0,
        },
    ]
}
