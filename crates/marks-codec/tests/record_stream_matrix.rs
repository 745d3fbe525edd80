//! Record iteration over whole `.rec` images.

mod common;

use std::io::{self, Read};

use common::{rec_file, RecordFixture};
use marks_codec::{
    open_records, parse_schema, RecordError, RecordRead, RecordReader, StudentRecord, RECORD_SIZE,
};
use proptest::prelude::*;

fn sample_class() -> Vec<RecordFixture> {
    vec![
        RecordFixture::new("CHAN BOBBY")
            .student_number("312345678")
            .homeform("12A")
            .mark(0, 17.0)
            .mark(1, 8.5)
            .mark(2, 3.0)
            .category_mark(0, 85.0)
            .term_mark(0, 81.5)
            .final_mark(82.0)
            .phone("416-555-0101")
            .attendance(3, 1)
            .comments([12, 0, 0, 0, 40]),
        RecordFixture::new(""),
        RecordFixture::new("NGUYEN AMY")
            .student_number("312345679")
            .homeform("12B")
            .mark(0, 19.5)
            .mark(2, 2.5)
            .final_mark(91.25)
            .attendance(-1, 0),
    ]
}

#[test]
fn decodes_every_field() {
    let data = rec_file(&sample_class());
    let students: Vec<StudentRecord> = RecordReader::new(&data[..]).collect();
    assert_eq!(students.len(), 2);

    let bobby = &students[0];
    assert_eq!(bobby.name, "CHAN BOBBY");
    assert_eq!(bobby.student_number, "312345678");
    assert_eq!(bobby.homeform, "12A");
    assert_eq!(&bobby.marks[..4], &[Some(17.0), Some(8.5), Some(3.0), None]);
    assert_eq!(bobby.category_marks[0], Some(85.0));
    assert_eq!(bobby.term_marks[0], Some(81.5));
    assert_eq!(bobby.final_mark, Some(82.0));
    assert_eq!(bobby.phone, "416-555-0101");
    assert_eq!((bobby.absences, bobby.lates), (3, 1));
    assert_eq!(bobby.comments, [12, 0, 0, 0, 40]);

    let amy = &students[1];
    assert_eq!(amy.name, "NGUYEN AMY");
    assert_eq!(amy.marks[1], None);
    assert_eq!(amy.final_mark, Some(91.25));
    assert_eq!(amy.absences, -1);
}

#[test]
fn next_record_reports_blank_slots() {
    let data = rec_file(&sample_class());
    let mut reader = RecordReader::new(&data[..]);
    let mut names = Vec::new();
    loop {
        match reader.next_record() {
            RecordRead::Record(record) => names.push(record.name),
            RecordRead::EndOfRecords => break,
        }
    }
    assert_eq!(names, ["CHAN BOBBY", "", "NGUYEN AMY"]);
    assert_eq!(reader.slots_read(), 3);
}

#[test]
fn schema_counts_select_meaningful_slots() {
    let schema = parse_schema(&common::schema_text(1, 2, 3)).unwrap();
    let data = rec_file(&sample_class());
    let bobby = RecordReader::new(&data[..]).next().unwrap();
    assert_eq!(bobby.marks_for(&schema), &[Some(17.0), Some(8.5), Some(3.0)]);
    assert_eq!(bobby.category_marks_for(&schema), &[Some(85.0), None]);
    assert_eq!(bobby.term_marks_for(&schema), &[Some(81.5)]);
}

#[test]
fn trailing_fragment_is_reported_only_by_strict_read() {
    let mut data = rec_file(&sample_class()[..1]);
    data.extend_from_slice(&[0x41; 100]);

    let mut strict = RecordReader::new(&data[..]);
    assert!(matches!(strict.try_next_record(), Ok(RecordRead::Record(_))));
    assert!(matches!(
        strict.try_next_record(),
        Err(RecordError::TrailingBytes(100))
    ));

    let mut lenient = RecordReader::new(&data[..]);
    assert!(matches!(lenient.next_record(), RecordRead::Record(_)));
    assert_eq!(lenient.next_record(), RecordRead::EndOfRecords);
    assert_eq!(lenient.next_record(), RecordRead::EndOfRecords);
}

/// Fails after handing out `ok` bytes.
struct Flaky<'a> {
    data: &'a [u8],
    ok: usize,
}

impl Read for Flaky<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.ok == 0 {
            return Err(io::Error::other("disk went away"));
        }
        let n = buf.len().min(self.ok).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        self.ok -= n;
        Ok(n)
    }
}

#[test]
fn io_failure_mid_record_ends_iteration() {
    let data = rec_file(&sample_class());
    let flaky = Flaky {
        data: &data,
        ok: RECORD_SIZE + 40,
    };
    let students: Vec<StudentRecord> = RecordReader::new(flaky).collect();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "CHAN BOBBY");

    let mut strict = RecordReader::new(Flaky {
        data: &data,
        ok: 10,
    });
    assert!(matches!(
        strict.try_next_record(),
        Err(RecordError::Io { slot: 0, .. })
    ));
    assert!(matches!(strict.try_next_record(), Ok(RecordRead::EndOfRecords)));
}

#[test]
fn open_records_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ICS4M1-1.rec");
    std::fs::write(&path, rec_file(&sample_class())).unwrap();

    let names: Vec<String> = open_records(&path).unwrap().map(|s| s.name).collect();
    assert_eq!(names, ["CHAN BOBBY", "NGUYEN AMY"]);
}

#[test]
fn students_serialize_to_json() {
    let data = rec_file(&sample_class()[..1]);
    let bobby = RecordReader::new(&data[..]).next().unwrap();
    let json = serde_json::to_value(&bobby).unwrap();
    assert_eq!(json["name"], "CHAN BOBBY");
    assert_eq!(json["marks"][0], 17.0);
    assert!(json["marks"][3].is_null());
    assert_eq!(json["comments"][4], 40);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn whole_records_then_garbage(
        names in proptest::collection::vec("[A-Z ]{0,20}", 0..5),
        garbage in proptest::collection::vec(any::<u8>(), 0..RECORD_SIZE),
    ) {
        let fixtures: Vec<RecordFixture> =
            names.iter().map(|n| RecordFixture::new(n).mark(0, 10.0)).collect();
        let mut data = rec_file(&fixtures);
        data.extend_from_slice(&garbage);

        let mut reader = RecordReader::new(&data[..]);
        let decoded: Vec<String> = reader.by_ref().map(|s| s.name).collect();
        let expected: Vec<String> = names
            .iter()
            .map(|n| n.trim_end().to_owned())
            .filter(|n| !n.is_empty())
            .collect();
        prop_assert_eq!(decoded, expected);
        prop_assert_eq!(reader.slots_read(), names.len());
    }
}
