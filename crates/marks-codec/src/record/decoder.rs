use marks_buffers::{BufferError, Reader};

use super::StudentRecord;
use crate::constants::{
    CATEGORY_SLOTS, COMMENT_SLOTS, HOMEFORM_WIDTH, MARK_SLOTS, NAME_WIDTH, PHONE_WIDTH,
    RECORD_SIZE, STUDENT_NUMBER_WIDTH, TERM_SLOTS,
};
use crate::pascal::read_pascal_str;
use crate::real48::{read_real48, Mark};

/// Decodes one record from the cursor.
///
/// Checks that a whole record is available before reading any field, so a
/// short buffer fails with [`BufferError::EndOfBuffer`] and consumes nothing.
/// On success exactly [`RECORD_SIZE`] bytes are consumed.
pub fn decode_record(reader: &mut Reader<'_>) -> Result<StudentRecord, BufferError> {
    reader.ensure(RECORD_SIZE)?;

    let name = read_pascal_str(reader, NAME_WIDTH)?;
    let student_number = read_pascal_str(reader, STUDENT_NUMBER_WIDTH)?;
    let homeform = read_pascal_str(reader, HOMEFORM_WIDTH)?;
    let marks = read_reals(reader, MARK_SLOTS)?;
    let category_marks = read_reals(reader, CATEGORY_SLOTS)?;
    let term_marks = read_reals(reader, TERM_SLOTS)?;
    let final_mark = read_real48(reader)?;
    let phone = read_pascal_str(reader, PHONE_WIDTH)?;
    let absences = reader.i16_le()?;
    let lates = reader.i16_le()?;
    let mut comments = [0i16; COMMENT_SLOTS];
    for comment in comments.iter_mut() {
        *comment = reader.i16_le()?;
    }

    Ok(StudentRecord {
        name,
        student_number,
        homeform,
        marks,
        category_marks,
        term_marks,
        final_mark,
        phone,
        absences,
        lates,
        comments,
    })
}

fn read_reals(reader: &mut Reader<'_>, count: usize) -> Result<Vec<Mark>, BufferError> {
    (0..count).map(|_| read_real48(reader)).collect()
}
