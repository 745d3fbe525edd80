//! Field widths and slot counts of the `studentrec40` record layout.

/// Bytes in one encoded Real48 value.
pub const REAL48_SIZE: usize = 6;

/// Content width of the student name (`string[20]`).
pub const NAME_WIDTH: usize = 20;
/// Content width of the student number (`string[10]`).
pub const STUDENT_NUMBER_WIDTH: usize = 10;
/// Content width of the homeform (`string[10]`).
pub const HOMEFORM_WIDTH: usize = 10;
/// Content width of the phone number (`string[12]`).
pub const PHONE_WIDTH: usize = 12;

/// Assignment mark slots per record.
pub const MARK_SLOTS: usize = 100;
/// Category mark slots per record.
pub const CATEGORY_SLOTS: usize = 10;
/// Term mark slots per record.
pub const TERM_SLOTS: usize = 10;
/// Comment code slots per record.
pub const COMMENT_SLOTS: usize = 5;

/// Size of one student record in the `.rec` file.
pub const RECORD_SIZE: usize = (1 + NAME_WIDTH)
    + (1 + STUDENT_NUMBER_WIDTH)
    + (1 + HOMEFORM_WIDTH)
    + (MARK_SLOTS + CATEGORY_SLOTS + TERM_SLOTS + 1) * REAL48_SIZE
    + (1 + PHONE_WIDTH)
    + 2
    + 2
    + COMMENT_SLOTS * 2;

const _: () = assert!(RECORD_SIZE == 796);
