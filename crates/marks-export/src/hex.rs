//! Raw byte walkthrough of a `.rec` file.

use std::fmt::{self, Write};

use marks_buffers::{hex_dump, print_octets, Reader};
use marks_codec::constants::{HOMEFORM_WIDTH, NAME_WIDTH, STUDENT_NUMBER_WIDTH};
use marks_codec::read_pascal_str;

/// Mark bytes shown after the string header.
const MARK_PREVIEW: usize = 50;

/// Dumps `data` and decodes the string header of the first record.
///
/// Useful when a file does not line up: the offsets show exactly where the
/// name, student number and homeform fields were taken from.
pub fn render_hex_walk(data: &[u8]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_hex_walk(&mut out, data);
    out
}

fn write_hex_walk(out: &mut String, data: &[u8]) -> fmt::Result {
    out.push_str(&hex_dump(data));
    writeln!(out, "\n{} bytes", data.len())?;
    writeln!(out, "\nFirst record header:")?;

    let mut reader = Reader::new(data);
    for (label, width) in [
        ("Name", NAME_WIDTH),
        ("Student #", STUDENT_NUMBER_WIDTH),
        ("Homeform", HOMEFORM_WIDTH),
    ] {
        let offset = reader.x;
        let length = reader.peek().ok();
        match read_pascal_str(&mut reader, width) {
            Ok(text) => writeln!(
                out,
                "  {:04x} {:<10} {:?} (length byte {})",
                offset,
                label,
                text,
                length.unwrap_or_default()
            )?,
            Err(err) => {
                return writeln!(out, "  {:04x} {:<10} <{}>", offset, label, err);
            }
        }
    }

    writeln!(out, "\nMarks start at {:04x}:", reader.x)?;
    writeln!(out, "  {}", print_octets(&data[reader.x..], MARK_PREVIEW))
}
