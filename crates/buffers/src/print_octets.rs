//! Debug utilities for printing octets as hex strings.

/// Formats a byte slice as a hex string for debugging.
///
/// # Arguments
///
/// * `octets` - The byte slice to format.
/// * `max` - Maximum number of bytes to display.
///
/// # Example
///
/// ```
/// use marks_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x85, 0x00, 0x0a, 0xff], 16), "85 00 0a ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    if octets.is_empty() || max == 0 {
        return String::new();
    }

    let mut result = format!("{:02x}", octets[0]);
    for &byte in octets.iter().take(max).skip(1) {
        result.push_str(&format!(" {:02x}", byte));
    }

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats bytes as a classic offset / hex / ASCII dump.
///
/// Each line covers 16 bytes: a 4-digit hex offset, the hex octets padded
/// to a fixed column, and printable ASCII with `.` for everything else.
///
/// # Example
///
/// ```
/// use marks_buffers::hex_dump;
///
/// let dump = hex_dump(b"\x03ABC");
/// assert!(dump.starts_with("0000: 03 41 42 43"));
/// assert!(dump.trim_end().ends_with(".ABC"));
/// ```
pub fn hex_dump(octets: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in octets.chunks(16).enumerate() {
        let hex = print_octets(chunk, 16);
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if (32..127).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        out.push_str(&format!("{:04x}: {:<48} {}\n", line * 16, hex, ascii));
    }
    out
}
