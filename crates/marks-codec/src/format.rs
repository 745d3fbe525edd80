//! Display rule for decoded marks.

use crate::real48::Mark;

/// Values at or above this are placeholders written by the marks program.
pub const NO_MARK_CEILING: f64 = 999.0;

/// Returns `true` when the slot holds a displayable mark.
///
/// The sentinel, negative values and anything at or above
/// [`NO_MARK_CEILING`] all mean "no mark".
pub fn is_recorded(mark: Mark) -> bool {
    matches!(mark, Some(v) if (0.0..NO_MARK_CEILING).contains(&v))
}

/// Formats a mark to one decimal place, or as an empty string.
///
/// # Example
///
/// ```
/// use marks_codec::format_mark;
///
/// assert_eq!(format_mark(Some(17.123)), "17.1");
/// assert_eq!(format_mark(Some(-1.0)), "");
/// assert_eq!(format_mark(Some(999.0)), "");
/// assert_eq!(format_mark(None), "");
/// ```
pub fn format_mark(mark: Mark) -> String {
    format_mark_or(mark, "")
}

/// Formats a mark to one decimal place, or as `placeholder`.
pub fn format_mark_or(mark: Mark, placeholder: &str) -> String {
    match mark {
        Some(v) if is_recorded(mark) => format!("{:.1}", v),
        _ => placeholder.to_owned(),
    }
}
