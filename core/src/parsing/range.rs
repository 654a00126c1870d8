use super::date::parse_date;
use crate::error::{ClinicError, Result};
use crate::types::DateRange;

/// Separator between the two dates of a period
pub const RANGE_SEPARATOR: &str = " - ";

/// Parses a `dd/MM/yyyy - dd/MM/yyyy` period
///
/// The text is split on the first ` - `; both halves must then parse as
/// dates. The start is not required to precede the end.
///
/// # Errors
///
/// Returns [`ClinicError::InvalidRange`] if the separator is missing, or
/// [`ClinicError::InvalidDate`] if either half is not a date
pub fn parse_date_range(s: &str) -> Result<DateRange> {
    let text = s.trim_end_matches(['\r', '\n']);
    let (start, end) = text
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| ClinicError::InvalidRange(text.to_string()))?;

    Ok(DateRange::new(parse_date(start)?, parse_date(end)?))
}
