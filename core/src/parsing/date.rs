use crate::error::{ClinicError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Display pattern for dates, `dd/MM/yyyy`
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/MM/yyyy` date
///
/// Day and month must be two digits and the year four. A day past the end
/// of its month resolves to the month's last day, so `31/04/2024` reads
/// as 30 April and `29/02/2023` as 28 February. Days above 31 and months
/// outside 1-12 are rejected.
///
/// # Errors
///
/// Returns [`ClinicError::InvalidDate`] if the text is not a date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("Failed to compile regex")
    });

    let text = s.trim();
    let invalid = || ClinicError::InvalidDate(text.to_string());

    let caps = re.captures(text).ok_or_else(invalid)?;
    let day: u32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;

    if year < 1 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    // Walk back from the requested day to the last one the month has
    (1..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or_else(invalid)
}

/// Formats a date as `dd/MM/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("15/06/1990", date(1990, 6, 15))]
    #[case("01/01/2000", date(2000, 1, 1))]
    #[case("31/12/2024", date(2024, 12, 31))]
    #[case("29/02/2024", date(2024, 2, 29))]
    #[case(" 05/03/2021\r", date(2021, 3, 5))]
    fn test_parse_valid_dates(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case("31/04/2024", date(2024, 4, 30))]
    #[case("29/02/2023", date(2023, 2, 28))]
    #[case("31/02/2024", date(2024, 2, 29))]
    fn test_day_past_month_end_resolves_to_last_day(
        #[case] input: &str,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(parse_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("1/6/1990")]
    #[case("1990-06-15")]
    #[case("15/06/90")]
    #[case("32/01/2024")]
    #[case("00/01/2024")]
    #[case("15/13/2024")]
    #[case("15/00/2024")]
    #[case("15/06/0000")]
    #[case("ab/cd/efgh")]
    fn test_parse_invalid_dates(#[case] input: &str) {
        let err = parse_date(input).unwrap_err();
        assert!(matches!(err, ClinicError::InvalidDate(_)));
    }

    #[test]
    fn test_format_date_pads_fields() {
        assert_eq!(format_date(date(2024, 3, 5)), "05/03/2024");
    }
}
