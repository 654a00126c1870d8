use chrono::NaiveDate;
use std::fmt;

/// Inclusive calendar date range
///
/// A range whose start falls after its end is allowed and contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new DateRange
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Checks if the date lies within [start, end]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns whether no date can satisfy the range
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%d/%m/%Y"),
            self.end.format("%d/%m/%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
        assert!(range.contains(date(2024, 3, 1)));
        assert!(range.contains(date(2024, 3, 15)));
        assert!(range.contains(date(2024, 3, 31)));
        assert!(!range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_reversed_range_contains_nothing() {
        let range = DateRange::new(date(2024, 3, 31), date(2024, 3, 1));
        assert!(range.is_empty());
        assert!(!range.contains(date(2024, 3, 15)));
        assert!(!range.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2024, 1, 5), date(2024, 2, 10));
        assert_eq!(range.to_string(), "05/01/2024 - 10/02/2024");
    }
}
