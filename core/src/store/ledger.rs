use crate::types::{DateRange, Visit};
use chrono::NaiveDate;

/// Append-only record of visits in creation order
///
/// The ledger does not validate what it is given; eligibility is checked
/// before [`VisitLedger::append`] is called.
#[derive(Debug, Default)]
pub struct VisitLedger {
    visits: Vec<Visit>,
}

impl VisitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Visit> + '_ {
        self.visits.iter()
    }

    /// Visits performed on exactly the given date
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Visit> + '_ {
        self.visits.iter().filter(move |v| v.date == date)
    }

    /// Visits performed within the inclusive range
    pub fn in_range(&self, range: DateRange) -> impl Iterator<Item = &Visit> + '_ {
        self.visits.iter().filter(move |v| range.contains(v.date))
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
