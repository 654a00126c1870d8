//! Per-procedure aggregation over a date range
//!
//! Both queries are read-only scans of the ledger and report zero for any
//! procedure without matching visits.

use crate::store::VisitLedger;
use crate::types::{DateRange, ProcedureType};

/// One value per procedure type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcedureTally {
    values: [u32; 4],
}

impl ProcedureTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a procedure
    pub fn get(&self, procedure: ProcedureType) -> u32 {
        self.values[procedure.index()]
    }

    /// Adds `amount` to a procedure's value
    pub fn add(&mut self, procedure: ProcedureType, amount: u32) {
        self.values[procedure.index()] += amount;
    }

    /// Iterates over (procedure, value) in menu order
    pub fn iter(&self) -> impl Iterator<Item = (ProcedureType, u32)> + '_ {
        ProcedureType::ALL
            .into_iter()
            .map(move |p| (p, self.get(p)))
    }

    /// Sum over all procedures
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}

/// Number of visits of each procedure type within the range
pub fn count_by_type(ledger: &VisitLedger, range: DateRange) -> ProcedureTally {
    ledger
        .in_range(range)
        .fold(ProcedureTally::new(), |mut tally, visit| {
            tally.add(visit.procedure, 1);
            tally
        })
}

/// Total nominal minutes of each procedure type within the range
pub fn duration_by_type(ledger: &VisitLedger, range: DateRange) -> ProcedureTally {
    ledger
        .in_range(range)
        .fold(ProcedureTally::new(), |mut tally, visit| {
            tally.add(visit.procedure, visit.procedure.duration_minutes());
            tally
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Patient, Sex, Visit};
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_ledger(visits: &[(NaiveDate, ProcedureType)]) -> VisitLedger {
        let patient = Rc::new(Patient::new(
            "Ana",
            "Mother",
            date(1990, 6, 15),
            Sex::Female,
            "111".into(),
        ));
        let mut ledger = VisitLedger::new();
        for (on, procedure) in visits {
            ledger.append(Visit::new(patient.clone(), *on, *procedure));
        }
        ledger
    }

    fn march() -> DateRange {
        DateRange::new(date(2024, 3, 1), date(2024, 3, 31))
    }

    #[test]
    fn test_empty_ledger_reports_zeros() {
        let ledger = VisitLedger::new();

        let counts = count_by_type(&ledger, march());
        let minutes = duration_by_type(&ledger, march());

        assert_eq!(counts, ProcedureTally::new());
        assert_eq!(minutes, ProcedureTally::new());
        assert!(counts.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn test_counts_and_durations_per_type() {
        let ledger = make_ledger(&[
            (date(2024, 3, 1), ProcedureType::ChestXRay),
            (date(2024, 3, 5), ProcedureType::ChestXRay),
            (date(2024, 3, 10), ProcedureType::CtScan),
            (date(2024, 3, 31), ProcedureType::ObstetricUltrasound),
            (date(2024, 4, 1), ProcedureType::ProstateUltrasound),
            (date(2024, 2, 29), ProcedureType::CtScan),
        ]);

        let counts = count_by_type(&ledger, march());
        assert_eq!(counts.get(ProcedureType::ChestXRay), 2);
        assert_eq!(counts.get(ProcedureType::ObstetricUltrasound), 1);
        assert_eq!(counts.get(ProcedureType::ProstateUltrasound), 0);
        assert_eq!(counts.get(ProcedureType::CtScan), 1);
        assert_eq!(counts.total(), 4);

        let minutes = duration_by_type(&ledger, march());
        assert_eq!(minutes.get(ProcedureType::ChestXRay), 30);
        assert_eq!(minutes.get(ProcedureType::ObstetricUltrasound), 30);
        assert_eq!(minutes.get(ProcedureType::ProstateUltrasound), 0);
        assert_eq!(minutes.get(ProcedureType::CtScan), 60);
        assert_eq!(minutes.total(), 120);
    }

    #[test]
    fn test_reversed_range_reports_zeros() {
        let ledger = make_ledger(&[
            (date(2024, 3, 10), ProcedureType::ChestXRay),
            (date(2024, 3, 20), ProcedureType::CtScan),
        ]);
        let reversed = DateRange::new(date(2024, 3, 31), date(2024, 3, 1));

        assert_eq!(count_by_type(&ledger, reversed).total(), 0);
        assert_eq!(duration_by_type(&ledger, reversed).total(), 0);
    }

    #[test]
    fn test_iter_follows_menu_order() {
        let ledger = make_ledger(&[(date(2024, 3, 10), ProcedureType::CtScan)]);
        let order: Vec<_> = count_by_type(&ledger, march())
            .iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(order, ProcedureType::ALL.to_vec());
    }
}
