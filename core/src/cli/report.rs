use crate::parsing::format_date;
use crate::reporting::ProcedureTally;
use crate::store::{PatientRegistry, VisitLedger};
use chrono::NaiveDate;
use std::fmt;

/// Listing of every registered patient
pub struct PatientListReport<'a> {
    registry: &'a PatientRegistry,
}

impl<'a> PatientListReport<'a> {
    pub fn new(registry: &'a PatientRegistry) -> Self {
        Self { registry }
    }
}

impl<'a> fmt::Display for PatientListReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Patient List ===")?;
        for patient in self.registry.iter() {
            writeln!(
                f,
                "Name: {}, Date of Birth: {}",
                patient.full_name,
                format_date(patient.birth_date)
            )?;
        }
        Ok(())
    }
}

/// Listing of the visits performed on one date
pub struct VisitListReport<'a> {
    ledger: &'a VisitLedger,
    date: NaiveDate,
}

impl<'a> VisitListReport<'a> {
    pub fn new(ledger: &'a VisitLedger, date: NaiveDate) -> Self {
        Self { ledger, date }
    }
}

impl<'a> fmt::Display for VisitListReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Visits on {} ===", format_date(self.date))?;
        for visit in self.ledger.on_date(self.date) {
            writeln!(
                f,
                "Patient: {}, Procedure: {}",
                visit.patient.full_name, visit.procedure
            )?;
        }
        Ok(())
    }
}

/// What a [`TallyReport`] is measuring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyKind {
    /// Number of visits
    Count,
    /// Total minutes
    Duration,
}

/// Per-procedure summary for a period
pub struct TallyReport<'a> {
    tally: &'a ProcedureTally,
    kind: TallyKind,
}

impl<'a> TallyReport<'a> {
    pub fn new(tally: &'a ProcedureTally, kind: TallyKind) -> Self {
        Self { tally, kind }
    }
}

impl<'a> fmt::Display for TallyReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TallyKind::Count => writeln!(f, "Number of procedures in the period:")?,
            TallyKind::Duration => writeln!(f, "Total procedure time in the period:")?,
        }
        for (procedure, value) in self.tally.iter() {
            match self.kind {
                TallyKind::Count => writeln!(f, "{}: {}", procedure, value)?,
                TallyKind::Duration => writeln!(f, "{}: {} minutes", procedure, value)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Patient, ProcedureType, Sex, Visit};
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_patient_list_format() {
        let mut registry = PatientRegistry::new();
        registry.register(Patient::new(
            "Ana Souza",
            "Maria Souza",
            date(1990, 6, 5),
            Sex::Female,
            "111".into(),
        ));

        let output = PatientListReport::new(&registry).to_string();

        assert!(output.starts_with("=== Patient List ===\n"));
        assert!(output.contains("Name: Ana Souza, Date of Birth: 05/06/1990\n"));
    }

    #[test]
    fn test_visit_list_only_shows_requested_date() {
        let patient = Rc::new(Patient::new(
            "Ana Souza",
            "Maria Souza",
            date(1990, 6, 5),
            Sex::Female,
            "111".into(),
        ));
        let mut ledger = VisitLedger::new();
        ledger.append(Visit::new(
            patient.clone(),
            date(2024, 5, 20),
            ProcedureType::ChestXRay,
        ));
        ledger.append(Visit::new(patient, date(2024, 5, 21), ProcedureType::CtScan));

        let output = VisitListReport::new(&ledger, date(2024, 5, 20)).to_string();

        assert!(output.contains("=== Visits on 20/05/2024 ==="));
        assert!(output.contains("Patient: Ana Souza, Procedure: Chest X-Ray"));
        assert!(!output.contains("CT Scan"));
    }

    #[test]
    fn test_tally_report_format() {
        let mut tally = ProcedureTally::new();
        tally.add(ProcedureType::CtScan, 60);

        let counts = TallyReport::new(&tally, TallyKind::Count).to_string();
        assert!(counts.contains("Number of procedures in the period:"));
        assert!(counts.contains("CT Scan: 60\n"));

        let minutes = TallyReport::new(&tally, TallyKind::Duration).to_string();
        assert!(minutes.contains("Total procedure time in the period:"));
        assert!(minutes.contains("Chest X-Ray: 0 minutes"));
        assert!(minutes.contains("Obstetric Ultrasound: 0 minutes"));
        assert!(minutes.contains("Prostate Ultrasound: 0 minutes"));
        assert!(minutes.contains("CT Scan: 60 minutes"));
    }
}
