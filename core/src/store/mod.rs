//! In-memory clinic state
//!
//! [`Clinic`] owns the patient registry and the visit ledger for the life
//! of the process. Nothing is persisted.

mod ledger;
mod registry;

pub use ledger::VisitLedger;
pub use registry::{PatientRegistry, Registration};

use crate::eligibility::{self, DenialReason, Eligibility};
use crate::reporting::{self, ProcedureTally};
use crate::types::{DateRange, NationalId, Patient, ProcedureType, Visit};
use chrono::NaiveDate;
use log::info;
use std::fmt;
use std::rc::Rc;

/// Outcome of an attempt to record a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The visit passed eligibility and was appended to the ledger
    Recorded,
    /// The procedure was refused; the ledger is unchanged
    Ineligible(DenialReason),
}

impl VisitOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, VisitOutcome::Recorded)
    }
}

impl fmt::Display for VisitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitOutcome::Recorded => write!(f, "Visit recorded successfully."),
            VisitOutcome::Ineligible(_) => {
                write!(f, "This procedure cannot be performed for the patient.")
            }
        }
    }
}

/// Registry and ledger of a single clinic
#[derive(Debug, Default)]
pub struct Clinic {
    registry: PatientRegistry,
    ledger: VisitLedger,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &PatientRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &VisitLedger {
        &self.ledger
    }

    /// Registers a patient, keeping any existing record with the same ID
    pub fn register_patient(&mut self, patient: Patient) -> Registration {
        let id = patient.national_id.clone();
        let outcome = self.registry.register(patient);
        if outcome.is_registered() {
            info!("Registered patient {}", id);
        } else {
            info!("Patient {} already registered", id);
        }
        outcome
    }

    /// Looks up a patient by exact national ID
    pub fn find_patient(&self, id: &NationalId) -> Option<Rc<Patient>> {
        self.registry.find_by_id(id).cloned()
    }

    /// Records `procedure` for `patient` on `today` if the patient is eligible
    pub fn record_visit(
        &mut self,
        patient: &Rc<Patient>,
        procedure: ProcedureType,
        today: NaiveDate,
    ) -> VisitOutcome {
        match eligibility::check(patient, procedure, &self.ledger, today) {
            Eligibility::Eligible => {
                self.ledger
                    .append(Visit::new(Rc::clone(patient), today, procedure));
                info!(
                    "Recorded {} for patient {} on {}",
                    procedure, patient.national_id, today
                );
                VisitOutcome::Recorded
            }
            Eligibility::Denied(reason) => {
                info!(
                    "Refused {} for patient {}: {}",
                    procedure, patient.national_id, reason
                );
                VisitOutcome::Ineligible(reason)
            }
        }
    }

    /// Visit counts per procedure within the range
    pub fn count_by_type(&self, range: DateRange) -> ProcedureTally {
        reporting::count_by_type(&self.ledger, range)
    }

    /// Total minutes per procedure within the range
    pub fn duration_by_type(&self, range: DateRange) -> ProcedureTally {
        reporting::duration_by_type(&self.ledger, range)
    }
}
