use super::{Patient, ProcedureType};
use chrono::NaiveDate;
use std::rc::Rc;

/// Completed procedure performed on a registered patient
///
/// The patient is shared with the registry, not owned by the visit.
#[derive(Debug, Clone)]
pub struct Visit {
    pub patient: Rc<Patient>,
    pub date: NaiveDate,
    pub procedure: ProcedureType,
}

impl Visit {
    /// Creates a new Visit
    pub fn new(patient: Rc<Patient>, date: NaiveDate, procedure: ProcedureType) -> Self {
        Self {
            patient,
            date,
            procedure,
        }
    }

    /// Checks whether this visit was performed on the given patient
    pub fn is_for(&self, patient: &Patient) -> bool {
        *self.patient == *patient
    }
}
