use crate::types::{NationalId, Patient};
use std::fmt;
use std::rc::Rc;

/// Outcome of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The patient was added
    Registered,
    /// A patient with the same national ID already exists; nothing changed
    AlreadyRegistered,
}

impl Registration {
    pub fn is_registered(&self) -> bool {
        matches!(self, Registration::Registered)
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registration::Registered => write!(f, "Patient registered successfully."),
            Registration::AlreadyRegistered => write!(f, "Patient already registered."),
        }
    }
}

/// Registered patients in registration order
///
/// National IDs are unique. Patients are handed out as `Rc` so visits can
/// refer back to them.
#[derive(Debug, Default)]
pub struct PatientRegistry {
    patients: Vec<Rc<Patient>>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a patient unless its national ID is already taken
    pub fn register(&mut self, patient: Patient) -> Registration {
        if self.find_by_id(&patient.national_id).is_some() {
            return Registration::AlreadyRegistered;
        }
        self.patients.push(Rc::new(patient));
        Registration::Registered
    }

    /// Looks up a patient by exact national ID
    pub fn find_by_id(&self, id: &NationalId) -> Option<&Rc<Patient>> {
        self.patients.iter().find(|p| &p.national_id == id)
    }

    /// Iterates over all patients in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.patients.iter().map(|p| &**p)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
