//! Procedure eligibility rules
//!
//! Decides whether a patient may undergo a procedure, given the visits
//! already in the ledger and the current date:
//!
//! | Procedure            | Rule                                                    |
//! |----------------------|---------------------------------------------------------|
//! | Chest X-Ray          | always eligible                                         |
//! | Obstetric Ultrasound | female and younger than 60                              |
//! | Prostate Ultrasound  | male                                                    |
//! | CT Scan              | no obstetric or prostate ultrasound in the last 3 months |

use crate::store::VisitLedger;
use crate::types::{Patient, ProcedureType};
use chrono::{Months, NaiveDate};
use log::debug;
use std::fmt;

/// Patients this age or older cannot have an obstetric ultrasound
pub const OBSTETRIC_AGE_LIMIT: i32 = 60;

/// Calendar months an ultrasound blocks a CT scan for
pub const CT_SCAN_LOOKBACK_MONTHS: u32 = 3;

/// Why a procedure was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Procedure is restricted to the other sex
    SexMismatch,
    /// Patient is at or above the age limit
    AgeLimit { age: i32 },
    /// An ultrasound on this date falls inside the CT scan lookback window
    RecentUltrasound { on: NaiveDate },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::SexMismatch => write!(f, "procedure not available for patient's sex"),
            DenialReason::AgeLimit { age } => {
                write!(f, "patient age {} is not below {}", age, OBSTETRIC_AGE_LIMIT)
            }
            DenialReason::RecentUltrasound { on } => {
                write!(f, "ultrasound performed on {}", on.format("%d/%m/%Y"))
            }
        }
    }
}

/// Outcome of an eligibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Denied(DenialReason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Checks whether `patient` may undergo `procedure` on `today`
pub fn check(
    patient: &Patient,
    procedure: ProcedureType,
    ledger: &VisitLedger,
    today: NaiveDate,
) -> Eligibility {
    let outcome = match procedure {
        ProcedureType::ChestXRay => Eligibility::Eligible,
        ProcedureType::ObstetricUltrasound => {
            let age = patient.age_on(today);
            if !patient.sex.is_female() {
                Eligibility::Denied(DenialReason::SexMismatch)
            } else if age >= OBSTETRIC_AGE_LIMIT {
                Eligibility::Denied(DenialReason::AgeLimit { age })
            } else {
                Eligibility::Eligible
            }
        }
        ProcedureType::ProstateUltrasound => {
            if patient.sex.is_male() {
                Eligibility::Eligible
            } else {
                Eligibility::Denied(DenialReason::SexMismatch)
            }
        }
        ProcedureType::CtScan => match last_recent_ultrasound(patient, ledger, today) {
            Some(on) => Eligibility::Denied(DenialReason::RecentUltrasound { on }),
            None => Eligibility::Eligible,
        },
    };

    debug!(
        "Eligibility of {} for {}: {:?}",
        patient.national_id, procedure, outcome
    );
    outcome
}

/// Boolean form of [`check`]
pub fn is_eligible(
    patient: &Patient,
    procedure: ProcedureType,
    ledger: &VisitLedger,
    today: NaiveDate,
) -> bool {
    check(patient, procedure, ledger, today).is_eligible()
}

/// Earliest ultrasound date that does not block a CT scan on `today`
///
/// Subtracts calendar months, so a cutoff landing on a day the month lacks
/// moves to that month's last day (31 May gives 28 or 29 February).
/// Ultrasounds strictly after this date block the scan.
pub fn ct_scan_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(CT_SCAN_LOOKBACK_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Latest blocking ultrasound for the patient, if any
fn last_recent_ultrasound(
    patient: &Patient,
    ledger: &VisitLedger,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let cutoff = ct_scan_cutoff(today);
    ledger
        .iter()
        .filter(|v| v.is_for(patient) && v.procedure.is_ultrasound() && v.date > cutoff)
        .map(|v| v.date)
        .max()
}
