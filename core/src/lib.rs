pub mod cli;
pub mod clock;
pub mod eligibility;
pub mod error;
pub mod parsing;
pub mod reporting;
pub mod store;
pub mod types;

pub use cli::shell::Shell;
pub use clock::{Clock, FixedClock, SystemClock};
pub use eligibility::{DenialReason, Eligibility};
pub use error::{ClinicError, Result};
pub use reporting::ProcedureTally;
pub use store::{Clinic, PatientRegistry, Registration, VisitLedger, VisitOutcome};
pub use types::*;
