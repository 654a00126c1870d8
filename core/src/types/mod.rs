//! Core type definitions for the clinic
//!
//! This module provides the fundamental types used throughout the radclinic library:
//! - [`Patient`]: Registered patient, identified by [`NationalId`]
//! - [`Sex`]: Patient sex (M/F, anything else unspecified)
//! - [`ProcedureType`]: The four imaging procedures, with labels and durations
//! - [`Visit`]: A procedure performed on a patient on a given date
//! - [`DateRange`]: Inclusive date range used by listings and reports

mod enums;
mod patient;
mod range;
mod visit;

pub use enums::{ProcedureType, Sex};
pub use patient::{NationalId, Patient};
pub use range::DateRange;
pub use visit::Visit;
