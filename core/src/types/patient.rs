use super::Sex;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::hash::{Hash, Hasher};

/// National identification number of a patient
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NationalId(String);

impl NationalId {
    /// Creates a new NationalId from operator text
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NationalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered patient
///
/// Two patients are the same entity when their national IDs match; the
/// other fields take no part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Patient {
    /// Full name
    pub full_name: String,

    /// Mother's name
    pub mother_name: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Sex
    pub sex: Sex,

    /// National ID
    pub national_id: NationalId,
}

impl Patient {
    /// Creates a new Patient
    pub fn new(
        full_name: impl Into<String>,
        mother_name: impl Into<String>,
        birth_date: NaiveDate,
        sex: Sex,
        national_id: NationalId,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            mother_name: mother_name.into(),
            birth_date,
            sex,
            national_id,
        }
    }

    /// Age in years on the given date
    ///
    /// Counts calendar years only: a patient born on 31/12/1990 is 34 on
    /// 01/01/2024. Eligibility outcomes depend on this exact arithmetic.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        today.year() - self.birth_date.year()
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.national_id == other.national_id
    }
}

impl Eq for Patient {}

impl Hash for Patient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.national_id.hash(state);
    }
}
