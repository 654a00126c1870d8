use std::fmt;

/// Patient sex as recorded at registration
///
/// Only `M` and `F` carry meaning for eligibility; any other text is kept
/// as [`Sex::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Unspecified,
}

impl Sex {
    /// Returns whether this is male
    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Male)
    }

    /// Returns whether this is female
    pub fn is_female(&self) -> bool {
        matches!(self, Sex::Female)
    }

    /// Returns short string representation
    pub fn short_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unspecified => "",
        }
    }

    /// Parses sex from operator input, case-insensitive
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("m") {
            Sex::Male
        } else if s.eq_ignore_ascii_case("f") {
            Sex::Female
        } else {
            Sex::Unspecified
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Unspecified => write!(f, "unspecified"),
            _ => write!(f, "{}", self.short_str()),
        }
    }
}

/// Imaging procedure offered by the clinic
///
/// Each variant carries its display label and nominal duration, so
/// validation, visit creation and reporting all key on the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcedureType {
    ChestXRay,
    ObstetricUltrasound,
    ProstateUltrasound,
    CtScan,
}

impl ProcedureType {
    /// All procedure types in menu order
    pub const ALL: [ProcedureType; 4] = [
        ProcedureType::ChestXRay,
        ProcedureType::ObstetricUltrasound,
        ProcedureType::ProstateUltrasound,
        ProcedureType::CtScan,
    ];

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            ProcedureType::ChestXRay => "Chest X-Ray",
            ProcedureType::ObstetricUltrasound => "Obstetric Ultrasound",
            ProcedureType::ProstateUltrasound => "Prostate Ultrasound",
            ProcedureType::CtScan => "CT Scan",
        }
    }

    /// Returns the nominal duration in minutes, used for reporting
    pub fn duration_minutes(&self) -> u32 {
        match self {
            ProcedureType::ChestXRay => 15,
            ProcedureType::ObstetricUltrasound => 30,
            ProcedureType::ProstateUltrasound => 30,
            ProcedureType::CtScan => 60,
        }
    }

    /// Returns whether this is one of the ultrasound studies that block a CT scan
    pub fn is_ultrasound(&self) -> bool {
        matches!(
            self,
            ProcedureType::ObstetricUltrasound | ProcedureType::ProstateUltrasound
        )
    }

    /// Position in [`ProcedureType::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ProcedureType::ChestXRay => 0,
            ProcedureType::ObstetricUltrasound => 1,
            ProcedureType::ProstateUltrasound => 2,
            ProcedureType::CtScan => 3,
        }
    }

    /// Maps a 1-based menu choice to a procedure
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1..=4 => Some(Self::ALL[(choice - 1) as usize]),
            _ => None,
        }
    }
}

impl fmt::Display for ProcedureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
