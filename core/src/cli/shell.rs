use super::report::{PatientListReport, TallyKind, TallyReport, VisitListReport};
use crate::clock::Clock;
use crate::error::Result;
use crate::parsing::{parse_date, parse_date_range};
use crate::store::Clinic;
use crate::types::{NationalId, Patient, ProcedureType, Sex};
use log::{debug, info};
use std::io::{BufRead, Write};

const MENU: &str = "\
=== Menu ===
1. Register Patient
2. Record Visit
3. List Patients
4. List Visits on a Date
5. Number of Procedures in a Period
6. Total Procedure Duration in a Period
7. Exit";

const INVALID_OPTION: &str = "Invalid option.";
const NO_PATIENTS: &str = "No patients registered.";
const PATIENT_NOT_FOUND: &str = "Patient not found.";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterPatient,
    RecordVisit,
    ListPatients,
    ListVisitsOnDate,
    CountProcedures,
    TotalDuration,
    Exit,
}

impl MenuChoice {
    /// Parses the operator's menu selection, 1 through 7
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::RegisterPatient),
            2 => Some(MenuChoice::RecordVisit),
            3 => Some(MenuChoice::ListPatients),
            4 => Some(MenuChoice::ListVisitsOnDate),
            5 => Some(MenuChoice::CountProcedures),
            6 => Some(MenuChoice::TotalDuration),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive menu loop over a line-based input and a text output
///
/// Malformed dates and periods abort the current action with a one-line
/// message; only I/O failures end the loop with an error. End of input
/// behaves like choosing Exit.
pub struct Shell<R, W, C> {
    clinic: Clinic,
    input: R,
    output: W,
    clock: C,
}

impl<R: BufRead, W: Write, C: Clock> Shell<R, W, C> {
    /// Creates a shell over an empty clinic
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self::with_clinic(Clinic::new(), input, output, clock)
    }

    pub fn with_clinic(clinic: Clinic, input: R, output: W, clock: C) -> Self {
        Self {
            clinic,
            input,
            output,
            clock,
        }
    }

    pub fn clinic(&self) -> &Clinic {
        &self.clinic
    }

    /// Consumes the shell, returning the clinic state and the output sink
    pub fn into_parts(self) -> (Clinic, W) {
        (self.clinic, self.output)
    }

    /// Runs the menu until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("End of input, leaving menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                writeln!(self.output, "{}", INVALID_OPTION)?;
                continue;
            };
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            }

            if let Err(e) = self.dispatch(choice) {
                if !e.is_input_error() {
                    return Err(e);
                }
                info!("{:?} aborted: {}", choice, e);
                writeln!(self.output, "{}", e)?;
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::RegisterPatient => self.register_patient(),
            MenuChoice::RecordVisit => self.record_visit(),
            MenuChoice::ListPatients => self.list_patients(),
            MenuChoice::ListVisitsOnDate => self.list_visits_on_date(),
            MenuChoice::CountProcedures => self.report_period(TallyKind::Count),
            MenuChoice::TotalDuration => self.report_period(TallyKind::Duration),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn register_patient(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Patient Registration ===")?;
        let Some(full_name) = self.prompt("Full Name: ")? else {
            return Ok(());
        };
        let Some(mother_name) = self.prompt("Mother's Name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Date of Birth (dd/MM/yyyy): ")? else {
            return Ok(());
        };
        let birth_date = parse_date(&birth_date)?;
        let Some(sex) = self.prompt("Sex (M/F): ")? else {
            return Ok(());
        };
        let Some(national_id) = self.prompt("National ID: ")? else {
            return Ok(());
        };

        let patient = Patient::new(
            full_name,
            mother_name,
            birth_date,
            Sex::from_str(&sex),
            NationalId::new(national_id),
        );
        let outcome = self.clinic.register_patient(patient);
        writeln!(self.output, "{}", outcome)?;
        Ok(())
    }

    fn record_visit(&mut self) -> Result<()> {
        if self.clinic.registry().is_empty() {
            writeln!(self.output, "{}", NO_PATIENTS)?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "=== Record Visit ===")?;
        let Some(national_id) = self.prompt("Patient National ID: ")? else {
            return Ok(());
        };
        let Some(patient) = self.clinic.find_patient(&NationalId::new(national_id)) else {
            writeln!(self.output, "{}", PATIENT_NOT_FOUND)?;
            return Ok(());
        };

        writeln!(self.output, "Available procedures:")?;
        for (i, procedure) in ProcedureType::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, procedure)?;
        }
        let Some(choice) = self.prompt("Choose the procedure (1-4): ")? else {
            return Ok(());
        };
        let Some(procedure) = choice
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(ProcedureType::from_menu_choice)
        else {
            writeln!(self.output, "{}", INVALID_OPTION)?;
            return Ok(());
        };

        let today = self.clock.today();
        let outcome = self.clinic.record_visit(&patient, procedure, today);
        writeln!(self.output, "{}", outcome)?;
        Ok(())
    }

    fn list_patients(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            PatientListReport::new(self.clinic.registry())
        )?;
        Ok(())
    }

    fn list_visits_on_date(&mut self) -> Result<()> {
        writeln!(self.output)?;
        let Some(date) = self.prompt("Date to list visits (dd/MM/yyyy): ")? else {
            return Ok(());
        };
        let date = parse_date(&date)?;

        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            VisitListReport::new(self.clinic.ledger(), date)
        )?;
        Ok(())
    }

    fn report_period(&mut self, kind: TallyKind) -> Result<()> {
        let label = match kind {
            TallyKind::Count => "Period to count procedures",
            TallyKind::Duration => "Period to total procedure time",
        };
        writeln!(self.output)?;
        let Some(period) = self.prompt(&format!("{} (dd/MM/yyyy - dd/MM/yyyy): ", label))? else {
            return Ok(());
        };
        let range = parse_date_range(&period)?;

        let tally = match kind {
            TallyKind::Count => self.clinic.count_by_type(range),
            TallyKind::Duration => self.clinic.duration_by_type(range),
        };
        writeln!(self.output)?;
        write!(self.output, "{}", TallyReport::new(&tally, kind))?;
        Ok(())
    }

    /// Writes `label` and reads one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
