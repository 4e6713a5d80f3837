use crate::persistence::{PilotBookingRecord, SubmitError};

pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSize {
    UpToTen,
    TenToFifty,
    FiftyToHundred,
    OverHundred,
}

impl TeamSize {
    pub const ALL: [TeamSize; 4] = [
        TeamSize::UpToTen,
        TeamSize::TenToFifty,
        TeamSize::FiftyToHundred,
        TeamSize::OverHundred,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TeamSize::UpToTen => "1-10",
            TeamSize::TenToFifty => "10-50",
            TeamSize::FiftyToHundred => "50-100",
            TeamSize::OverHundred => "100+",
        }
    }

    pub fn from_value(value: &str) -> Option<TeamSize> {
        TeamSize::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    LeadEngineer,
    Cto,
    ProductManager,
    Developer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::LeadEngineer, Role::Cto, Role::ProductManager, Role::Developer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::LeadEngineer => "Lead Engineer",
            Role::Cto => "CTO",
            Role::ProductManager => "Product Manager",
            Role::Developer => "Developer",
        }
    }

    pub fn from_value(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Email,
    Company,
    ContactNumber,
    TeamSize,
    Role,
    Problem,
}

impl BookingField {
    /// Value of the `name`/`id` attribute on the input.
    pub fn input_name(self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Company => "company",
            BookingField::ContactNumber => "contactNumber",
            BookingField::TeamSize => "teamSize",
            BookingField::Role => "role",
            BookingField::Problem => "problem",
        }
    }

    pub fn is_required(self) -> bool {
        self != BookingField::Problem
    }
}

/// Raw field values as typed. Selects hold the option value, `""` when unselected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PilotBookingForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub contact_number: String,
    pub team_size: String,
    pub role: String,
    pub problem: String,
}

impl PilotBookingForm {
    fn slot(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Company => &mut self.company,
            BookingField::ContactNumber => &mut self.contact_number,
            BookingField::TeamSize => &mut self.team_size,
            BookingField::Role => &mut self.role,
            BookingField::Problem => &mut self.problem,
        }
    }

    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Company => &self.company,
            BookingField::ContactNumber => &self.contact_number,
            BookingField::TeamSize => &self.team_size,
            BookingField::Role => &self.role,
            BookingField::Problem => &self.problem,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        *self.slot(field) = value;
    }

    pub fn team_size(&self) -> Option<TeamSize> {
        TeamSize::from_value(&self.team_size)
    }

    pub fn role(&self) -> Option<Role> {
        Role::from_value(&self.role)
    }

    pub fn is_empty(&self) -> bool {
        *self == PilotBookingForm::default()
    }

    pub fn to_record(&self) -> PilotBookingRecord {
        PilotBookingRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            contact_number: self.contact_number.clone(),
            team_size: self.team_size.clone(),
            role: self.role.clone(),
            problem: self.problem.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingState {
    pub form: PilotBookingForm,
    pub status: SubmissionStatus,
    pub phase: BookingPhase,
    pub notice: Option<&'static str>,
}

impl BookingState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn update(&mut self, field: BookingField, value: String) {
        self.form.set(field, value);
    }

    /// Flips to in-flight and hands back the row to insert.
    /// Returns `None` if a submission is already running or the booking is done.
    pub fn begin_submit(&mut self) -> Option<PilotBookingRecord> {
        if self.is_submitting() || self.phase == BookingPhase::Submitted {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.notice = None;
        Some(self.form.to_record())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        self.status = SubmissionStatus::Idle;
        match outcome {
            Ok(()) => {
                self.form = PilotBookingForm::default();
                self.phase = BookingPhase::Submitted;
                self.notice = None;
            }
            Err(_) => {
                self.notice = Some(FAILURE_NOTICE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingState {
        let mut state = BookingState::default();
        state.update(BookingField::Name, "Arastu Sharma".to_string());
        state.update(BookingField::Email, "arastu@example.com".to_string());
        state.update(BookingField::Company, "Shodh AI".to_string());
        state.update(BookingField::ContactNumber, "+91-912345678".to_string());
        state.update(BookingField::TeamSize, "50-100".to_string());
        state.update(BookingField::Role, "Lead Engineer".to_string());
        state.update(BookingField::Problem, "Reducing ramp-up time".to_string());
        state
    }

    #[test]
    fn option_values_parse() {
        for size in TeamSize::ALL {
            assert_eq!(TeamSize::from_value(size.as_str()), Some(size));
        }
        for role in Role::ALL {
            assert_eq!(Role::from_value(role.as_str()), Some(role));
        }
        assert_eq!(TeamSize::from_value(""), None);
        assert_eq!(Role::from_value("Intern"), None);
    }

    #[test]
    fn only_problem_is_optional() {
        assert!(!BookingField::Problem.is_required());
        assert!(BookingField::ContactNumber.is_required());
        assert_eq!(BookingField::ContactNumber.input_name(), "contactNumber");
    }

    #[test]
    fn fields_map_onto_record() {
        let state = filled();
        assert_eq!(state.form.team_size(), Some(TeamSize::FiftyToHundred));
        assert_eq!(state.form.role(), Some(Role::LeadEngineer));

        let record = state.form.to_record();
        assert_eq!(record.contact_number, "+91-912345678");
        assert_eq!(record.team_size, "50-100");
        assert_eq!(record.problem, "Reducing ramp-up time");
    }

    #[test]
    fn successful_submit_clears_form_and_completes() {
        let mut state = filled();
        assert_eq!(state.status, SubmissionStatus::Idle);

        let record = state.begin_submit();
        assert!(record.is_some());
        assert!(state.is_submitting());

        state.finish(Ok(()));
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(state.form.is_empty());
        assert_eq!(state.phase, BookingPhase::Submitted);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn failed_submit_keeps_fields_and_allows_retry() {
        let mut state = filled();
        let before = state.form.clone();

        state.begin_submit();
        state.finish(Err(SubmitError::Network("offline".to_string())));

        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.form, before);
        assert_eq!(state.phase, BookingPhase::Editing);
        assert_eq!(state.notice, Some(FAILURE_NOTICE));

        assert_eq!(state.begin_submit(), Some(before.to_record()));
        assert_eq!(state.notice, None);
    }

    #[test]
    fn rejected_and_network_failures_look_the_same() {
        let mut rejected = filled();
        rejected.begin_submit();
        rejected.finish(Err(SubmitError::Rejected { status: 400, message: "bad".to_string() }));

        let mut offline = filled();
        offline.begin_submit();
        offline.finish(Err(SubmitError::Network("offline".to_string())));

        assert_eq!(rejected, offline);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn no_submit_after_completion() {
        let mut state = filled();
        state.begin_submit();
        state.finish(Ok(()));
        assert!(state.begin_submit().is_none());
    }
}
