//! View state of the contact form and its transitions
//!
//! Submission and dialog form one state machine:
//!
//! ```text
//! Idle --begin_submit--> Submitting(ticket) --resolve(ticket)--> Resolved(outcome)
//!   ^                                                                  |
//!   +----------------------------- dismiss ---------------------------+
//! ```
//!
//! The dialog is visible exactly when the phase is `Resolved`, so the outcome
//! can only be read while the dialog is shown.

use super::contact::{ContactInput, InputMode};
use super::focus::{CountryPicker, FormFocus};
use super::phone::Country;
use super::validity::ValidityIssue;

/// Result of a (simulated) submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Identifies one submission cycle so late results can be discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting(SubmissionTicket),
    Resolved(Outcome),
}

/// Why a submit action did not start a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is still outstanding
    InFlight,
    /// The result dialog is open
    DialogOpen,
    /// The field failed native validation
    Invalid(ValidityIssue),
}

/// A submission that has been accepted and must be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub identifier: String,
}

/// Contact form view state
#[derive(Debug, Clone)]
pub struct ContactFormState {
    input: ContactInput,
    default_country: &'static Country,
    phase: SubmissionPhase,
    next_ticket: u64,
    validity_hint: Option<ValidityIssue>,
    pub focus: FormFocus,
    pub country_picker: CountryPicker,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::idle(InputMode::Email, Country::fallback())
    }
}

impl ContactFormState {
    /// Initial state: empty field in `mode`, no submission, dialog hidden
    pub fn idle(mode: InputMode, default_country: &'static Country) -> Self {
        Self {
            input: ContactInput::empty(mode, default_country),
            default_country,
            phase: SubmissionPhase::Idle,
            next_ticket: 0,
            validity_hint: None,
            focus: FormFocus::Identifier,
            country_picker: CountryPicker::default(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    /// Current identifier value
    pub fn identifier(&self) -> String {
        self.input.identifier()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting(_))
    }

    /// Outcome shown by the dialog, `None` while the dialog is hidden
    pub fn dialog(&self) -> Option<Outcome> {
        match self.phase {
            SubmissionPhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog().is_some()
    }

    /// Native validation hint from the last rejected submit
    pub fn validity_hint(&self) -> Option<ValidityIssue> {
        self.validity_hint
    }

    /// Flip between email and phone, always clearing the identifier
    pub fn toggle_mode(&mut self) -> InputMode {
        let mode = self.mode().toggled();
        self.input = ContactInput::empty(mode, self.default_country);
        self.validity_hint = None;
        self.country_picker.close();
        self.focus = self.focus.for_mode(mode);
        tracing::debug!("Input mode switched to {mode:?}");
        mode
    }

    /// Apply a typed character to the field
    pub fn input_char(&mut self, c: char) {
        if self.input.input_char(c) {
            self.validity_hint = None;
        }
    }

    pub fn backspace(&mut self) {
        if self.input.backspace() {
            self.validity_hint = None;
        }
    }

    /// Select the phone country (no-op in email mode)
    pub fn select_country(&mut self, country: &'static Country) {
        if let Some(phone) = self.input.phone_mut() {
            phone.set_country(country);
            self.validity_hint = None;
            tracing::debug!("Phone country set to {}", country.iso2);
        }
        self.country_picker.close();
    }

    /// Start a submission cycle if the form is idle and the field is valid
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejection> {
        match self.phase {
            SubmissionPhase::Submitting(_) => return Err(SubmitRejection::InFlight),
            SubmissionPhase::Resolved(_) => return Err(SubmitRejection::DialogOpen),
            SubmissionPhase::Idle => {}
        }

        if let Err(issue) = self.input.check_validity() {
            self.validity_hint = Some(issue);
            return Err(SubmitRejection::Invalid(issue));
        }

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.phase = SubmissionPhase::Submitting(ticket);
        self.validity_hint = None;
        self.country_picker.close();

        Ok(PendingSubmission {
            ticket,
            identifier: self.input.identifier(),
        })
    }

    /// Record the outcome of the outstanding submission and show the dialog.
    /// Returns false (and changes nothing) for a ticket that is not outstanding.
    pub fn resolve(&mut self, ticket: SubmissionTicket, outcome: Outcome) -> bool {
        if self.phase != SubmissionPhase::Submitting(ticket) {
            tracing::warn!("Ignoring result for stale submission #{}", ticket.id());
            return false;
        }

        if outcome.is_success() {
            self.input.clear();
        }
        self.phase = SubmissionPhase::Resolved(outcome);
        true
    }

    /// Hide the dialog. Returns the outcome that was shown, if any.
    pub fn dismiss(&mut self) -> Option<Outcome> {
        let outcome = self.dialog()?;
        self.phase = SubmissionPhase::Idle;
        Some(outcome)
    }

    /// Drop the outstanding submission without recording an outcome
    pub fn cancel_submission(&mut self) -> Option<SubmissionTicket> {
        match self.phase {
            SubmissionPhase::Submitting(ticket) => {
                self.phase = SubmissionPhase::Idle;
                Some(ticket)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl ContactFormState {
    /// Replace the email value verbatim (no-op in phone mode)
    pub fn set_email(&mut self, value: impl Into<String>) {
        if let ContactInput::Email(current) = &mut self.input {
            *current = value.into();
            self.validity_hint = None;
        }
    }
}
