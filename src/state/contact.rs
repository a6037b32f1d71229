//! Contact identifier value, tied to the active input mode

use super::phone::{Country, PhoneNumber};
use super::validity::{check_email, check_required, ValidityIssue};

/// Which identifier format the field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Email,
    Phone,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Email => InputMode::Phone,
            InputMode::Phone => InputMode::Email,
        }
    }

    /// Field label
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Email => "Email address",
            InputMode::Phone => "Phone Number",
        }
    }

    /// Copy of the link that switches to the other mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            InputMode::Email => "Use a phone number",
            InputMode::Phone => "Use an email instead",
        }
    }
}

/// The identifier held by the form. The variant is the mode, so a value can
/// never outlive a mode switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactInput {
    Email(String),
    Phone(PhoneNumber),
}

impl ContactInput {
    /// Empty input for the given mode
    pub fn empty(mode: InputMode, country: &'static Country) -> Self {
        match mode {
            InputMode::Email => ContactInput::Email(String::new()),
            InputMode::Phone => ContactInput::Phone(PhoneNumber::new(country)),
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            ContactInput::Email(_) => InputMode::Email,
            ContactInput::Phone(_) => InputMode::Phone,
        }
    }

    /// Identifier as it would be submitted. Email values are trimmed.
    pub fn identifier(&self) -> String {
        match self {
            ContactInput::Email(value) => value.trim().to_string(),
            ContactInput::Phone(phone) => phone.identifier(),
        }
    }

    /// Apply a typed character. Returns true if the value changed.
    pub fn input_char(&mut self, c: char) -> bool {
        match self {
            ContactInput::Email(value) => {
                if c.is_control() {
                    return false;
                }
                value.push(c);
                true
            }
            ContactInput::Phone(phone) => phone.push_digit(c),
        }
    }

    /// Delete the last character. Returns true if the value changed.
    pub fn backspace(&mut self) -> bool {
        match self {
            ContactInput::Email(value) => value.pop().is_some(),
            ContactInput::Phone(phone) => phone.pop_digit(),
        }
    }

    /// Empty the value, keeping the mode and the selected country
    pub fn clear(&mut self) {
        match self {
            ContactInput::Email(value) => value.clear(),
            ContactInput::Phone(phone) => phone.clear(),
        }
    }

    /// Text rendered inside the field
    pub fn display(&self) -> String {
        match self {
            ContactInput::Email(value) => value.clone(),
            ContactInput::Phone(phone) => phone.display(),
        }
    }

    /// Native validity check for the current mode
    pub fn check_validity(&self) -> Result<(), ValidityIssue> {
        match self {
            ContactInput::Email(value) => check_email(value),
            ContactInput::Phone(phone) => check_required(phone.national()),
        }
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        match self {
            ContactInput::Phone(phone) => Some(phone),
            ContactInput::Email(_) => None,
        }
    }

    pub fn phone_mut(&mut self) -> Option<&mut PhoneNumber> {
        match self {
            ContactInput::Phone(phone) => Some(phone),
            ContactInput::Email(_) => None,
        }
    }
}
