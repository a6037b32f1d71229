//! Native input validity checks run on submit
//!
//! These mirror what a host form does for a required field and an email-typed
//! input: a value must be present, and an email must have a syntactically
//! valid local part and domain. There are no other rules.

/// Reason a field failed native validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityIssue {
    /// Required field is empty
    ValueMissing,
    /// Email has no `@`
    MissingAt,
    /// Email has nothing before the `@`
    MissingLocalPart,
    /// Email has nothing after the `@`
    MissingDomain,
    /// Email has disallowed characters or a malformed domain
    Malformed,
}

impl ValidityIssue {
    /// Hint shown under the field
    pub fn message(&self) -> &'static str {
        match self {
            ValidityIssue::ValueMissing => "Please fill out this field.",
            ValidityIssue::MissingAt => "Please include an '@' in the email address.",
            ValidityIssue::MissingLocalPart => "Please enter a part followed by '@'.",
            ValidityIssue::MissingDomain => "Please enter a part following '@'.",
            ValidityIssue::Malformed => "Please enter a valid email address.",
        }
    }
}

/// Check a required value
pub fn check_required(value: &str) -> Result<(), ValidityIssue> {
    if value.is_empty() {
        Err(ValidityIssue::ValueMissing)
    } else {
        Ok(())
    }
}

/// Check a required email value. Leading and trailing whitespace is ignored,
/// matching how an email input sanitizes its value.
pub fn check_email(value: &str) -> Result<(), ValidityIssue> {
    let value = value.trim();
    check_required(value)?;

    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidityIssue::MissingAt);
    };
    if local.is_empty() {
        return Err(ValidityIssue::MissingLocalPart);
    }
    if domain.is_empty() {
        return Err(ValidityIssue::MissingDomain);
    }
    if !local.chars().all(is_local_char) {
        return Err(ValidityIssue::Malformed);
    }
    if !domain.split('.').all(is_domain_label) {
        return Err(ValidityIssue::Malformed);
    }
    Ok(())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

/// Label: 1-63 alphanumerics or hyphens, not starting or ending with a hyphen
fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
