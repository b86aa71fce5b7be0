use super::constants::*;
use thiserror::Error;

/// Form fields, keyed by their element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

/// Display text is what the page shows to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 3 characters")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Failed to send message. Please try again.")]
    SubmissionFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field outcome of [`ContactMessage::validate`]; every field is listed so
/// stale errors can be cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub results: Vec<(ContactField, Option<ContactError>)>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, err)| err.is_none())
    }

    pub fn error_for(&self, field: ContactField) -> Option<&ContactError> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, err)| err.as_ref())
    }

    pub fn errors(&self) -> impl Iterator<Item = (ContactField, &ContactError)> {
        self.results
            .iter()
            .filter_map(|(f, err)| err.as_ref().map(|e| (*f, e)))
    }
}

impl ContactMessage {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Validation {
        let results = ContactField::ALL
            .iter()
            .map(|&field| (field, self.check(field)))
            .collect();
        Validation { results }
    }

    fn check(&self, field: ContactField) -> Option<ContactError> {
        let value = self.value(field);
        let too_short = |min: usize| value.trim().chars().count() < min;
        match field {
            ContactField::Name => too_short(NAME_MIN_CHARS).then_some(ContactError::NameTooShort),
            ContactField::Email => (!is_plausible_email(value)).then_some(ContactError::InvalidEmail),
            ContactField::Subject => {
                too_short(SUBJECT_MIN_CHARS).then_some(ContactError::SubjectTooShort)
            }
            ContactField::Message => {
                too_short(MESSAGE_MIN_CHARS).then_some(ContactError::MessageTooShort)
            }
        }
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot in the
/// domain with something on both sides of it.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Outcome of the simulated send for a uniform roll in [0, 1).
pub fn simulated_submission(roll: f64) -> Result<(), ContactError> {
    if roll > SUBMISSION_FAILURE_RATE {
        Ok(())
    } else {
        Err(ContactError::SubmissionFailed)
    }
}
