use time::{Date, macros::format_description};
use crate::contact::{ContactField, ContactRequest};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_COMPANY_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 32;
pub const MAX_DATE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field {field} exceeds maximum length of {max}")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Preferred date must use YYYY-MM-DD")]
    InvalidDate,
}

pub const fn max_length(field: ContactField) -> usize {
    match field {
        ContactField::Name => MAX_NAME_LENGTH,
        ContactField::Email => MAX_EMAIL_LENGTH,
        ContactField::Company => MAX_COMPANY_LENGTH,
        ContactField::Phone => MAX_PHONE_LENGTH,
        ContactField::PreferredDate => MAX_DATE_LENGTH,
        ContactField::Message => MAX_MESSAGE_LENGTH,
    }
}

/// The check a browser performs for `required` inputs: any value, whitespace included, satisfies it.
pub fn validate_required(contact: &ContactRequest) -> Result<(), ValidationError> {
    first_missing(contact, |value| value.is_empty())
}

pub fn validate_contact_request(contact: &ContactRequest) -> Result<(), ValidationError> {
    first_missing(contact, |value| value.trim().is_empty())?;

    for field in ContactField::ALL {
        let max = max_length(field);
        if contact.get(field).chars().count() > max {
            return Err(ValidationError::FieldTooLong { field: field.name(), max });
        }
    }

    validate_email(contact.email.trim())?;

    if !contact.preferred_date.is_empty() {
        validate_date(&contact.preferred_date)?;
    }

    Ok(())
}

fn first_missing(contact: &ContactRequest, is_missing: impl Fn(&str) -> bool) -> Result<(), ValidationError> {
    match ContactField::ALL.iter().find(|field| field.is_required() && is_missing(contact.get(**field))) {
        Some(field) => Err(ValidationError::MissingField(field.name())),
        None => Ok(()),
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
    Date::parse(date, format_description!("[year]-[month]-[day]"))
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidDate)
}
