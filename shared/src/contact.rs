use serde::{Serialize, Deserialize};
use thiserror::Error;

pub const FORM_ENDPOINT: &str = "/";
pub const FORM_METHOD: &str = "POST";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const FORM_NAME: &str = "contact";
pub const FORM_NAME_FIELD: &str = "form-name";
pub const HONEYPOT_FIELD: &str = "bot-field";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EncodingError {
    #[error("Malformed percent-encoding in {0}")]
    InvalidEncoding(String),
    #[error("Missing {FORM_NAME_FIELD} field")]
    MissingFormName,
    #[error("Unknown form: {0}")]
    UnknownForm(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    PreferredDate,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Phone,
        ContactField::PreferredDate,
        ContactField::Message,
    ];

    /// Name of the field on the wire and in the DOM.
    pub const fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Phone => "phone",
            ContactField::PreferredDate => "preferredDate",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub const fn is_required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub preferred_date: String,
    pub message: String,
}

impl ContactRequest {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Phone => &self.phone,
            ContactField::PreferredDate => &self.preferred_date,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::PreferredDate => &mut self.preferred_date,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A contact request as it travels to the form handler, including the
/// form discriminator and the honeypot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub form_name: String,
    pub honeypot: String,
    pub contact: ContactRequest,
}

impl FormSubmission {
    pub fn new(contact: ContactRequest) -> Self {
        Self {
            form_name: FORM_NAME.to_string(),
            honeypot: String::new(),
            contact,
        }
    }

    pub fn with_honeypot(mut self, value: impl Into<String>) -> Self {
        self.honeypot = value.into();
        self
    }

    pub fn is_bot(&self) -> bool {
        !self.honeypot.is_empty()
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2 + ContactField::ALL.len());
        pairs.push((FORM_NAME_FIELD, self.form_name.as_str()));
        pairs.push((HONEYPOT_FIELD, self.honeypot.as_str()));
        pairs.extend(ContactField::ALL.iter().map(|field| (field.name(), self.contact.get(*field))));
        pairs
    }

    pub fn encode(&self) -> String {
        encode_form(&self.pairs())
    }

    pub fn decode(body: &str) -> Result<Self, EncodingError> {
        let mut form_name = None;
        let mut honeypot = String::new();
        let mut contact = ContactRequest::default();

        for (key, value) in decode_form(body)? {
            match key.as_str() {
                FORM_NAME_FIELD => form_name = Some(value),
                HONEYPOT_FIELD => honeypot = value,
                other => {
                    if let Some(field) = ContactField::from_name(other) {
                        contact.set(field, value);
                    }
                }
            }
        }

        let form_name = form_name.ok_or(EncodingError::MissingFormName)?;
        Ok(Self { form_name, honeypot, contact })
    }

    pub fn ensure_contact_form(&self) -> Result<(), EncodingError> {
        if self.form_name == FORM_NAME {
            Ok(())
        } else {
            Err(EncodingError::UnknownForm(self.form_name.clone()))
        }
    }
}

pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs.iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn decode_form(body: &str) -> Result<Vec<(String, String)>, EncodingError> {
    body.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Result<String, EncodingError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| EncodingError::InvalidEncoding(raw.to_string()))
}
