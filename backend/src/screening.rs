use rustrict::CensorStr;
use shared::{ContactField, ContactRequest};

const SCREENED_FIELDS: [ContactField; 3] = [
    ContactField::Name,
    ContactField::Company,
    ContactField::Message,
];

/// First free-text field whose content looks abusive.
pub fn flagged_field(contact: &ContactRequest) -> Option<ContactField> {
    SCREENED_FIELDS.into_iter()
        .find(|field| contact.get(*field).is_inappropriate())
}
