//! Client-side validation rules for the activation form.
//!
//! Required checks run first; format checks only look at non-empty values.
//! The same rules back the development API, so both sides agree on what a
//! valid phone number is.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::MessageKey;
use crate::model::activation::{ActivationFields, Attachment, Field};

pub const MAX_NAME_CHARS: usize = 50;

/// 10 MiB.
pub const MAX_LICENSE_BYTES: u64 = 10 * 1024 * 1024;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 +\-()]+$").expect("phone pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// One message per failing field.
pub type FieldErrors = BTreeMap<Field, MessageKey>;

/// Removes every whitespace character, as sent to the OTP endpoint.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates one text field. Returns the message to attach, if any.
pub fn validate_field(field: Field, value: &str) -> Option<MessageKey> {
    let empty = value.trim().is_empty();
    match field {
        Field::FirstName | Field::LastName if empty => Some(match field {
            Field::FirstName => MessageKey::ErrorFirstNameRequired,
            _ => MessageKey::ErrorLastNameRequired,
        }),
        Field::FirstName | Field::LastName if value.trim().chars().count() > MAX_NAME_CHARS => {
            Some(MessageKey::ErrorNameTooLong)
        }
        Field::Phone if empty => Some(MessageKey::ErrorPhoneRequired),
        Field::Phone if !is_valid_phone(value) => Some(MessageKey::ErrorPhoneInvalid),
        Field::Email if empty => Some(MessageKey::ErrorEmailRequired),
        Field::Email if !is_valid_email(value.trim()) => Some(MessageKey::ErrorEmailInvalid),
        Field::CategoryId if empty => Some(MessageKey::ErrorCategoryRequired),
        _ => None,
    }
}

/// Runs every text-field rule. An empty map means the fields may be submitted.
pub fn validate_fields(fields: &ActivationFields) -> FieldErrors {
    Field::TEXT_FIELDS
        .into_iter()
        .chain([Field::CategoryId])
        .filter_map(|field| validate_field(field, fields.get(field)).map(|key| (field, key)))
        .collect()
}

/// Size and type rules for an attached license document.
pub fn check_license<A: Attachment>(file: &A) -> Result<(), MessageKey> {
    if file.size() > MAX_LICENSE_BYTES {
        return Err(MessageKey::ErrorFileTooLarge);
    }
    let mime = file.mime_type().to_ascii_lowercase();
    let is_pdf = mime == "application/pdf" || file.name().to_ascii_lowercase().ends_with(".pdf");
    if mime.starts_with("image/") || is_pdf {
        Ok(())
    } else {
        Err(MessageKey::ErrorFileTypeInvalid)
    }
}
