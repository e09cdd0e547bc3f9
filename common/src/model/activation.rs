//! Data collected by the activation form.

use serde::{Deserialize, Serialize};

/// Form field identifiers. Errors are attached per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Email,
    CategoryId,
    LicenseFile,
}

impl Field {
    pub const TEXT_FIELDS: [Field; 4] = [Field::FirstName, Field::LastName, Field::Phone, Field::Email];
}

/// Raw text entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub category_id: String,
}

impl ActivationFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::CategoryId => &self.category_id,
            Field::LicenseFile => "",
        }
    }

    /// Updates a text field. `LicenseFile` has no text and is ignored.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::CategoryId => self.category_id = value,
            Field::LicenseFile => {}
        }
    }
}

/// Metadata the intake needs from an attached license document.
///
/// The browser build wraps a DOM file; tests and the server use
/// [`LicenseFile`].
pub trait Attachment {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    fn mime_type(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl Attachment for LicenseFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// Validated payload handed from the intake to the verification stage.
/// `fields.phone` is already whitespace-free.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRequest<A> {
    pub fields: ActivationFields,
    pub license: Option<A>,
}

impl<A> ActivationRequest<A> {
    pub fn phone(&self) -> &str {
        &self.fields.phone
    }
}
