//! Activation intake: the state behind the activation form.
//!
//! The controller owns the field values, the attached license, the loaded
//! categories and every error slot. The frontend feeds it user events and
//! network outcomes; it never talks to the network itself. A submit is split
//! in two: [`ActivationIntake::begin_submit`] validates and yields the request
//! to send, [`ActivationIntake::finish_submit`] consumes the response.

use std::collections::BTreeMap;

use crate::api::SendOtpOutcome;
use crate::error::SubmitRejected;
use crate::i18n::{MessageKey, Text};
use crate::model::activation::{ActivationFields, ActivationRequest, Attachment, Field};
use crate::model::category::Category;
use crate::requests::SendOtpRequest;
use crate::validation::{check_license, normalize_phone, validate_fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Destructive,
}

/// A transient toast queued for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: Text,
}

impl Notification {
    fn info(text: impl Into<Text>) -> Self {
        Self { kind: NotificationKind::Info, text: text.into() }
    }

    fn destructive(text: impl Into<Text>) -> Self {
        Self { kind: NotificationKind::Destructive, text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLoad {
    NotStarted,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct ActivationIntake<A> {
    fields: ActivationFields,
    license: Option<A>,
    license_required: bool,
    field_errors: BTreeMap<Field, Text>,
    general_error: Option<Text>,
    categories: Vec<Category>,
    category_load: CategoryLoad,
    category_error: Option<MessageKey>,
    submitting: bool,
    notifications: Vec<Notification>,
}

impl<A: Attachment> ActivationIntake<A> {
    pub fn new(license_required: bool) -> Self {
        Self {
            fields: ActivationFields::default(),
            license: None,
            license_required,
            field_errors: BTreeMap::new(),
            general_error: None,
            categories: Vec::new(),
            category_load: CategoryLoad::NotStarted,
            category_error: None,
            submitting: false,
            notifications: Vec::new(),
        }
    }

    pub fn fields(&self) -> &ActivationFields {
        &self.fields
    }

    pub fn license(&self) -> Option<&A> {
        self.license.as_ref()
    }

    pub fn license_required(&self) -> bool {
        self.license_required
    }

    pub fn field_error(&self, field: Field) -> Option<&Text> {
        self.field_errors.get(&field)
    }

    pub fn general_error(&self) -> Option<&Text> {
        self.general_error.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_load(&self) -> CategoryLoad {
        self.category_load
    }

    pub fn category_error(&self) -> Option<MessageKey> {
        self.category_error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Removes and returns the queued toasts.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Stores a keystroke. Editing a field clears that field's error.
    pub fn set_field(&mut self, field: Field, value: String) {
        if field == Field::LicenseFile {
            return;
        }
        self.fields.set(field, value);
        self.field_errors.remove(&field);
    }

    /// A manual choice. Never overwritten by the default selection.
    pub fn select_category(&mut self, id: String) {
        self.set_field(Field::CategoryId, id);
    }

    /// Applies a file picker change. Oversized or wrongly typed files are
    /// rejected right away and leave no file selected.
    pub fn select_license(&mut self, file: Option<A>) {
        self.field_errors.remove(&Field::LicenseFile);
        let Some(file) = file else {
            return;
        };
        match check_license(&file) {
            Ok(()) => self.license = Some(file),
            Err(key) => {
                self.license = None;
                self.field_errors.insert(Field::LicenseFile, key.into());
            }
        }
    }

    /// Marks the category fetch as started. Returns `false` if it already ran,
    /// so the fetch happens once per mount.
    pub fn begin_category_load(&mut self) -> bool {
        if self.category_load != CategoryLoad::NotStarted {
            return false;
        }
        self.category_load = CategoryLoad::Loading;
        self.category_error = None;
        true
    }

    pub fn categories_loaded(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.category_load = CategoryLoad::Loaded;
        self.apply_default_category();
    }

    /// The selector stays usable but empty.
    pub fn categories_failed(&mut self) {
        self.categories.clear();
        self.category_load = CategoryLoad::Failed;
        self.category_error = Some(MessageKey::ErrorCategoriesLoadFailed);
        self.notifications
            .push(Notification::destructive(MessageKey::NotifyCategoriesLoadFailed));
    }

    fn apply_default_category(&mut self) {
        if !self.fields.category_id.is_empty() {
            return;
        }
        if let Some(first) = self.categories.first() {
            self.fields.category_id = first.key();
        }
    }

    /// Validates the form and, if everything passes, enters the in-flight
    /// state and returns the body to post. Errors from the previous attempt
    /// are replaced, not accumulated.
    pub fn begin_submit(&mut self) -> Result<SendOtpRequest, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.general_error = None;
        self.field_errors.retain(|field, _| *field == Field::LicenseFile);

        let errors = validate_fields(&self.fields);
        if !errors.is_empty() {
            self.field_errors
                .extend(errors.into_iter().map(|(field, key)| (field, Text::Key(key))));
            return Err(SubmitRejected::InvalidFields);
        }

        match self.license.as_ref().map(check_license) {
            None if self.license_required => {
                self.field_errors
                    .insert(Field::LicenseFile, MessageKey::ErrorLicenseRequired.into());
                return Err(SubmitRejected::LicenseMissing);
            }
            Some(Err(key)) => {
                self.license = None;
                self.field_errors.insert(Field::LicenseFile, key.into());
                return Err(SubmitRejected::InvalidFields);
            }
            _ => {}
        }

        self.field_errors.clear();
        self.submitting = true;
        Ok(SendOtpRequest {
            phone: normalize_phone(&self.fields.phone),
        })
    }

    /// Consumes the send-otp outcome. On success the form is cleared and the
    /// validated payload is returned for the verification stage; otherwise the
    /// form keeps its values so the user can retry.
    pub fn finish_submit(&mut self, outcome: SendOtpOutcome) -> Option<ActivationRequest<A>> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;

        match outcome {
            SendOtpOutcome::Sent => {
                self.notifications.push(Notification::info(MessageKey::NotifyOtpSent));
                let mut fields = std::mem::take(&mut self.fields);
                fields.phone = normalize_phone(&fields.phone);
                let license = self.license.take();
                self.field_errors.clear();
                self.general_error = None;
                self.apply_default_category();
                Some(ActivationRequest { fields, license })
            }
            SendOtpOutcome::Rejected { phone, message } => {
                let toast = phone
                    .clone()
                    .or_else(|| message.clone())
                    .map(Text::Raw)
                    .unwrap_or(Text::Key(MessageKey::ErrorSendFailed));
                if let Some(phone) = phone {
                    self.field_errors.insert(Field::Phone, Text::Raw(phone));
                }
                self.general_error = message.map(Text::Raw);
                self.notifications.push(Notification::destructive(toast));
                None
            }
            SendOtpOutcome::Failed { .. } => {
                self.general_error = Some(MessageKey::ErrorSendFailed.into());
                self.notifications
                    .push(Notification::destructive(MessageKey::ErrorSendFailed));
                None
            }
            SendOtpOutcome::Transport(_) => {
                self.general_error = Some(MessageKey::ErrorUnexpected.into());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::model::activation::LicenseFile;
    use crate::validation::MAX_LICENSE_BYTES;

    fn license(size: u64) -> LicenseFile {
        LicenseFile { name: "license.pdf".into(), size, mime_type: "application/pdf".into() }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Standard".into() },
            Category { id: 2, name: "Premium".into() },
        ]
    }

    fn filled(license_required: bool) -> ActivationIntake<LicenseFile> {
        let mut intake = ActivationIntake::new(license_required);
        intake.categories_loaded(categories());
        intake.set_field(Field::FirstName, "Nino".into());
        intake.set_field(Field::LastName, "Beridze".into());
        intake.set_field(Field::Phone, "+995 555 12 34 56".into());
        intake.set_field(Field::Email, "nino@example.ge".into());
        intake.select_license(Some(license(1024)));
        intake
    }

    #[test]
    fn default_category_is_first_loaded() {
        let mut intake = ActivationIntake::<LicenseFile>::new(true);
        intake.categories_loaded(categories());
        assert_eq!(intake.fields().category_id, "1");
    }

    #[test]
    fn default_category_does_not_override_user_choice() {
        let mut intake = ActivationIntake::<LicenseFile>::new(true);
        intake.select_category("2".into());
        intake.categories_loaded(categories());
        assert_eq!(intake.fields().category_id, "2");
    }

    #[test]
    fn category_fetch_runs_once() {
        let mut intake = ActivationIntake::<LicenseFile>::new(true);
        assert!(intake.begin_category_load());
        assert!(!intake.begin_category_load());
        intake.categories_failed();
        assert!(!intake.begin_category_load());
    }

    #[test]
    fn category_failure_leaves_empty_selector_and_notifies() {
        let mut intake = ActivationIntake::<LicenseFile>::new(true);
        intake.begin_category_load();
        intake.categories_failed();
        assert!(intake.categories().is_empty());
        assert_eq!(intake.category_load(), CategoryLoad::Failed);
        assert_eq!(intake.category_error(), Some(MessageKey::ErrorCategoriesLoadFailed));
        let toasts = intake.take_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Destructive);
        assert!(intake.take_notifications().is_empty());
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut intake = filled(true);
        intake.set_field(Field::Email, String::new());
        assert_eq!(intake.begin_submit(), Err(SubmitRejected::InvalidFields));
        assert!(!intake.is_submitting());
        assert_eq!(
            intake.field_error(Field::Email),
            Some(&Text::Key(MessageKey::ErrorEmailRequired))
        );
        assert_eq!(intake.field_error(Field::Phone), None);
    }

    #[test]
    fn oversized_file_is_rejected_on_selection() {
        let mut intake = filled(true);
        intake.select_license(Some(license(MAX_LICENSE_BYTES + 1)));
        assert!(intake.license().is_none());
        assert_eq!(
            intake.field_error(Field::LicenseFile),
            Some(&Text::Key(MessageKey::ErrorFileTooLarge))
        );

        intake.select_license(Some(license(MAX_LICENSE_BYTES)));
        assert!(intake.license().is_some());
        assert_eq!(intake.field_error(Field::LicenseFile), None);
    }

    #[test]
    fn required_license_guard_aborts_locally() {
        let mut intake = filled(true);
        intake.select_license(Some(license(MAX_LICENSE_BYTES + 1)));
        assert_eq!(intake.begin_submit(), Err(SubmitRejected::LicenseMissing));
        assert_eq!(
            intake.field_error(Field::LicenseFile),
            Some(&Text::Key(MessageKey::ErrorLicenseRequired))
        );
        assert!(!intake.is_submitting());
    }

    #[test]
    fn optional_license_may_be_absent() {
        let mut intake = ActivationIntake::<LicenseFile>::new(false);
        intake.categories_loaded(categories());
        intake.set_field(Field::FirstName, "Giorgi".into());
        intake.set_field(Field::LastName, "Kapanadze".into());
        intake.set_field(Field::Phone, "555 000 111".into());
        intake.set_field(Field::Email, "g@k.ge".into());
        assert!(intake.begin_submit().is_ok());
    }

    #[test]
    fn valid_submit_sends_normalized_phone_once() {
        let mut intake = filled(true);
        let request = intake.begin_submit().unwrap();
        assert_eq!(request.phone, "+995555123456");
        assert!(intake.is_submitting());
        assert_eq!(intake.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn success_clears_form_and_hands_over_payload() {
        let mut intake = filled(true);
        intake.select_category("2".into());
        intake.begin_submit().unwrap();

        let request = intake.finish_submit(SendOtpOutcome::Sent).unwrap();
        assert_eq!(request.phone(), "+995555123456");
        assert_eq!(request.fields.first_name, "Nino");
        assert_eq!(request.fields.category_id, "2");
        assert_eq!(request.license, Some(license(1024)));

        assert!(!intake.is_submitting());
        assert_eq!(intake.fields().first_name, "");
        assert_eq!(intake.fields().category_id, "1");
        assert!(intake.license().is_none());
        assert!(intake.general_error().is_none());
        let toasts = intake.take_notifications();
        assert_eq!(toasts, vec![Notification::info(MessageKey::NotifyOtpSent)]);
    }

    #[test]
    fn rejection_maps_phone_error_and_keeps_form() {
        let mut intake = filled(true);
        intake.begin_submit().unwrap();
        let result = intake.finish_submit(SendOtpOutcome::Rejected {
            phone: Some("taken".into()),
            message: Some("The given data was invalid.".into()),
        });
        assert!(result.is_none());
        assert_eq!(intake.field_error(Field::Phone), Some(&Text::Raw("taken".into())));
        assert_eq!(
            intake.general_error(),
            Some(&Text::Raw("The given data was invalid.".into()))
        );
        assert_eq!(intake.fields().first_name, "Nino");
        assert!(intake.license().is_some());
        assert_eq!(
            intake.take_notifications(),
            vec![Notification::destructive(Text::Raw("taken".into()))]
        );
    }

    #[test]
    fn rejection_without_details_falls_back_to_generic_toast() {
        let mut intake = filled(true);
        intake.begin_submit().unwrap();
        intake.finish_submit(SendOtpOutcome::Rejected { phone: None, message: None });
        assert_eq!(intake.general_error(), None);
        assert_eq!(
            intake.take_notifications(),
            vec![Notification::destructive(MessageKey::ErrorSendFailed)]
        );
    }

    #[test]
    fn other_failures_are_generic_and_retryable() {
        let mut intake = filled(true);
        intake.begin_submit().unwrap();
        intake.finish_submit(SendOtpOutcome::Failed { status: 500 });
        assert_eq!(intake.general_error(), Some(&Text::Key(MessageKey::ErrorSendFailed)));
        assert_eq!(intake.take_notifications().len(), 1);

        intake.begin_submit().unwrap();
        assert!(intake.general_error().is_none());
        intake.finish_submit(SendOtpOutcome::Transport(ApiError::Transport("offline".into())));
        assert_eq!(intake.general_error(), Some(&Text::Key(MessageKey::ErrorUnexpected)));
        assert!(!intake.is_submitting());
        assert_eq!(intake.fields().email, "nino@example.ge");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut intake = filled(true);
        intake.begin_submit().unwrap();
        intake.finish_submit(SendOtpOutcome::Rejected { phone: Some("taken".into()), message: None });
        intake.set_field(Field::Phone, "+995 555 00 00 00".into());
        assert_eq!(intake.field_error(Field::Phone), None);
    }

    #[test]
    fn stale_outcome_without_submit_is_ignored() {
        let mut intake = filled(true);
        assert!(intake.finish_submit(SendOtpOutcome::Sent).is_none());
        assert_eq!(intake.fields().first_name, "Nino");
    }
}
