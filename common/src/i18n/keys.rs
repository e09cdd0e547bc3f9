//! The closed set of user-visible strings.
//!
//! Every variant names one leaf of the nested translation tree served by
//! `GET /languages`. A dictionary is only accepted when it has all of them.

macro_rules! message_keys {
    ($($variant:ident => $path:literal,)+) => {
        /// Key of a localized string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            /// All keys, in declaration order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// Dotted path of the key inside a language subtree.
            pub fn path(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $path,)+
                }
            }
        }
    };
}

message_keys! {
    HeroTitle => "hero.title",
    HeroSubtitle => "hero.subtitle",

    FormFirstName => "form.firstName",
    FormLastName => "form.lastName",
    FormPhone => "form.phone",
    FormEmail => "form.email",
    FormLicense => "form.license",
    FormLicenseUpload => "form.licenseUpload",
    FormCategory => "form.category",
    FormRequired => "form.required",
    FormSubmit => "form.submit",
    FormSubmitting => "form.submitting",

    PlaceholderFirstName => "form.placeholders.firstName",
    PlaceholderLastName => "form.placeholders.lastName",
    PlaceholderPhone => "form.placeholders.phone",
    PlaceholderEmail => "form.placeholders.email",

    ErrorFirstNameRequired => "form.errors.firstNameRequired",
    ErrorLastNameRequired => "form.errors.lastNameRequired",
    ErrorNameTooLong => "form.errors.nameTooLong",
    ErrorPhoneRequired => "form.errors.phoneRequired",
    ErrorPhoneInvalid => "form.errors.phoneInvalid",
    ErrorEmailRequired => "form.errors.emailRequired",
    ErrorEmailInvalid => "form.errors.emailInvalid",
    ErrorCategoryRequired => "form.errors.categoryRequired",
    ErrorCategoriesLoadFailed => "form.errors.categoriesLoadFailed",
    ErrorFileTooLarge => "form.errors.fileTooLarge",
    ErrorFileTypeInvalid => "form.errors.fileTypeInvalid",
    ErrorLicenseRequired => "form.errors.licenseRequired",
    ErrorSendFailed => "form.errors.sendFailed",
    ErrorUnexpected => "form.errors.unexpected",

    NotifyOtpSent => "notifications.otpSent",
    NotifyCategoriesLoadFailed => "notifications.categoriesLoadFailed",

    VerificationTitle => "verification.title",
    VerificationSubtitle => "verification.subtitle",
    VerificationTitleSuccess => "verification.titleSuccess",
    VerificationSubtitleSuccess => "verification.subtitleSuccess",
    VerificationVerify => "verification.verify",
    VerificationVerifying => "verification.verifying",
    VerificationResend => "verification.resend",
    VerificationResending => "verification.resending",
    VerificationContinue => "verification.continue",
    VerificationCodeError => "verification.codeError",
    VerificationIncorrectCode => "verification.incorrectCode",
    VerificationVerifyFailed => "verification.verifyFailed",
    VerificationResendFailed => "verification.resendFailed",

    FooterDescription => "footer.description",
    FooterContact => "footer.contact",
    FooterCallUs => "footer.callUs",
    FooterDownloadApp => "footer.downloadApp",
    FooterAppDescription => "footer.appDescription",
    FooterCopyright => "footer.copyright",
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = MessageKey::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths.len(), MessageKey::ALL.len());
    }

    #[test]
    fn no_path_is_a_prefix_of_another() {
        for a in MessageKey::ALL {
            for b in MessageKey::ALL {
                if a != b {
                    let prefix = format!("{}.", a.path());
                    assert!(!b.path().starts_with(&prefix), "{} shadows {}", a.path(), b.path());
                }
            }
        }
    }
}
