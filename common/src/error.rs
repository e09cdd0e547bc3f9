//! Error types shared by the client, the server and the workflow controllers.
//!
//! None of these are fatal. The controllers turn every variant into UI state
//! and the frontend never lets one escape a component.

use crate::i18n::{Language, MessageKey};

/// Failure of a single HTTP exchange with the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Problems found while loading a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    #[error("Translation tree is not a JSON object")]
    NotAnObject,

    #[error("Missing translations for language `{0}`")]
    MissingLanguage(Language),

    #[error("Missing translation `{path}` for language `{language}`")]
    MissingKey { language: Language, path: &'static str },

    #[error("Malformed translation tree: {0}")]
    Malformed(String),
}

/// Reasons an activation submit never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A submission is already in flight")]
    InFlight,

    #[error("One or more fields failed validation")]
    InvalidFields,

    #[error("A license file is required")]
    LicenseMissing,
}

/// Errors surfaced by the verification challenge. Only one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    #[error("Code must have exactly 6 digits")]
    CodeTooShort,

    #[error("Incorrect code")]
    IncorrectCode,

    #[error("Verification request failed")]
    VerifyFailed,

    #[error("Resend request failed")]
    ResendFailed,

    #[error("Another request is in flight")]
    Busy,
}

impl ChallengeError {
    /// Localized message shown to the user. `Busy` never reaches the UI.
    pub fn message_key(self) -> Option<MessageKey> {
        match self {
            ChallengeError::CodeTooShort => Some(MessageKey::VerificationCodeError),
            ChallengeError::IncorrectCode => Some(MessageKey::VerificationIncorrectCode),
            ChallengeError::VerifyFailed => Some(MessageKey::VerificationVerifyFailed),
            ChallengeError::ResendFailed => Some(MessageKey::VerificationResendFailed),
            ChallengeError::Busy => None,
        }
    }
}
