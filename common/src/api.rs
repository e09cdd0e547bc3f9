//! HTTP contract of the activation backend.
//!
//! Routes are relative to a configurable base URL. The functions here only
//! interpret status codes and bodies, so the browser client and the tests
//! share one reading of every response.

use crate::error::ApiError;
use crate::requests::{ValidationErrorBody, VerifyOtpRequest};

pub const CATEGORIES_PATH: &str = "/categories";
pub const LANGUAGES_PATH: &str = "/languages";
pub const SEND_OTP_PATH: &str = "/user/send-otp";
pub const VERIFY_OTP_PATH: &str = "/user/verify-otp";
pub const RESEND_OTP_PATH: &str = "/user/resend-otp";

pub const STATUS_UNPROCESSABLE: u16 = 422;
const STATUS_BAD_REQUEST: u16 = 400;

/// Absolute URLs of every endpoint under one base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn categories(&self) -> String {
        self.url(CATEGORIES_PATH)
    }

    pub fn languages(&self) -> String {
        self.url(LANGUAGES_PATH)
    }

    pub fn send_otp(&self) -> String {
        self.url(SEND_OTP_PATH)
    }

    pub fn verify_otp(&self) -> String {
        self.url(VERIFY_OTP_PATH)
    }

    pub fn resend_otp(&self) -> String {
        self.url(RESEND_OTP_PATH)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Result of one `POST /user/send-otp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOtpOutcome {
    Sent,
    /// 422 with whatever the body carried.
    Rejected {
        phone: Option<String>,
        message: Option<String>,
    },
    /// Any other non-success status.
    Failed { status: u16 },
    /// The request never completed or its 422 body was unreadable.
    Transport(ApiError),
}

impl SendOtpOutcome {
    pub fn from_response(status: u16, body: &str) -> Self {
        if is_success(status) {
            return SendOtpOutcome::Sent;
        }
        if status != STATUS_UNPROCESSABLE {
            return SendOtpOutcome::Failed { status };
        }
        match serde_json::from_str::<ValidationErrorBody>(body) {
            Ok(parsed) => SendOtpOutcome::Rejected {
                phone: parsed.first_error("phone").map(str::to_string),
                message: parsed.message,
            },
            Err(e) => SendOtpOutcome::Transport(ApiError::Decode(e.to_string())),
        }
    }
}

/// Result of one verify attempt, remote or mocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Accepted,
    Incorrect,
    Failed(ApiError),
}

impl VerifyOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            s if is_success(s) => VerifyOutcome::Accepted,
            STATUS_UNPROCESSABLE | STATUS_BAD_REQUEST => VerifyOutcome::Incorrect,
            s => VerifyOutcome::Failed(ApiError::Status(s)),
        }
    }

    /// Verification without a backend: exactly one code is accepted.
    pub fn mocked(accepted_code: &str, request: &VerifyOtpRequest) -> Self {
        if request.code == accepted_code {
            VerifyOutcome::Accepted
        } else {
            VerifyOutcome::Incorrect
        }
    }
}

/// Result of one `POST /user/resend-otp`.
pub fn resend_result(status: u16) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_without_double_slashes() {
        let endpoints = Endpoints::new("https://api.martev.io/v1/");
        assert_eq!(endpoints.categories(), "https://api.martev.io/v1/categories");
        assert_eq!(endpoints.send_otp(), "https://api.martev.io/v1/user/send-otp");
        assert_eq!(Endpoints::new("/api").languages(), "/api/languages");
    }

    #[test]
    fn send_otp_422_maps_first_phone_error_and_message() {
        let outcome = SendOtpOutcome::from_response(
            422,
            r#"{"errors":{"phone":["taken"]},"message":"The given data was invalid."}"#,
        );
        assert_eq!(
            outcome,
            SendOtpOutcome::Rejected {
                phone: Some("taken".into()),
                message: Some("The given data was invalid.".into()),
            }
        );
    }

    #[test]
    fn send_otp_other_statuses() {
        assert_eq!(SendOtpOutcome::from_response(200, ""), SendOtpOutcome::Sent);
        assert_eq!(SendOtpOutcome::from_response(204, ""), SendOtpOutcome::Sent);
        assert_eq!(
            SendOtpOutcome::from_response(500, "{}"),
            SendOtpOutcome::Failed { status: 500 }
        );
        assert!(matches!(
            SendOtpOutcome::from_response(422, "<html>"),
            SendOtpOutcome::Transport(ApiError::Decode(_))
        ));
    }

    #[test]
    fn send_otp_422_with_empty_errors_array_is_a_rejection() {
        assert_eq!(
            SendOtpOutcome::from_response(
                422,
                r#"{"message":"Phone already registered","errors":[]}"#,
            ),
            SendOtpOutcome::Rejected {
                phone: None,
                message: Some("Phone already registered".into()),
            }
        );
        assert_eq!(
            SendOtpOutcome::from_response(422, r#"{"errors":{"phone":"taken"}}"#),
            SendOtpOutcome::Rejected { phone: None, message: None }
        );
    }

    #[test]
    fn verify_statuses_and_mock() {
        assert_eq!(VerifyOutcome::from_status(200), VerifyOutcome::Accepted);
        assert_eq!(VerifyOutcome::from_status(422), VerifyOutcome::Incorrect);
        assert_eq!(
            VerifyOutcome::from_status(503),
            VerifyOutcome::Failed(ApiError::Status(503))
        );

        let request = |code: &str| VerifyOtpRequest { phone: "+995555".into(), code: code.into() };
        assert_eq!(VerifyOutcome::mocked("123456", &request("123456")), VerifyOutcome::Accepted);
        assert_eq!(VerifyOutcome::mocked("123456", &request("654321")), VerifyOutcome::Incorrect);
    }

    #[test]
    fn resend_statuses() {
        assert_eq!(resend_result(200), Ok(()));
        assert_eq!(resend_result(429), Err(ApiError::Status(429)));
    }
}
