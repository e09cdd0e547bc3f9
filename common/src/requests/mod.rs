use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body of `POST /user/send-otp`. The phone is whitespace-free.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SendOtpRequest {
    pub phone: String,
}

/// Body of `POST /user/verify-otp`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub code: String,
}

/// Body of `POST /user/resend-otp`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResendOtpRequest {
    pub phone: String,
}

/// Body of a 422 answer: `{ errors?: { field: [messages] }, message? }`.
///
/// `errors` is kept as raw JSON. Backends send `[]` for an empty map and
/// occasionally a bare string per field; neither may hide `message`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationErrorBody {
    pub fn new(field: &str, error: impl Into<String>, message: impl Into<String>) -> Self {
        let error: String = error.into();
        Self {
            errors: Some(json!({ field: [error] })),
            message: Some(message.into()),
        }
    }

    /// First message reported for `field`, if any. Only `errors.<field>[0]`
    /// as a string counts.
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors.as_ref()?.as_object()?.get(field)?.get(0)?.as_str()
    }
}
