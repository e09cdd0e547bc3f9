//! OTP endpoints of the development API.
//!
//! Rejections use the same 422 body as the real backend:
//! `{ "errors": { "<field>": ["..."] }, "message": "..." }`.

pub mod resend;
pub mod send;
pub mod verify;

use actix_web::HttpResponse;
use common::i18n::{Language, MessageKey, Translations};
use common::requests::ValidationErrorBody;

const INVALID_DATA_MESSAGE: &str = "The given data was invalid.";

fn english(key: MessageKey) -> &'static str {
    Translations::bundled().text(Language::En, key)
}

fn unprocessable(field: &str, error: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ValidationErrorBody::new(field, error, INVALID_DATA_MESSAGE))
}
