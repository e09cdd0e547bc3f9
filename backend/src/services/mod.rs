//! # Development API
//!
//! A local stand-in for the activation backend, mounted only when
//! `MARTEV_DEV_API=true`. It speaks the same contract the client expects so
//! the whole flow can be exercised without the real service.
//!
//! ## Registered routes (under `/api`)
//!
//! *   **`GET /categories`**: `[{ id, name }]`.
//! *   **`GET /languages`**: `{ "ka": {...}, "en": {...} }`.
//! *   **`POST /user/send-otp`** `{ phone }`: 200, or 422 with a `phone` error.
//! *   **`POST /user/verify-otp`** `{ phone, code }`: 200, or 422 with a `code` error.
//! *   **`POST /user/resend-otp`** `{ phone }`: 200, or 422 when nothing is pending.

mod catalog;
mod otp;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::api::{CATEGORIES_PATH, LANGUAGES_PATH, RESEND_OTP_PATH, SEND_OTP_PATH, VERIFY_OTP_PATH};

/// Matches the client's default API base.
pub const API_PATH: &str = common::config::DEFAULT_API_BASE;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route(CATEGORIES_PATH, get().to(catalog::categories))
        .route(LANGUAGES_PATH, get().to(catalog::languages))
        .route(SEND_OTP_PATH, post().to(otp::send::process))
        .route(VERIFY_OTP_PATH, post().to(otp::verify::process))
        .route(RESEND_OTP_PATH, post().to(otp::resend::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::otp_store::state::OtpState;
    use actix_web::{test, web, App};
    use common::api::{SendOtpOutcome, VerifyOutcome};
    use common::i18n::Translations;
    use common::model::category::{categories_from_json, Category};
    use serde_json::{json, Value};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(OtpState::new("123456")))
                    .service(configure_routes()),
            )
            .await
        };
    }

    fn post_json(path: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("{}{}", API_PATH, path))
            .set_json(body)
    }

    #[actix_web::test]
    async fn categories_are_standard_then_premium() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let categories = categories_from_json(body);
        assert_eq!(categories[0], Category { id: 1, name: "Standard".into() });
        assert_eq!(categories.len(), 2);
    }

    #[actix_web::test]
    async fn languages_tree_is_complete() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/languages").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(Translations::from_value(&body).is_ok());
    }

    #[actix_web::test]
    async fn invalid_phone_is_rejected_with_contract_body() {
        let app = app!();
        let resp = test::call_service(&app, post_json(SEND_OTP_PATH, json!({"phone": "555-abc"})).to_request()).await;
        assert_eq!(resp.status().as_u16(), 422);
        let body = test::read_body(resp).await;
        let outcome = SendOtpOutcome::from_response(422, std::str::from_utf8(&body).unwrap());
        assert_eq!(
            outcome,
            SendOtpOutcome::Rejected {
                phone: Some("Invalid phone number".into()),
                message: Some("The given data was invalid.".into()),
            }
        );
    }

    #[actix_web::test]
    async fn send_then_verify_round() {
        let app = app!();
        let resp = test::call_service(
            &app,
            post_json(SEND_OTP_PATH, json!({"phone": "+995 555 12 34 56"})).to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let wrong = test::call_service(
            &app,
            post_json(VERIFY_OTP_PATH, json!({"phone": "+995555123456", "code": "000000"})).to_request(),
        )
        .await;
        assert_eq!(VerifyOutcome::from_status(wrong.status().as_u16()), VerifyOutcome::Incorrect);

        let right = test::call_service(
            &app,
            post_json(VERIFY_OTP_PATH, json!({"phone": "+995555123456", "code": "123456"})).to_request(),
        )
        .await;
        assert_eq!(VerifyOutcome::from_status(right.status().as_u16()), VerifyOutcome::Accepted);
    }

    #[actix_web::test]
    async fn resend_needs_a_pending_code() {
        let app = app!();
        let unknown = test::call_service(
            &app,
            post_json(RESEND_OTP_PATH, json!({"phone": "+995555000000"})).to_request(),
        )
        .await;
        assert_eq!(unknown.status().as_u16(), 422);

        test::call_service(&app, post_json(SEND_OTP_PATH, json!({"phone": "+995555000000"})).to_request()).await;
        let resent = test::call_service(
            &app,
            post_json(RESEND_OTP_PATH, json!({"phone": "+995 555 000 000"})).to_request(),
        )
        .await;
        assert!(resent.status().is_success());
    }
}
