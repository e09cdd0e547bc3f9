use actix_web::{web, HttpResponse, Responder};
use common::requests::ResendOtpRequest;
use common::validation::normalize_phone;
use log::info;

use super::unprocessable;
use crate::otp_store::state::OtpState;

const NO_PENDING_VERIFICATION: &str = "No pending verification for this phone number.";

/// `POST /user/resend-otp`: re-issues the code for a phone that already has
/// one pending.
pub async fn process(payload: web::Json<ResendOtpRequest>, state: web::Data<OtpState>) -> impl Responder {
    let phone = normalize_phone(&payload.phone);
    if !state.is_pending(&phone).await {
        return unprocessable("phone", NO_PENDING_VERIFICATION);
    }
    let code = state.issue(&phone).await;
    info!("Re-issued OTP {} for {}", code, phone);
    HttpResponse::Ok().json(serde_json::json!({ "sent": true }))
}
