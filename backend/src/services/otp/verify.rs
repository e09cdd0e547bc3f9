use actix_web::{web, HttpResponse, Responder};
use common::i18n::MessageKey;
use common::requests::VerifyOtpRequest;
use common::validation::normalize_phone;
use log::info;

use super::{english, unprocessable};
use crate::otp_store::state::OtpState;

/// `POST /user/verify-otp`: 200 when the code matches the pending one,
/// 422 with a `code` error otherwise.
pub async fn process(payload: web::Json<VerifyOtpRequest>, state: web::Data<OtpState>) -> impl Responder {
    let phone = normalize_phone(&payload.phone);
    if state.verify(&phone, payload.code.trim()).await {
        info!("Verified {}", phone);
        HttpResponse::Ok().json(serde_json::json!({ "verified": true }))
    } else {
        unprocessable("code", english(MessageKey::VerificationIncorrectCode))
    }
}
