use actix_web::{web, HttpResponse, Responder};
use common::model::activation::Field;
use common::requests::SendOtpRequest;
use common::validation::{normalize_phone, validate_field};
use log::info;

use super::{english, unprocessable};
use crate::otp_store::state::OtpState;

/// `POST /user/send-otp`: validates the phone with the client's own rules and
/// records the development code for it.
pub async fn process(payload: web::Json<SendOtpRequest>, state: web::Data<OtpState>) -> impl Responder {
    if let Some(key) = validate_field(Field::Phone, &payload.phone) {
        return unprocessable("phone", english(key));
    }
    let phone = normalize_phone(&payload.phone);
    let code = state.issue(&phone).await;
    info!("Issued OTP {} for {}", code, phone);
    HttpResponse::Ok().json(serde_json::json!({ "sent": true }))
}
