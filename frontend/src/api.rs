//! Calls to the activation backend.
//!
//! Every function resolves to a value the controllers understand; transport
//! errors are logged here and turned into outcomes, never propagated.

use common::api::{resend_result, Endpoints, SendOtpOutcome, VerifyOutcome};
use common::config::{ClientConfig, VerificationMode};
use common::error::ApiError;
use common::i18n::Translations;
use common::model::category::{categories_from_json, Category};
use common::requests::{ResendOtpRequest, SendOtpRequest, VerifyOtpRequest};
use gloo_console::error;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

const MOCK_VERIFY_DELAY_MS: u32 = 1500;
const MOCK_RESEND_DELAY_MS: u32 = 1000;

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn get_ok(url: &str) -> Result<Response, ApiError> {
    let response = Request::get(url).send().await.map_err(transport)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<Response, ApiError> {
    Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

pub async fn fetch_categories(endpoints: &Endpoints) -> Result<Vec<Category>, ApiError> {
    let response = get_ok(&endpoints.categories()).await?;
    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(categories_from_json(value))
}

pub async fn fetch_translations(endpoints: &Endpoints) -> Result<Translations, ApiError> {
    let response = get_ok(&endpoints.languages()).await?;
    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Translations::from_value(&value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn send_otp(endpoints: &Endpoints, request: &SendOtpRequest) -> SendOtpOutcome {
    match post_json(&endpoints.send_otp(), request).await {
        Ok(response) => {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    error!(format!("Submission response read error ({}): {}", status, err));
                    String::new()
                }
            };
            let outcome = SendOtpOutcome::from_response(status, &body);
            if let SendOtpOutcome::Transport(err) = &outcome {
                error!(format!("Submission error ({}): {}", status, err));
            }
            outcome
        }
        Err(err) => {
            error!(format!("Submission error: {}", err));
            SendOtpOutcome::Transport(err)
        }
    }
}

pub async fn verify_otp(config: &ClientConfig, request: &VerifyOtpRequest) -> VerifyOutcome {
    match &config.verification {
        VerificationMode::Mock { accepted_code } => {
            TimeoutFuture::new(MOCK_VERIFY_DELAY_MS).await;
            VerifyOutcome::mocked(accepted_code, request)
        }
        VerificationMode::Remote => {
            match post_json(&config.endpoints.verify_otp(), request).await {
                Ok(response) => VerifyOutcome::from_status(response.status()),
                Err(err) => {
                    error!(format!("Verification error: {}", err));
                    VerifyOutcome::Failed(err)
                }
            }
        }
    }
}

pub async fn resend_otp(config: &ClientConfig, request: &ResendOtpRequest) -> Result<(), ApiError> {
    match &config.verification {
        VerificationMode::Mock { .. } => {
            TimeoutFuture::new(MOCK_RESEND_DELAY_MS).await;
            Ok(())
        }
        VerificationMode::Remote => {
            let response = post_json(&config.endpoints.resend_otp(), request).await?;
            resend_result(response.status())
        }
    }
}
