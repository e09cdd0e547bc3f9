//! Client configuration.
//!
//! The browser build reads these values at compile time (`option_env!`) and
//! passes them to [`ClientConfig::from_values`].

use crate::api::Endpoints;

pub const DEFAULT_API_BASE: &str = "/api";

/// How the verification stage checks a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationMode {
    /// `POST /user/verify-otp` and `/user/resend-otp`.
    Remote,
    /// No network: only `accepted_code` verifies and resend always succeeds.
    Mock { accepted_code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub verification: VerificationMode,
    /// Whether the activation form refuses to submit without a license file.
    pub license_required: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::new(DEFAULT_API_BASE),
            verification: VerificationMode::Remote,
            license_required: true,
        }
    }
}

impl ClientConfig {
    pub fn from_values(
        api_base: Option<&str>,
        mock_code: Option<&str>,
        license_required: Option<&str>,
    ) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        let verification = match mock_code.map(str::trim) {
            Some(code) if !code.is_empty() => VerificationMode::Mock {
                accepted_code: code.to_string(),
            },
            _ => VerificationMode::Remote,
        };

        Self {
            endpoints: Endpoints::new(api_base),
            verification,
            license_required: parse_flag(license_required).unwrap_or(true),
        }
    }
}

/// Reads `true/false`, `1/0`, `yes/no`. Anything else is `None`.
pub fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
