//! Build-time client configuration.
//!
//! Values are baked in by `trunk build` / `cargo build` from the environment:
//! `MARTEV_API_BASE`, `MARTEV_OTP_MOCK_CODE`, `MARTEV_LICENSE_REQUIRED`.

use common::config::ClientConfig;

pub fn client_config() -> ClientConfig {
    ClientConfig::from_values(
        option_env!("MARTEV_API_BASE"),
        option_env!("MARTEV_OTP_MOCK_CODE"),
        option_env!("MARTEV_LICENSE_REQUIRED"),
    )
}
