//! Server configuration, read from the environment at startup.
//!
//! | Variable              | Default     |
//! |-----------------------|-------------|
//! | `MARTEV_HOST`         | `127.0.0.1` |
//! | `MARTEV_PORT`         | `8080`      |
//! | `MARTEV_DEV_API`      | `false`     |
//! | `MARTEV_DEV_OTP_CODE` | `123456`    |
//! | `MARTEV_OPEN_BROWSER` | `false`     |
//!
//! Unparseable values are logged and replaced by their default.

use common::challenge::CODE_LENGTH;
use common::config::parse_flag;
use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DEV_OTP_CODE: &str = "123456";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mounts the development stand-in of the activation API under `/api`.
    pub dev_api: bool,
    /// The only code the development API issues and accepts.
    pub dev_otp_code: String,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dev_api: false,
            dev_otp_code: DEFAULT_DEV_OTP_CODE.to_string(),
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("MARTEV_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("MARTEV_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid MARTEV_PORT `{}`, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let dev_otp_code = match lookup("MARTEV_DEV_OTP_CODE") {
            Some(code)
                if code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit()) =>
            {
                code
            }
            Some(code) => {
                warn!("MARTEV_DEV_OTP_CODE `{}` is not {} digits, using default", code, CODE_LENGTH);
                defaults.dev_otp_code
            }
            None => defaults.dev_otp_code,
        };

        Self {
            host,
            port,
            dev_api: flag(&lookup, "MARTEV_DEV_API", defaults.dev_api),
            dev_otp_code,
            open_browser: flag(&lookup, "MARTEV_OPEN_BROWSER", defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key) {
        Some(raw) => parse_flag(Some(&raw)).unwrap_or_else(|| {
            warn!("Invalid {} `{}`, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn explicit_values() {
        let config = config(&[
            ("MARTEV_HOST", "0.0.0.0"),
            ("MARTEV_PORT", "3000"),
            ("MARTEV_DEV_API", "true"),
            ("MARTEV_DEV_OTP_CODE", "000111"),
            ("MARTEV_OPEN_BROWSER", "1"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(config.dev_api);
        assert!(config.open_browser);
        assert_eq!(config.dev_otp_code, "000111");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[
            ("MARTEV_PORT", "eighty"),
            ("MARTEV_DEV_API", "sometimes"),
            ("MARTEV_DEV_OTP_CODE", "12ab56"),
        ]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.dev_api);
        assert_eq!(config.dev_otp_code, DEFAULT_DEV_OTP_CODE);
    }
}
