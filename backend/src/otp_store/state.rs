//! In-memory record of the codes issued by the development API.
//!
//! - `OtpState`: clonable, shared across actix workers as `web::Data`.
//! - One pending code per normalized phone number. A successful verification
//!   consumes it; issuing again replaces it.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct OtpState {
    /// Normalized phone -> pending code.
    pub codes: Arc<RwLock<HashMap<String, String>>>,
    /// The development API never generates codes; it always issues this one.
    pub dev_code: String,
}

impl OtpState {
    pub fn new(dev_code: impl Into<String>) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            dev_code: dev_code.into(),
        }
    }

    pub async fn issue(&self, phone: &str) -> String {
        let mut codes = self.codes.write().await;
        codes.insert(phone.to_string(), self.dev_code.clone());
        self.dev_code.clone()
    }

    pub async fn is_pending(&self, phone: &str) -> bool {
        self.codes.read().await.contains_key(phone)
    }

    /// Consumes the pending code when it matches.
    pub async fn verify(&self, phone: &str, code: &str) -> bool {
        let mut codes = self.codes.write().await;
        match codes.get(phone) {
            Some(expected) if expected == code => {
                codes.remove(phone);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn verify_consumes_matching_code_only() {
        let state = OtpState::new("123456");
        assert_eq!(state.issue("+995555").await, "123456");
        assert!(!state.verify("+995555", "000000").await);
        assert!(state.is_pending("+995555").await);
        assert!(state.verify("+995555", "123456").await);
        assert!(!state.is_pending("+995555").await);
        assert!(!state.verify("+995555", "123456").await);
    }
}
