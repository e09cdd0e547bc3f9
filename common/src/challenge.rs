//! Verification challenge: the state behind the OTP modal.
//!
//! Closed -> (open) -> Editing <-> Verifying / Resending -> Verified -> (close) -> Closed.
//! Closing from any phase drops the code, the error and the verified flag, so
//! the next opening always starts clean.
//!
//! Every `open` and `close` starts a new [`Session`]. A request started in one
//! session carries its number back with the result, and results from any
//! other session are dropped.

use crate::api::VerifyOutcome;
use crate::error::{ApiError, ChallengeError};
use crate::requests::{ResendOtpRequest, VerifyOtpRequest};

pub const CODE_LENGTH: usize = 6;

/// Identifies one opening of the modal.
pub type Session = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengePhase {
    Closed,
    Editing,
    Verifying,
    Resending,
    Verified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationChallenge {
    session: Session,
    phase: ChallengePhase,
    phone: String,
    code: String,
    error: Option<ChallengeError>,
}

impl Default for VerificationChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationChallenge {
    pub fn new() -> Self {
        Self {
            session: 0,
            phase: ChallengePhase::Closed,
            phone: String::new(),
            code: String::new(),
            error: None,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn phase(&self) -> ChallengePhase {
        self.phase
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn error(&self) -> Option<ChallengeError> {
        self.error
    }

    pub fn is_open(&self) -> bool {
        self.phase != ChallengePhase::Closed
    }

    pub fn is_verified(&self) -> bool {
        self.phase == ChallengePhase::Verified
    }

    /// Whether the verify control should be enabled.
    pub fn can_verify(&self) -> bool {
        self.phase == ChallengePhase::Editing && self.code.len() == CODE_LENGTH
    }

    /// Entry state bound to a copy of `phone`.
    pub fn open(&mut self, phone: &str) {
        *self = Self {
            session: self.session.wrapping_add(1),
            phase: ChallengePhase::Editing,
            phone: phone.to_string(),
            ..Self::new()
        };
    }

    /// Keeps ASCII digits only, at most six. Any prior error is cleared.
    pub fn set_code(&mut self, input: &str) {
        if self.phase != ChallengePhase::Editing {
            return;
        }
        self.code = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LENGTH)
            .collect();
        self.error = None;
    }

    /// Enters `Verifying` and returns the body to check, tagged with the
    /// current session. A short code is rejected here and never reaches the
    /// verifier.
    pub fn begin_verify(&mut self) -> Result<(Session, VerifyOtpRequest), ChallengeError> {
        if self.phase != ChallengePhase::Editing {
            return Err(ChallengeError::Busy);
        }
        if self.code.len() != CODE_LENGTH {
            self.error = Some(ChallengeError::CodeTooShort);
            return Err(ChallengeError::CodeTooShort);
        }
        self.phase = ChallengePhase::Verifying;
        self.error = None;
        let request = VerifyOtpRequest {
            phone: self.phone.clone(),
            code: self.code.clone(),
        };
        Ok((self.session, request))
    }

    /// Applies a verify outcome started in `session`. Outcomes from an earlier
    /// opening of the modal are dropped.
    pub fn finish_verify(&mut self, session: Session, outcome: VerifyOutcome) {
        if session != self.session || self.phase != ChallengePhase::Verifying {
            return;
        }
        match outcome {
            VerifyOutcome::Accepted => {
                self.phase = ChallengePhase::Verified;
                self.error = None;
            }
            VerifyOutcome::Incorrect => {
                self.phase = ChallengePhase::Editing;
                self.error = Some(ChallengeError::IncorrectCode);
            }
            VerifyOutcome::Failed(_) => {
                self.phase = ChallengePhase::Editing;
                self.error = Some(ChallengeError::VerifyFailed);
            }
        }
    }

    /// Allowed from `Editing` whatever the code length. Clears the code and
    /// the error.
    pub fn begin_resend(&mut self) -> Result<(Session, ResendOtpRequest), ChallengeError> {
        if self.phase != ChallengePhase::Editing {
            return Err(ChallengeError::Busy);
        }
        self.phase = ChallengePhase::Resending;
        self.code.clear();
        self.error = None;
        let request = ResendOtpRequest {
            phone: self.phone.clone(),
        };
        Ok((self.session, request))
    }

    pub fn finish_resend(&mut self, session: Session, result: Result<(), ApiError>) {
        if session != self.session || self.phase != ChallengePhase::Resending {
            return;
        }
        self.phase = ChallengePhase::Editing;
        if result.is_err() {
            self.error = Some(ChallengeError::ResendFailed);
        }
    }

    /// The "continue" action. Only available once verified; closes the modal.
    pub fn confirm(&mut self) -> bool {
        if self.phase != ChallengePhase::Verified {
            return false;
        }
        self.close();
        true
    }

    /// Dismisses the modal from any phase and resets every local value.
    pub fn close(&mut self) {
        *self = Self {
            session: self.session.wrapping_add(1),
            ..Self::new()
        };
    }
}
