use common::api::VerifyOutcome;
use common::challenge::Session;
use common::error::ApiError;

use crate::contexts::language::I18n;

pub enum Msg {
    I18nChanged(I18n),
    SetCode(String),
    Verify,
    VerifyFinished(Session, VerifyOutcome),
    Resend,
    ResendFinished(Session, Result<(), ApiError>),
    Close,
    Continue,
}
