use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::VerificationModal;
use crate::api::{resend_otp, verify_otp};

pub fn update(component: &mut VerificationModal, ctx: &Context<VerificationModal>, msg: Msg) -> bool {
    match msg {
        Msg::I18nChanged(i18n) => {
            component.i18n = i18n;
            true
        }
        Msg::SetCode(value) => {
            component.challenge.set_code(&value);
            true
        }
        Msg::Verify => {
            if let Ok((session, request)) = component.challenge.begin_verify() {
                let link = ctx.link().clone();
                let config = component.config.clone();
                spawn_local(async move {
                    let outcome = verify_otp(&config, &request).await;
                    link.send_message(Msg::VerifyFinished(session, outcome));
                });
            }
            true
        }
        Msg::VerifyFinished(session, outcome) => {
            component.challenge.finish_verify(session, outcome);
            true
        }
        Msg::Resend => {
            if let Ok((session, request)) = component.challenge.begin_resend() {
                let link = ctx.link().clone();
                let config = component.config.clone();
                spawn_local(async move {
                    let result = resend_otp(&config, &request).await;
                    if let Err(err) = &result {
                        error!(format!("Resend error: {}", err));
                    }
                    link.send_message(Msg::ResendFinished(session, result));
                });
            }
            true
        }
        Msg::ResendFinished(session, result) => {
            component.challenge.finish_resend(session, result);
            true
        }
        Msg::Close => {
            component.challenge.close();
            ctx.props().on_open_change.emit(false);
            true
        }
        Msg::Continue => {
            if component.challenge.confirm() {
                ctx.props().on_open_change.emit(false);
            }
            true
        }
    }
}
