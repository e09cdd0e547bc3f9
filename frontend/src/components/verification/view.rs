//! View rendering for the verification modal.

use common::challenge::{ChallengePhase, CODE_LENGTH};
use common::i18n::MessageKey;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::VerificationModal;
use crate::components::dialog::Dialog;

pub fn view(component: &VerificationModal, ctx: &Context<VerificationModal>) -> Html {
    let link = ctx.link();
    let i18n = &component.i18n;
    let challenge = &component.challenge;
    let verified = challenge.is_verified();

    let (title, subtitle) = if verified {
        (
            i18n.t(MessageKey::VerificationTitleSuccess).to_string(),
            i18n.t(MessageKey::VerificationSubtitleSuccess).to_string(),
        )
    } else {
        (
            i18n.t(MessageKey::VerificationTitle).to_string(),
            format!("{} {}", i18n.t(MessageKey::VerificationSubtitle), challenge.phone()),
        )
    };

    let badge_icon = if verified { "check_circle" } else { "phone" };
    let body = if verified {
        html! {
            <button class="submit-btn" onclick={link.callback(|_| Msg::Continue)}>
                { i18n.t(MessageKey::VerificationContinue) }
            </button>
        }
    } else {
        code_entry(component, link)
    };

    html! {
        <Dialog open={ctx.props().open} on_dismiss={link.callback(|_| Msg::Close)}>
            <div class="dialog-header">
                <div class="dialog-badge">
                    <i class="material-icons">{ badge_icon }</i>
                </div>
                <h2 class="dialog-title">{ title }</h2>
                <p class="dialog-description">{ subtitle }</p>
            </div>
            { body }
        </Dialog>
    }
}

fn code_entry(component: &VerificationModal, link: &Scope<VerificationModal>) -> Html {
    let i18n = &component.i18n;
    let challenge = &component.challenge;
    let verifying = challenge.phase() == ChallengePhase::Verifying;
    let resending = challenge.phase() == ChallengePhase::Resending;
    let digits: Vec<char> = challenge.code().chars().collect();

    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetCode(input.value())
    });
    let onkeydown = link.batch_callback(|e: KeyboardEvent| {
        (e.key() == "Enter").then_some(Msg::Verify)
    });

    html! {
        <div class="otp-entry">
            <label class="otp-slots">
                { for (0..CODE_LENGTH).map(|index| html! {
                    <span class={classes!("otp-slot", (index == digits.len()).then_some("active"))}>
                        { digits.get(index).map(char::to_string).unwrap_or_default() }
                    </span>
                }) }
                <input
                    class="otp-input"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength={CODE_LENGTH.to_string()}
                    value={challenge.code().to_string()}
                    disabled={verifying || resending}
                    oninput={oninput}
                    onkeydown={onkeydown}
                />
            </label>

            if let Some(key) = challenge.error().and_then(|err| err.message_key()) {
                <p class="field-error centered">{ i18n.t(key) }</p>
            }

            <button
                class="submit-btn"
                onclick={link.callback(|_| Msg::Verify)}
                disabled={!challenge.can_verify()}
            >
                if verifying {
                    <span class="spinner" />
                    { i18n.t(MessageKey::VerificationVerifying) }
                } else {
                    { i18n.t(MessageKey::VerificationVerify) }
                }
            </button>

            <div class="resend">
                <button
                    type="button"
                    class="link-btn"
                    onclick={link.callback(|_| Msg::Resend)}
                    disabled={resending || verifying}
                >
                    if resending {
                        { i18n.t(MessageKey::VerificationResending) }
                    } else {
                        { i18n.t(MessageKey::VerificationResend) }
                    }
                </button>
            </div>
        </div>
    }
}
