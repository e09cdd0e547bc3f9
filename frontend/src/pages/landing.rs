//! The activation landing page: hero, form card, footer and the OTP modal.

use common::i18n::MessageKey;
use common::model::activation::ActivationRequest;
use yew::prelude::*;

use crate::components::activation::{ActivationForm, LicenseUpload};
use crate::components::footer::Footer;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::verification::VerificationModal;
use crate::contexts::language::use_i18n;

#[function_component(Landing)]
pub fn landing() -> Html {
    let i18n = use_i18n();
    let submitted = use_state(|| None::<ActivationRequest<LicenseUpload>>);
    let show_verification = use_state(|| false);

    let on_submit_success = {
        let submitted = submitted.clone();
        let show_verification = show_verification.clone();
        Callback::from(move |request: ActivationRequest<LicenseUpload>| {
            submitted.set(Some(request));
            show_verification.set(true);
        })
    };
    let on_open_change = {
        let show_verification = show_verification.clone();
        Callback::from(move |open: bool| show_verification.set(open))
    };

    let phone: AttrValue = submitted
        .as_ref()
        .map(|request| AttrValue::from(request.phone().to_string()))
        .unwrap_or_default();

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-orbs">
                    <div class="orb orb-left" />
                    <div class="orb orb-right" />
                    <div class="orb orb-bottom" />
                </div>
                <div class="hero-content">
                    <div class="hero-toolbar">
                        <LanguageSwitcher />
                    </div>
                    <div class="hero-header">
                        <img src="/assets/martev-logo.svg" alt="MartEV Logo" class="hero-logo" />
                        <h1 class="hero-title">{ i18n.t(MessageKey::HeroTitle) }</h1>
                        <p class="hero-subtitle">{ i18n.t(MessageKey::HeroSubtitle) }</p>
                    </div>
                    <div class="form-card">
                        <ActivationForm on_submit_success={on_submit_success} />
                    </div>
                </div>
            </section>

            <Footer />

            <VerificationModal
                open={*show_verification}
                phone={phone}
                on_open_change={on_open_change}
            />
        </div>
    }
}
