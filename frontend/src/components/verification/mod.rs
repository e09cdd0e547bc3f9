//! OTP verification modal.
//!
//! Wraps a [`VerificationChallenge`]: opening the modal starts a fresh
//! challenge for the given phone, every way of closing it resets the
//! challenge before telling the parent.

use common::challenge::VerificationChallenge;
use common::config::ClientConfig;
use yew::context::ContextHandle;
use yew::prelude::*;

mod messages;
mod props;
mod update;
mod view;

pub use messages::Msg;
pub use props::VerificationModalProps;

use crate::config::client_config;
use crate::contexts::language::I18n;

pub struct VerificationModal {
    pub challenge: VerificationChallenge,
    pub config: ClientConfig,
    pub i18n: I18n,
    _i18n_handle: Option<ContextHandle<I18n>>,
}

impl Component for VerificationModal {
    type Message = Msg;
    type Properties = VerificationModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (i18n, handle) = match ctx.link().context::<I18n>(ctx.link().callback(Msg::I18nChanged)) {
            Some((i18n, handle)) => (i18n, Some(handle)),
            None => (I18n::fallback(), None),
        };
        let mut challenge = VerificationChallenge::new();
        if ctx.props().open {
            challenge.open(&ctx.props().phone);
        }
        Self {
            challenge,
            config: client_config(),
            i18n,
            _i18n_handle: handle,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.open && !old_props.open {
            self.challenge.open(&props.phone);
        } else if !props.open && self.challenge.is_open() {
            self.challenge.close();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
