//! Activation form: collects the user's details, asks the backend to send an
//! OTP and hands the validated payload to the verification stage.
//!
//! The categories are fetched once, on the first render.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ActivationFormProps;
pub use state::{ActivationForm, LicenseUpload};

use crate::api::fetch_categories;

impl Component for ActivationForm {
    type Message = Msg;
    type Properties = ActivationFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ActivationForm::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.intake.begin_category_load() {
            let link = ctx.link().clone();
            let endpoints = self.config.endpoints.clone();
            spawn_local(async move {
                let result = fetch_categories(&endpoints).await;
                link.send_message(Msg::CategoriesLoaded(result));
            });
        }
    }
}
