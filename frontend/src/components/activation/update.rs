//! Update function for the activation form.
//!
//! Each message is forwarded to the `ActivationIntake` controller; network
//! work is spawned here and its result comes back as another message. Toasts
//! queued by the controller are flushed after every transition.

use common::model::activation::Field;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ActivationForm, LicenseUpload};
use crate::api::send_otp;

pub fn update(component: &mut ActivationForm, ctx: &Context<ActivationForm>, msg: Msg) -> bool {
    let rerender = match msg {
        Msg::I18nChanged(i18n) => {
            component.i18n = i18n;
            true
        }
        Msg::SetField(field, value) => {
            component.intake.set_field(field, value);
            true
        }
        Msg::SelectCategory(id) => {
            component.intake.select_category(id);
            true
        }
        Msg::FileSelected(file) => {
            component.intake.select_license(file.map(LicenseUpload::from));
            if component.intake.license().is_none() {
                component.clear_file_input();
            }
            true
        }
        Msg::CategoriesLoaded(Ok(categories)) => {
            component.intake.categories_loaded(categories);
            true
        }
        Msg::CategoriesLoaded(Err(err)) => {
            error!(format!("Category fetch error: {}", err));
            component.intake.categories_failed();
            true
        }
        Msg::Submit => match component.intake.begin_submit() {
            Ok(request) => {
                let link = ctx.link().clone();
                let endpoints = component.config.endpoints.clone();
                spawn_local(async move {
                    let outcome = send_otp(&endpoints, &request).await;
                    link.send_message(Msg::SubmitFinished(outcome));
                });
                true
            }
            Err(_) => true,
        },
        Msg::SubmitFinished(outcome) => {
            if let Some(request) = component.intake.finish_submit(outcome) {
                component.clear_file_input();
                ctx.props().on_submit_success.emit(request);
            }
            true
        }
    };

    component.flush_notifications();
    rerender
}

/// Message for a text input event on `field`.
pub fn field_input(field: Field) -> impl Fn(InputEvent) -> Msg {
    move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    }
}
