//! View rendering for the activation form.

use common::i18n::{MessageKey, Text};
use common::intake::CategoryLoad;
use common::model::activation::{Attachment, Field};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ActivationForm;
use super::update::field_input;

pub fn view(component: &ActivationForm, ctx: &Context<ActivationForm>) -> Html {
    let link = ctx.link();
    let i18n = &component.i18n;
    let intake = &component.intake;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="activation-form" onsubmit={onsubmit} novalidate={true}>
            <div class="form-grid">
                { text_field(component, link, Field::FirstName, "text", "person") }
                { text_field(component, link, Field::LastName, "text", "person") }
            </div>
            { text_field(component, link, Field::Phone, "tel", "call") }
            { text_field(component, link, Field::Email, "email", "mail") }
            { license_picker(component, link) }
            { category_select(component, link) }

            { error_line(intake.general_error().map(|t| t.resolve(i18n.dictionary()))) }

            <button type="submit" class="submit-btn" disabled={intake.is_submitting()}>
                if intake.is_submitting() {
                    <span class="spinner" />
                    { i18n.t(MessageKey::FormSubmitting) }
                } else {
                    { i18n.t(MessageKey::FormSubmit) }
                }
            </button>
        </form>
    }
}

fn labels(field: Field) -> (MessageKey, MessageKey) {
    match field {
        Field::FirstName => (MessageKey::FormFirstName, MessageKey::PlaceholderFirstName),
        Field::LastName => (MessageKey::FormLastName, MessageKey::PlaceholderLastName),
        Field::Phone => (MessageKey::FormPhone, MessageKey::PlaceholderPhone),
        _ => (MessageKey::FormEmail, MessageKey::PlaceholderEmail),
    }
}

fn input_id(field: Field) -> &'static str {
    match field {
        Field::FirstName => "firstName",
        Field::LastName => "lastName",
        Field::Phone => "phone",
        Field::Email => "email",
        Field::CategoryId => "categoryId",
        Field::LicenseFile => "license",
    }
}

fn error_line(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn field_error<'a>(component: &'a ActivationForm, field: Field) -> Option<&'a str> {
    component
        .intake
        .field_error(field)
        .map(|text: &Text| text.resolve(component.i18n.dictionary()))
}

fn text_field(
    component: &ActivationForm,
    link: &Scope<ActivationForm>,
    field: Field,
    input_type: &'static str,
    icon: &'static str,
) -> Html {
    let i18n = &component.i18n;
    let (label, placeholder) = labels(field);
    let id = input_id(field);
    let error = field_error(component, field);

    html! {
        <div class="form-field">
            <label for={id}>
                { i18n.t(label) }{" "}{ i18n.t(MessageKey::FormRequired) }
            </label>
            <div class="input-with-icon">
                <i class="material-icons">{ icon }</i>
                <input
                    id={id}
                    type={input_type}
                    class={classes!("text-input", error.is_some().then_some("invalid"))}
                    placeholder={i18n.t(placeholder).to_string()}
                    value={component.intake.fields().get(field).to_string()}
                    oninput={link.callback(field_input(field))}
                />
            </div>
            { error_line(error) }
        </div>
    }
}

fn license_picker(component: &ActivationForm, link: &Scope<ActivationForm>) -> Html {
    let i18n = &component.i18n;
    let license = component.intake.license();
    let error = field_error(component, Field::LicenseFile);

    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <div class="form-field">
            <label for="license">
                { i18n.t(MessageKey::FormLicense) }
                if component.intake.license_required() {
                    {" "}{ i18n.t(MessageKey::FormRequired) }
                }
            </label>
            <label
                for="license"
                class={classes!(
                    "file-drop",
                    error.is_some().then_some("invalid"),
                    license.is_some().then_some("selected"),
                )}
            >
                if let Some(file) = license {
                    <i class="material-icons">{"check_circle"}</i>
                    <span class="file-name">{ file.name().to_string() }</span>
                } else {
                    <i class="material-icons">{"upload"}</i>
                    <span>{ i18n.t(MessageKey::FormLicenseUpload) }</span>
                }
                <input
                    id="license"
                    type="file"
                    class="hidden"
                    accept="image/*,.pdf"
                    ref={component.file_input_ref.clone()}
                    onchange={onchange}
                />
            </label>
            { error_line(error) }
        </div>
    }
}

fn category_select(component: &ActivationForm, link: &Scope<ActivationForm>) -> Html {
    let i18n = &component.i18n;
    let intake = &component.intake;
    let selected = intake.fields().category_id.clone();

    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectCategory(select.value())
    });

    html! {
        <div class="form-field">
            <label for="categoryId">
                { i18n.t(MessageKey::FormCategory) }{" "}{ i18n.t(MessageKey::FormRequired) }
            </label>
            <select
                id="categoryId"
                class="select-input"
                disabled={intake.category_load() == CategoryLoad::Loading}
                onchange={onchange}
            >
                { for intake.categories().iter().map(|category| {
                    let key = category.key();
                    html! {
                        <option value={key.clone()} selected={key == selected}>
                            { category.name.clone() }
                        </option>
                    }
                }) }
            </select>
            { error_line(field_error(component, Field::CategoryId)) }
            { error_line(intake.category_error().map(|key| i18n.t(key))) }
        </div>
    }
}
