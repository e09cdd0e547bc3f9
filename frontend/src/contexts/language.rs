//! Language preference and translation tables shared through a Yew context.
//!
//! The provider starts with the bundled tables and the stored preference,
//! then tries `GET /languages` once. A failed or incomplete download is
//! logged and the bundled tables stay active.

use std::rc::Rc;

use common::i18n::{Dictionary, Language, MessageKey, Translations, LANGUAGE_STORAGE_KEY};
use gloo_console::{error, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::fetch_translations;
use crate::config::client_config;

/// Value published to every component below [`LanguageProvider`].
#[derive(Clone, PartialEq)]
pub struct I18n {
    pub language: Language,
    pub translations: Rc<Translations>,
    pub set_language: Callback<Language>,
}

impl I18n {
    /// Used when a component renders outside the provider.
    pub fn fallback() -> Self {
        Self {
            language: Language::default(),
            translations: Rc::new(Translations::bundled().clone()),
            set_language: Callback::noop(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.translations.dictionary(self.language)
    }

    pub fn t(&self, key: MessageKey) -> &str {
        self.translations.text(self.language, key)
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(I18n::fallback)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_language() -> Language {
    let stored = local_storage().and_then(|s| s.get_item(LANGUAGE_STORAGE_KEY).ok().flatten());
    Language::from_code(stored.as_deref())
}

fn store_language(language: Language) {
    let stored = local_storage().map(|s| s.set_item(LANGUAGE_STORAGE_KEY, language.code()));
    if !matches!(stored, Some(Ok(()))) {
        warn!("Unable to persist language preference");
    }
}

pub enum Msg {
    SetLanguage(Language),
    TranslationsLoaded(Translations),
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct LanguageProvider {
    language: Language,
    translations: Rc<Translations>,
    loaded: bool,
}

impl Component for LanguageProvider {
    type Message = Msg;
    type Properties = LanguageProviderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let language = load_language();
        store_language(language);
        Self {
            language,
            translations: Rc::new(Translations::bundled().clone()),
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetLanguage(language) => {
                if language == self.language {
                    return false;
                }
                self.language = language;
                store_language(language);
                true
            }
            Msg::TranslationsLoaded(translations) => {
                self.translations = Rc::new(translations);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let i18n = I18n {
            language: self.language,
            translations: self.translations.clone(),
            set_language: ctx.link().callback(Msg::SetLanguage),
        };
        html! {
            <ContextProvider<I18n> context={i18n}>
                { ctx.props().children.clone() }
            </ContextProvider<I18n>>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            let endpoints = client_config().endpoints;
            spawn_local(async move {
                match fetch_translations(&endpoints).await {
                    Ok(translations) => link.send_message(Msg::TranslationsLoaded(translations)),
                    Err(err) => error!(format!("Translation fetch error: {}", err)),
                }
            });
        }
    }
}
