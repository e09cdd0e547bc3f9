use common::i18n::Language;
use yew::prelude::*;

use crate::contexts::language::use_i18n;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="language-switcher">
            <i class="material-icons">{"language"}</i>
            { for Language::ALL.iter().map(|&language| {
                let active = i18n.language == language;
                let onclick = i18n.set_language.reform(move |_: MouseEvent| language);
                html! {
                    <button class={classes!("lang-btn", active.then_some("active"))} onclick={onclick}>
                        { language.switcher_label() }
                    </button>
                }
            }) }
        </div>
    }
}
