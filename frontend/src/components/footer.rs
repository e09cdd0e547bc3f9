use common::i18n::MessageKey;
use yew::prelude::*;

use crate::contexts::language::use_i18n;

const PHONE_HREF: &str = "tel:+995322000000";
const EMAIL: &str = "info@martev.io";
const WEBSITE: &str = "https://martev.io";
const APP_STORE_URL: &str = "https://bit.ly/4i4KOOo";
const GOOGLE_PLAY_URL: &str = "http://bit.ly/3Z5kqv2";

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <img src="/assets/martev-logo.svg" alt="MartEV Logo" class="footer-logo" />
                    <p class="muted">{ i18n.t(MessageKey::FooterDescription) }</p>
                </div>

                <div class="footer-column">
                    <h3>{ i18n.t(MessageKey::FooterContact) }</h3>
                    <a href={PHONE_HREF} class="footer-link">
                        <i class="material-icons">{"call"}</i>{ i18n.t(MessageKey::FooterCallUs) }
                    </a>
                    <a href={format!("mailto:{}", EMAIL)} class="footer-link">
                        <i class="material-icons">{"mail"}</i>{ EMAIL }
                    </a>
                    <a href={WEBSITE} target="_blank" rel="noopener noreferrer" class="footer-link">
                        <i class="material-icons">{"public"}</i>{"martev.io"}
                    </a>
                </div>

                <div class="footer-column">
                    <h3>{ i18n.t(MessageKey::FooterDownloadApp) }</h3>
                    <p class="muted">{ i18n.t(MessageKey::FooterAppDescription) }</p>
                    <div class="store-links">
                        <a href={APP_STORE_URL} target="_blank" rel="noopener noreferrer" class="store-btn">{"App Store"}</a>
                        <a href={GOOGLE_PLAY_URL} target="_blank" rel="noopener noreferrer" class="store-btn">{"Google Play"}</a>
                    </div>
                </div>
            </div>

            <p class="copyright">
                { format!("© {} MartEV. {}", year, i18n.t(MessageKey::FooterCopyright)) }
            </p>
        </footer>
    }
}
