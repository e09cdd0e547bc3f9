//! Transient notifications.

use common::i18n::Dictionary;
use common::intake::{Notification, NotificationKind};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_LIFETIME_MS: u32 = 3000;

/// Shows a queued controller notification in the current language.
pub fn show_notification(notification: &Notification, dictionary: &Dictionary) {
    show_toast(notification.text.resolve(dictionary), notification.kind);
}

/// Injects a self-removing toast at the bottom of the page.
pub fn show_toast(message: &str, kind: NotificationKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let background = match kind {
        NotificationKind::Info => "rgba(16, 185, 129, 0.95)",
        NotificationKind::Destructive => "rgba(220, 38, 38, 0.95)",
    };
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", background),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "8px"),
        ("z-index", "10000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
