//! Modal dialog shell: backdrop, centered panel, dismiss on backdrop click or
//! Escape. The panel takes focus when it opens so Escape works right away.

use uuid::Uuid;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::{html, Callback, Children, Component, Context, Html, NodeRef, Properties};

pub struct Dialog {
    pub id: String,
    panel_ref: NodeRef,
    focused: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

impl Component for Dialog {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("dialog-{}", Uuid::new_v4()),
            panel_ref: NodeRef::default(),
            focused: false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |e: MouseEvent| {
                if e.target() == e.current_target() {
                    on_dismiss.emit(());
                }
            })
        };
        let on_keydown = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_dismiss.emit(());
                }
            })
        };

        html! {
            <div class="dialog-overlay show" onclick={on_backdrop}>
                <div
                    class="dialog-content"
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    ref={self.panel_ref.clone()}
                    onkeydown={on_keydown}
                >
                    <button class="dialog-close" aria-label="Close" onclick={props.on_dismiss.reform(|_: MouseEvent| ())}>
                        {"×"}
                    </button>
                    { for props.children.iter() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().open {
            self.focused = false;
            return;
        }
        if !self.focused {
            if let Some(panel) = self.panel_ref.cast::<HtmlElement>() {
                self.focused = panel.focus().is_ok();
            }
        }
    }
}
