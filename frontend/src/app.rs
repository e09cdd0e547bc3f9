use crate::contexts::language::LanguageProvider;
use crate::pages::landing::Landing;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <LanguageProvider>
                <Landing />
            </LanguageProvider>
        }
    }
}
