use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod contexts;
mod pages;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
