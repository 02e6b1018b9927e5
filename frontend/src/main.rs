use crate::app::App;

mod app;
mod components;
mod net;
mod pdf;
mod top_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
