use yew::prelude::*;

mod config;
mod hooks;
mod scroll;
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <main>
            <Landing />
        </main>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Mounting landing page");
    yew::Renderer::<App>::new().render();
}
