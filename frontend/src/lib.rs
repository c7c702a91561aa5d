mod components;
mod hooks;
pub mod links;
mod pages;
pub mod services;
pub mod session_store;
pub mod utils;
pub mod viewport;

use pages::{home::HomePage, not_found::NotFoundPage};
use session_store::SessionStore;
use yew::prelude::*;
use yew_router::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/players/:id/overview")]
    Player { id: String },
    #[at("/upload")]
    Upload,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        // Player and upload pages are served by the rest of the site
        Route::Player { .. } | Route::Upload | Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ContextProvider<SessionStore> context={SessionStore::global()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionStore>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
